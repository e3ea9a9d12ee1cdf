// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Location resolution: `(city name, country name)` → one record each.
//!
//! # Algorithm
//!
//! 1. Collect every city and every country listing the supplied name among
//!    its alternate names.
//! 2. Either list empty → [`ResolveError::NotFound`].
//! 3. More than one country → [`ResolveError::AmbiguousCountry`].
//! 4. A single candidate city is taken as is. Otherwise intersect the
//!    owning countries of the candidates with the country's alternate
//!    names. The intersection is iterated in lexicographic order and its
//!    first element selects the cities kept. Anything other than exactly
//!    one surviving city is an error.
//! 5. If the city's stored country is an alternate spelling, it is
//!    rewritten to the country's primary name and reported as a
//!    [`CountryCorrection`].

use std::collections::BTreeSet;

use crate::error::{RecordKind, ResolveError};
use crate::gazetteer::Gazetteer;
use crate::record::{CityRecord, CountryRecord};

/// Resolves place names against a borrowed [`Gazetteer`].
#[derive(Debug, Copy, Clone)]
pub struct Resolver<'g> {
    gazetteer: &'g Gazetteer,
}

/// Outcome of a successful [`Resolver::resolve`].
#[derive(Debug, Clone)]
pub struct Resolution<'g> {
    pub city: &'g CityRecord,
    pub country: &'g CountryRecord,
    /// Present when this call rewrote the city's country name.
    pub correction: Option<CountryCorrection>,
}

/// A city's owning country rewritten from an alternate spelling to the
/// primary name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCorrection {
    pub city: String,
    pub from: String,
    pub to: String,
}

impl<'g> Resolver<'g> {
    pub fn new(gazetteer: &'g Gazetteer) -> Self {
        Self { gazetteer }
    }

    pub fn resolve(
        &self,
        city_name: &str,
        country_name: &str,
    ) -> Result<Resolution<'g>, ResolveError> {
        let gazetteer: &'g Gazetteer = self.gazetteer;
        let cities: Vec<&'g CityRecord> = gazetteer
            .cities()
            .iter()
            .filter(|c| c.has_name(city_name))
            .collect();
        let countries: Vec<&'g CountryRecord> = gazetteer
            .countries()
            .iter()
            .filter(|c| c.has_name(country_name))
            .collect();

        if cities.is_empty() {
            return Err(not_found(RecordKind::City, city_name));
        }
        let country = match countries.as_slice() {
            [] => return Err(not_found(RecordKind::Country, country_name)),
            [only] => *only,
            many => {
                return Err(ResolveError::AmbiguousCountry {
                    name: country_name.to_owned(),
                    candidates: many.iter().map(|c| c.name().to_owned()).collect(),
                })
            }
        };

        let city = match cities.as_slice() {
            [only] => *only,
            _ => narrow(&cities, city_name, country)?,
        };
        let correction = correct_country(city, country);

        Ok(Resolution {
            city,
            country,
            correction,
        })
    }
}

/// Pick the single city among several same-named `cities` owned by `country`.
///
/// Owning-country names are read once up front so a concurrent correction
/// cannot change them between the intersection and the filter.
fn narrow<'g>(
    cities: &[&'g CityRecord],
    city_name: &str,
    country: &CountryRecord,
) -> Result<&'g CityRecord, ResolveError> {
    let owned: Vec<(&'g CityRecord, &'g str)> = cities.iter().map(|&c| (c, c.country())).collect();
    let owners: BTreeSet<&str> = owned.iter().map(|&(_, o)| o).collect();

    let Some(owner) = owners.into_iter().find(|o| country.has_name(o)) else {
        return Err(ResolveError::AmbiguousCity {
            name: city_name.to_owned(),
            country: country.name().to_owned(),
            candidates: owned.iter().map(|&(_, o)| o.to_owned()).collect(),
        });
    };

    let kept: Vec<&'g CityRecord> = owned
        .iter()
        .filter(|&&(_, o)| o == owner)
        .map(|&(c, _)| c)
        .collect();
    match kept.as_slice() {
        [city] => Ok(*city),
        _ => Err(ResolveError::AmbiguousCity {
            name: city_name.to_owned(),
            country: owner.to_owned(),
            candidates: kept.iter().map(|c| c.name().to_owned()).collect(),
        }),
    }
}

fn correct_country(city: &CityRecord, country: &CountryRecord) -> Option<CountryCorrection> {
    let from = city.country().to_owned();
    if !city.correct_country(country.name()) {
        return None;
    }
    tracing::info!(
        city = city.name(),
        from = %from,
        to = country.name(),
        "corrected city country to primary name"
    );
    Some(CountryCorrection {
        city: city.name().to_owned(),
        from,
        to: country.name().to_owned(),
    })
}

fn not_found(kind: RecordKind, name: &str) -> ResolveError {
    ResolveError::NotFound {
        kind,
        name: name.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Amendments, RawCity, RawCountry};

    fn raw_country(name: &str, alt: &[&str]) -> RawCountry {
        RawCountry {
            name: name.into(),
            alt_names: Some(alt.iter().map(|s| s.to_string()).collect()),
            boundary: vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
            centroid: (0.3, 0.6),
        }
    }

    fn raw_city(name: &str, alt: &[&str], country: &str, population: u64) -> RawCity {
        RawCity {
            name: name.into(),
            alt_names: alt.iter().map(|s| s.to_string()).collect(),
            country: Some(country.into()),
            population,
            location: (0.5, 0.5),
        }
    }

    fn fixture() -> Gazetteer {
        Gazetteer::load(
            vec![
                raw_city("Springfield", &[], "United States of America", 170_000),
                raw_city("Springfield", &[], "Testland", 5_000),
                raw_city("Vienna", &["Wien"], "Österreich", 1_900_000),
                raw_city("Twin", &[], "Testland", 10),
                raw_city("Twin", &[], "Testland", 20),
                raw_city("Lonely", &[], "Elsewhere", 1),
                raw_city("Graz", &[], "Österreich", 1),
                raw_city("Graz", &[], "Austria", 290_000),
            ],
            vec![
                raw_country("United States of America", &["USA", "United States"]),
                raw_country("Testland", &[]),
                raw_country("Austria", &["Österreich"]),
                raw_country("Georgia", &["Sakartvelo"]),
                raw_country("Georgia (US)", &["Sakartvelo"]),
                raw_country("Elsewhere", &[]),
            ],
            &Amendments::default(),
        )
        .unwrap()
    }

    #[test]
    fn unique_city_resolves_with_primary_country() {
        let g = fixture();
        let hit = g.resolve("Wien", "Austria").unwrap();
        assert_eq!(hit.city.name(), "Vienna");
        assert_eq!(hit.country.name(), "Austria");
        assert_eq!(hit.city.country(), hit.country.name());
    }

    #[test]
    fn duplicate_city_narrows_by_country() {
        let g = fixture();
        let hit = g.resolve("Springfield", "Testland").unwrap();
        assert_eq!(hit.city.country(), "Testland");
        assert_eq!(hit.city.population(), 5_000);
        assert!(hit.correction.is_none());

        let us = g.resolve("Springfield", "USA").unwrap();
        assert_eq!(us.city.population(), 170_000);
    }

    #[test]
    fn alternate_country_spelling_is_corrected_once() {
        let g = fixture();
        let first = g.resolve("Vienna", "Österreich").unwrap();
        assert_eq!(
            first.correction,
            Some(CountryCorrection {
                city: "Vienna".into(),
                from: "Österreich".into(),
                to: "Austria".into(),
            })
        );
        assert_eq!(first.city.country(), "Austria");
        assert_eq!(first.city.source_country(), "Österreich");

        let second = g.resolve("Vienna", "Austria").unwrap();
        assert!(second.correction.is_none());
        assert_eq!(second.city.country(), "Austria");
    }

    #[test]
    fn unknown_names_are_not_found() {
        let g = fixture();
        assert_eq!(
            g.resolve("Atlantis", "Testland").unwrap_err(),
            ResolveError::NotFound {
                kind: RecordKind::City,
                name: "Atlantis".into(),
            }
        );
        assert!(matches!(
            g.resolve("Vienna", "Narnia"),
            Err(ResolveError::NotFound { kind: RecordKind::Country, .. })
        ));
    }

    #[test]
    fn shared_country_alt_name_is_ambiguous() {
        let g = fixture();
        match g.resolve("Vienna", "Sakartvelo") {
            Err(ResolveError::AmbiguousCountry { candidates, .. }) => {
                assert_eq!(candidates, vec!["Georgia", "Georgia (US)"]);
            }
            other => panic!("expected AmbiguousCountry, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_city_outside_country_is_ambiguous() {
        let g = fixture();
        assert!(matches!(
            g.resolve("Springfield", "Austria"),
            Err(ResolveError::AmbiguousCity { .. })
        ));
    }

    #[test]
    fn duplicates_within_one_country_stay_ambiguous() {
        let g = fixture();
        match g.resolve("Twin", "Testland") {
            Err(ResolveError::AmbiguousCity { country, candidates, .. }) => {
                assert_eq!(country, "Testland");
                assert_eq!(candidates.len(), 2);
            }
            other => panic!("expected AmbiguousCity, got {other:?}"),
        }
    }

    #[test]
    fn unique_city_is_taken_whatever_its_stored_country() {
        let g = fixture();
        let hit = g.resolve("Lonely", "Testland").unwrap();
        assert_eq!(hit.city.name(), "Lonely");
        assert_eq!(hit.country.name(), "Testland");
        assert_eq!(
            hit.correction,
            Some(CountryCorrection {
                city: "Lonely".into(),
                from: "Elsewhere".into(),
                to: "Testland".into(),
            })
        );
        assert_eq!(hit.city.country(), "Testland");
        assert_eq!(hit.city.source_country(), "Elsewhere");
    }

    #[test]
    fn owner_tie_break_prefers_lexicographically_first_name() {
        let g = fixture();
        // Both "Austria" and "Österreich" name the country; "Austria" sorts first.
        let hit = g.resolve("Graz", "Austria").unwrap();
        assert_eq!(hit.city.source_country(), "Austria");
        assert_eq!(hit.city.population(), 290_000);
        assert!(hit.correction.is_none());

        let again = g.resolve("Graz", "Österreich").unwrap();
        assert_eq!(again.city.population(), 290_000);
        assert!(again.correction.is_none());
    }
}
