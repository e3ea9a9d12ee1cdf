// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! In-memory gazetteer snapshot.
//!
//! A [`Gazetteer`] is built once from raw collaborator records and is
//! read-only afterwards. Share it behind a reference or an `Arc`; every
//! accessor takes `&self`, and the only interior write (the resolver's
//! country-name correction) is a write-once cell.
//!
//! ```
//! use geoterm::{Amendments, Gazetteer, RawCity, RawCountry};
//!
//! let countries = vec![RawCountry {
//!     name: "Austria".into(),
//!     alt_names: Some(vec!["Österreich".into()]),
//!     boundary: vec![(9.5, 46.4), (17.2, 46.4), (17.2, 49.0), (9.5, 49.0)],
//!     centroid: (47.6, 14.1),
//! }];
//! let cities = vec![RawCity {
//!     name: "Vienna".into(),
//!     alt_names: vec!["Wien".into()],
//!     country: Some("Österreich".into()),
//!     population: 1_900_000,
//!     location: (48.2, 16.37),
//! }];
//!
//! let gazetteer = Gazetteer::load(cities, countries, &Amendments::default())?;
//! let hit = gazetteer.resolve("Wien", "Austria")?;
//! assert_eq!(hit.city.country(), "Austria");
//! # Ok::<(), geoterm::Error>(())
//! ```

use std::collections::{BTreeSet, HashSet};

use crate::error::{GazetteerError, RecordKind, ResolveError};
use crate::geo::{GeoPoint, Polygon};
use crate::record::{CityRecord, CountryRecord};
use crate::resolver::{Resolution, Resolver};
use crate::source::{Amendments, RawCity, RawCountry};

/// Immutable city and country collections.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    cities: Vec<CityRecord>,
    countries: Vec<CountryRecord>,
}

impl Gazetteer {
    /// Build a snapshot, repairing missing values from `amendments`.
    ///
    /// # Errors
    ///
    /// [`GazetteerError::DataIntegrity`] when a city has no country and no
    /// amendment, a country has no alternate names and no amendment, two
    /// countries share a primary name, or coordinates/geometry are invalid.
    pub fn load<C, K>(
        cities: C,
        countries: K,
        amendments: &Amendments,
    ) -> Result<Self, GazetteerError>
    where
        C: IntoIterator<Item = RawCity>,
        K: IntoIterator<Item = RawCountry>,
    {
        let countries = countries
            .into_iter()
            .map(|raw| build_country(raw, amendments))
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::with_capacity(countries.len());
        for country in &countries {
            if !seen.insert(country.name()) {
                return Err(GazetteerError::integrity(
                    RecordKind::Country,
                    country.name(),
                    "duplicate primary name",
                ));
            }
        }

        let cities = cities
            .into_iter()
            .map(|raw| build_city(raw, amendments))
            .collect::<Result<Vec<_>, _>>()?;

        for name in amendments.country_alt_names.keys() {
            if !seen.contains(name.as_str()) {
                tracing::warn!(country = %name, "alternate-name amendment matches no country");
            }
        }

        tracing::debug!(
            cities = cities.len(),
            countries = countries.len(),
            "loaded gazetteer snapshot"
        );

        Ok(Self { cities, countries })
    }

    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Every city listing `name` among its alternate names.
    pub fn city_candidates<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a CityRecord> + 'a {
        self.cities.iter().filter(move |c| c.has_name(name))
    }

    /// Every country listing `name` among its alternate names.
    pub fn country_candidates<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a CountryRecord> + 'a {
        self.countries.iter().filter(move |c| c.has_name(name))
    }

    /// The country whose primary name is exactly `name`.
    pub fn country(&self, name: &str) -> Option<&CountryRecord> {
        self.countries.iter().find(|c| c.name() == name)
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self)
    }

    /// Shorthand for `self.resolver().resolve(city, country)`.
    pub fn resolve(&self, city: &str, country: &str) -> Result<Resolution<'_>, ResolveError> {
        self.resolver().resolve(city, country)
    }
}

fn build_country(
    raw: RawCountry,
    amendments: &Amendments,
) -> Result<CountryRecord, GazetteerError> {
    let extra = amendments.country_alt_names.get(&raw.name);
    let listed = match (raw.alt_names, extra) {
        (Some(names), _) => names,
        (None, Some(_)) => {
            tracing::info!(country = %raw.name, "filled missing alternate names from amendments");
            Vec::new()
        }
        (None, None) => {
            return Err(GazetteerError::integrity(
                RecordKind::Country,
                &raw.name,
                "alternate names missing and no amendment supplied",
            ))
        }
    };

    let mut alt_names: BTreeSet<String> = listed.into_iter().collect();
    alt_names.extend(extra.into_iter().flatten().cloned());
    alt_names.insert(raw.name.clone());

    let (lat, lon) = raw.centroid;
    let centroid = GeoPoint::new(lat, lon)
        .map_err(|e| GazetteerError::integrity(RecordKind::Country, &raw.name, e.to_string()))?;
    let boundary = Polygon::new(raw.boundary)
        .map_err(|e| GazetteerError::integrity(RecordKind::Country, &raw.name, e.to_string()))?;

    Ok(CountryRecord::new(raw.name, alt_names, boundary, centroid))
}

fn build_city(raw: RawCity, amendments: &Amendments) -> Result<CityRecord, GazetteerError> {
    let country = match raw.country {
        Some(country) => country,
        None => {
            let Some(country) = amendments.city_country.get(&raw.name) else {
                return Err(GazetteerError::integrity(
                    RecordKind::City,
                    &raw.name,
                    "country missing and no amendment supplied",
                ));
            };
            tracing::info!(
                city = %raw.name,
                country = %country,
                "filled missing country from amendments"
            );
            country.clone()
        }
    };

    let mut alt_names: BTreeSet<String> = raw.alt_names.into_iter().collect();
    alt_names.insert(raw.name.clone());

    let (lat, lon) = raw.location;
    let location = GeoPoint::new(lat, lon)
        .map_err(|e| GazetteerError::integrity(RecordKind::City, &raw.name, e.to_string()))?;

    Ok(CityRecord::new(
        raw.name,
        alt_names,
        country,
        raw.population,
        location,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<(f64, f64)> {
        vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
    }

    fn country(name: &str, alt: &[&str]) -> RawCountry {
        RawCountry {
            alt_names: Some(alt.iter().map(|s| s.to_string()).collect()),
            ..unlisted_country(name)
        }
    }

    fn unlisted_country(name: &str) -> RawCountry {
        RawCountry {
            name: name.into(),
            alt_names: None,
            boundary: square(),
            centroid: (0.5, 0.5),
        }
    }

    fn city(name: &str, country: Option<&str>) -> RawCity {
        RawCity {
            name: name.into(),
            alt_names: Vec::new(),
            country: country.map(str::to_owned),
            population: 1_000,
            location: (0.5, 0.5),
        }
    }

    #[test]
    fn primary_names_join_alternate_sets() {
        let g = Gazetteer::load(
            vec![city("Springfield", Some("Testland"))],
            vec![country("Testland", &[])],
            &Amendments::default(),
        )
        .unwrap();
        assert!(g.cities()[0].has_name("Springfield"));
        assert!(g.countries()[0].has_name("Testland"));
        assert_eq!(g.city_count(), 1);
        assert_eq!(g.country_count(), 1);
    }

    #[test]
    fn missing_city_country_is_amended() {
        let amendments = Amendments::new().with_city_country("Pristina", "Kosovo");
        let g = Gazetteer::load(
            vec![city("Pristina", None)],
            vec![country("Kosovo", &[])],
            &amendments,
        )
        .unwrap();
        assert_eq!(g.cities()[0].country(), "Kosovo");
    }

    #[test]
    fn missing_city_country_without_amendment_fails() {
        let err = Gazetteer::load(
            vec![city("Pristina", None)],
            Vec::new(),
            &Amendments::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GazetteerError::DataIntegrity {
                kind: RecordKind::City,
                ref name,
                ..
            } if name == "Pristina"
        ));
    }

    #[test]
    fn missing_country_alt_names_are_amended() {
        let amendments = Amendments::new().with_country_alt_names("Czechia", ["Czech Republic"]);
        let g =
            Gazetteer::load(Vec::new(), vec![unlisted_country("Czechia")], &amendments).unwrap();
        let names: Vec<_> = g.countries()[0].alt_names().iter().cloned().collect();
        assert_eq!(names, vec!["Czech Republic", "Czechia"]);
    }

    #[test]
    fn missing_country_alt_names_without_amendment_fails() {
        let err = Gazetteer::load(
            Vec::new(),
            vec![unlisted_country("Czechia")],
            &Amendments::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GazetteerError::DataIntegrity { kind: RecordKind::Country, .. }
        ));
    }

    #[test]
    fn amendments_extend_present_alt_names() {
        let amendments = Amendments::new().with_country_alt_names("Testland", ["TL"]);
        let g = Gazetteer::load(
            Vec::new(),
            vec![country("Testland", &["Test Land"])],
            &amendments,
        )
        .unwrap();
        assert_eq!(g.countries()[0].alt_names().len(), 3);
    }

    #[test]
    fn duplicate_country_primary_name_fails() {
        let err = Gazetteer::load(
            Vec::new(),
            vec![country("Testland", &[]), country("Testland", &["T"])],
            &Amendments::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate primary name"));
    }

    #[test]
    fn invalid_city_location_fails() {
        let mut bad = city("Nowhere", Some("Testland"));
        bad.location = (120.0, 0.0);
        let err = Gazetteer::load(vec![bad], Vec::new(), &Amendments::default()).unwrap_err();
        assert!(err.to_string().contains("latitude 120"));
    }

    #[test]
    fn candidate_lookups() {
        let g = Gazetteer::load(
            vec![
                city("Springfield", Some("A")),
                city("Springfield", Some("B")),
                city("Shelbyville", Some("A")),
            ],
            vec![country("A", &["Ay"]), country("B", &[])],
            &Amendments::default(),
        )
        .unwrap();
        assert_eq!(g.city_candidates("Springfield").count(), 2);
        assert_eq!(g.country_candidates("Ay").count(), 1);
        assert!(g.country("Ay").is_none());
        assert_eq!(g.country("A").map(CountryRecord::name), Some("A"));
    }
}
