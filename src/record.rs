// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! City and country records held by a [`Gazetteer`](crate::Gazetteer).

use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::geo::{GeoPoint, Polygon};

/// A populated place.
///
/// City names are not unique: only the `(name, country)` pair identifies a
/// record.
#[derive(Debug, Clone)]
pub struct CityRecord {
    name: String,
    alt_names: BTreeSet<String>,
    country: String,
    /// Set once the resolver finds `country` to be an alternate spelling.
    corrected_country: OnceLock<String>,
    population: u64,
    location: GeoPoint,
}

impl CityRecord {
    pub(crate) fn new(
        name: String,
        alt_names: BTreeSet<String>,
        country: String,
        population: u64,
        location: GeoPoint,
    ) -> Self {
        Self {
            name,
            alt_names,
            country,
            corrected_country: OnceLock::new(),
            population,
            location,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always contains [`name`](Self::name).
    pub fn alt_names(&self) -> &BTreeSet<String> {
        &self.alt_names
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.alt_names.contains(name)
    }

    /// Owning country, corrected to its primary name once resolved.
    pub fn country(&self) -> &str {
        self.corrected_country
            .get()
            .map(String::as_str)
            .unwrap_or(&self.country)
    }

    /// The country name exactly as loaded.
    pub fn source_country(&self) -> &str {
        &self.country
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    /// Record `primary` as this city's owning country.
    ///
    /// Returns `true` only for the call that performed the write. The cell is
    /// write-once: repeated or concurrent calls leave the first value in place.
    pub(crate) fn correct_country(&self, primary: &str) -> bool {
        if self.country() == primary {
            return false;
        }
        let mut wrote = false;
        self.corrected_country.get_or_init(|| {
            wrote = true;
            primary.to_owned()
        });
        wrote
    }
}

impl std::fmt::Display for CityRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {} {}", self.name, self.country(), self.location)
    }
}

/// A sovereign country or territory.
#[derive(Debug, Clone)]
pub struct CountryRecord {
    name: String,
    alt_names: BTreeSet<String>,
    boundary: Polygon,
    centroid: GeoPoint,
}

impl CountryRecord {
    pub(crate) fn new(
        name: String,
        alt_names: BTreeSet<String>,
        boundary: Polygon,
        centroid: GeoPoint,
    ) -> Self {
        Self {
            name,
            alt_names,
            boundary,
            centroid,
        }
    }

    /// Unique across a gazetteer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always contains [`name`](Self::name).
    pub fn alt_names(&self) -> &BTreeSet<String> {
        &self.alt_names
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.alt_names.contains(name)
    }

    pub fn boundary(&self) -> &Polygon {
        &self.boundary
    }

    pub fn centroid(&self) -> GeoPoint {
        self.centroid
    }
}

impl std::fmt::Display for CountryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
