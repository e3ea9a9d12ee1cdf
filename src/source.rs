// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Raw collaborator records fed into [`Gazetteer::load`](crate::Gazetteer::load).
//!
//! Ingestion (CSV, GeoJSON, ...) belongs to the caller. These types carry
//! what the ingestion layer produced, with missing values kept as `None` so
//! the loader can repair them from [`Amendments`].

use std::collections::HashMap;

use crate::error::GeoError;
use crate::geo::GeoPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One city row as produced by the ingestion layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawCity {
    pub name: String,
    /// May be empty; the primary name is always merged in on load.
    pub alt_names: Vec<String>,
    /// `None` when the source left the country column blank.
    pub country: Option<String>,
    pub population: u64,
    /// `(lat, lon)` in degrees.
    pub location: (f64, f64),
}

/// One country row as produced by the ingestion layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawCountry {
    pub name: String,
    /// `None` when the source left the alternate-name column blank.
    pub alt_names: Option<Vec<String>>,
    /// Exterior ring as `(lon, lat)` pairs.
    pub boundary: Vec<(f64, f64)>,
    /// `(lat, lon)` in degrees.
    pub centroid: (f64, f64),
}

/// Hand-curated fixes applied while loading.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Amendments {
    /// City primary name → country primary name, for cities whose raw
    /// country is missing.
    pub city_country: HashMap<String, String>,
    /// Country primary name → extra alternate names.
    pub country_alt_names: HashMap<String, Vec<String>>,
}

impl Amendments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city_country(
        mut self,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.city_country.insert(city.into(), country.into());
        self
    }

    pub fn with_country_alt_names<I, S>(mut self, country: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.country_alt_names
            .entry(country.into())
            .or_default()
            .extend(names.into_iter().map(Into::into));
        self
    }
}

/// Split a comma-separated alternate-name column.
///
/// Blank entries are dropped, so an empty column yields an empty list.
pub fn split_alternate_names(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse a `"lat,lon"` coordinate column.
pub fn parse_coordinates(field: &str) -> Result<GeoPoint, GeoError> {
    let mut parts = field.split(',').map(str::trim);
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(GeoError::Malformed(format!(
            "expected 'lat,lon', got '{field}'"
        )));
    };
    let parse = |s: &str| {
        s.parse::<f64>()
            .map_err(|e| GeoError::Malformed(format!("bad coordinate '{s}': {e}")))
    };
    GeoPoint::new(parse(lat)?, parse(lon)?)
}
