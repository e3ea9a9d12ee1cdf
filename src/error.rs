// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy.
//!
//! - [`GazetteerError`]: load-time inconsistencies in the source data. Fatal
//!   for the snapshot being built.
//! - [`ResolveError`]: a name lookup could not be narrowed to exactly one
//!   record. Recoverable; carries the offending names.
//! - [`GeoError`]: invalid coordinates or geometry.
//!
//! The terminator model never fails: degenerate instants surface as
//! non-finite latitudes instead.

use thiserror::Error;

/// Crate-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Gazetteer(#[from] GazetteerError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Geo(#[from] GeoError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Which collection a lookup ran against.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecordKind {
    City,
    Country,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::City => f.write_str("city"),
            RecordKind::Country => f.write_str("country"),
        }
    }
}

/// Inconsistency detected while building a gazetteer snapshot.
#[derive(Error, Debug, PartialEq)]
pub enum GazetteerError {
    /// A record needed an amendment that was not supplied, or the source
    /// violates a uniqueness/validity constraint.
    #[error("data integrity error in {kind} '{name}': {reason}")]
    DataIntegrity {
        kind: RecordKind,
        name: String,
        reason: String,
    },
}

impl GazetteerError {
    pub(crate) fn integrity(kind: RecordKind, name: &str, reason: impl Into<String>) -> Self {
        Self::DataIntegrity {
            kind,
            name: name.to_owned(),
            reason: reason.into(),
        }
    }
}

/// A city/country name pair could not be resolved to a single record each.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No record carries the name.
    #[error("no {kind} named '{name}'")]
    NotFound { kind: RecordKind, name: String },

    /// More than one country lists the name among its alternate names.
    #[error("country name '{name}' matches several countries: {candidates:?}")]
    AmbiguousCountry {
        name: String,
        candidates: Vec<String>,
    },

    /// Several cities share the name and the country could not single one out.
    #[error("city name '{name}' is ambiguous for country '{country}': candidates in {candidates:?}")]
    AmbiguousCity {
        name: String,
        country: String,
        candidates: Vec<String>,
    },
}

/// Invalid coordinates or geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("latitude {0} outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("malformed geometry: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_kind_and_name() {
        let err = ResolveError::NotFound {
            kind: RecordKind::City,
            name: "Springfield".into(),
        };
        assert_eq!(err.to_string(), "no city named 'Springfield'");

        let country = ResolveError::NotFound {
            kind: RecordKind::Country,
            name: "Atlantis".into(),
        };
        assert_eq!(country.to_string(), "no country named 'Atlantis'");
    }

    #[test]
    fn crate_error_wraps_sources() {
        let err: Error = GeoError::InvalidLatitude(91.0).into();
        assert!(matches!(err, Error::Geo(_)));
        assert_eq!(err.to_string(), "latitude 91 outside [-90, 90]");
    }
}
