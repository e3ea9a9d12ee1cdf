// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Place-name resolution and the solar day/night terminator.
//!
//! Two independent pipelines share this crate:
//!
//! - **Location resolution**: a [`Gazetteer`] snapshot is loaded from raw
//!   city/country records, and a [`Resolver`] turns a `(city, country)`
//!   name pair into exactly one [`CityRecord`] and one [`CountryRecord`],
//!   disambiguating duplicate city names by country.
//! - **Terminator**: a [`Timestamp`] is placed on the Julian Day axis, the
//!   sun's ecliptic and equatorial coordinates are derived, and a closed
//!   [`TerminatorCurve`] / night-side [`Polygon`] is produced.
//!
//! # Time types
//!
//! - [`Timestamp`] — whole UTC seconds since the Unix epoch.
//! - [`Time<S>`] — generic instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`] — alias for `Time<JD>`.
//! - [`J2000Date`] — alias for `Time<J2K>`, days since JD 2 451 545.0.
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Day |
//! | [`J2K`] | Days since J2000.0 |
//! | [`UnixTime`] | Unix / POSIX time |
//!
//! # Example
//!
//! ```
//! use geoterm::{Terminator, Timestamp};
//!
//! let curve = Terminator::new(Timestamp::new(946_728_000)).curve();
//! assert_eq!(curve.len(), 362);
//! assert!(curve.is_finite());
//! ```

mod error;
mod gazetteer;
mod geo;
pub(crate) mod instant;
mod julian_date_ext;
mod record;
mod resolver;
pub(crate) mod scales;
pub mod sidereal;
pub mod solar;
mod source;
mod terminator;
mod timestamp;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::{Error, GazetteerError, GeoError, RecordKind, ResolveError, Result};
pub use gazetteer::Gazetteer;
pub use geo::{GeoPoint, Polygon};
pub use instant::{Time, TimeScale};
pub use record::{CityRecord, CountryRecord};
pub use resolver::{CountryCorrection, Resolution, Resolver};
pub use scales::{J2K, JD, UnixTime};
pub use solar::{SunEcliptic, SunEquatorial};
pub use source::{parse_coordinates, split_alternate_names, Amendments, RawCity, RawCountry};
pub use terminator::{terminator_polygon, Terminator, TerminatorCurve};
pub use timestamp::Timestamp;

/// Julian Day — continuous count of days since the Julian Period.
pub type JulianDate = Time<JD>;

/// Days elapsed since J2000.0 (`JD − 2 451 545.0`).
pub type J2000Date = Time<J2K>;
