// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! UTC Unix timestamp and the day counts derived from it.
//!
//! A [`Timestamp`] is the only stored quantity; Julian Day, the J2000 day
//! count and GMST are recomputed on every call.
//!
//! ```
//! use geoterm::Timestamp;
//!
//! let t = Timestamp::new(946_728_000); // 2000-01-01T12:00:00Z
//! assert_eq!(t.julian_day(), 2_451_545.0);
//! assert_eq!(t.modified_julian_day(), 0.0);
//! ```

use chrono::{DateTime, Utc};
use qtty::Centuries;

use super::instant::Time;
use super::scales::{J2K, JD, UnixTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whole seconds since 1970-01-01T00:00:00 UTC.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(i64);

impl Timestamp {
    /// Seconds in one civil day.
    pub const SECONDS_PER_DAY: i64 = 86_400;

    #[inline]
    pub const fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    /// The current wall-clock time, truncated to whole seconds.
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    /// Sub-second precision is dropped.
    #[inline]
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self(datetime.timestamp())
    }

    /// `None` when outside chrono's representable range.
    #[inline]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.0, 0)
    }

    #[inline]
    pub const fn seconds(&self) -> i64 {
        self.0
    }

    /// This instant on the Unix day-count scale.
    #[inline]
    pub fn unix_date(&self) -> Time<UnixTime> {
        Time::new(self.0 as f64 / Self::SECONDS_PER_DAY as f64)
    }

    /// This instant as a typed Julian Day.
    #[inline]
    pub fn julian_date(&self) -> Time<JD> {
        self.unix_date().to::<JD>()
    }

    /// This instant as a typed day count since J2000.0.
    #[inline]
    pub fn j2000_date(&self) -> Time<J2K> {
        self.julian_date().to::<J2K>()
    }

    /// Julian Day: `t / 86400 + 2440587.5`.
    #[inline]
    pub fn julian_day(&self) -> f64 {
        self.julian_date().value()
    }

    /// Julian Day minus J2000.0 (`JD − 2451545.0`).
    ///
    /// This is the day count the solar formulas are written against, not
    /// the standard MJD.
    #[inline]
    pub fn modified_julian_day(&self) -> f64 {
        self.j2000_date().value()
    }

    /// Julian centuries since J2000.0.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        self.j2000_date().julian_centuries()
    }

    /// Greenwich Mean Sidereal Time in hours, always in `[0, 24)`.
    #[inline]
    pub fn gmst(&self) -> f64 {
        super::sidereal::gmst_hours(self.j2000_date())
    }
}

impl From<i64> for Timestamp {
    fn from(seconds: i64) -> Self {
        Self(seconds)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_utc() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "@{}", self.0),
        }
    }
}
