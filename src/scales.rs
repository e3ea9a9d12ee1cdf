// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies an epoch counter and encodes how values
//! on it relate to the absolute **Julian Day**.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Day | 0.0 |
//! | [`J2K`] | Days since J2000.0 | 2 451 545.0 |
//! | [`UnixTime`] | Days since 1970-01-01 | 2 440 587.5 |
//!
//! All three live on the same civil (UTC) axis: the solar model uses the
//! timestamp directly, so no ΔT correction is involved.

use super::instant::TimeScale;
use qtty::Days;

/// Julian Day — the identity scale.
///
/// `to_jd(v) = v`, i.e. the quantity *is* a Julian Day number.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Days elapsed since the J2000.0 epoch (JD 2 451 545.0).
///
/// This is the day count that the low-precision solar formulas are written
/// against. Note it is **not** the standard MJD (`JD − 2 400 000.5`); the
/// two differ by 51 544.5 days.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct J2K;

/// `JD = J2K + J2000_EPOCH`.
const J2000_EPOCH: Days = Days::new(2_451_545.0);

impl TimeScale for J2K {
    const LABEL: &'static str = "J2000+";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + J2000_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - J2000_EPOCH
    }
}

/// Unix Time — seconds since 1970-01-01T00:00:00 UTC, stored as **days**.
///
/// Leap seconds are ignored, as POSIX does.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixTime;

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

impl TimeScale for UnixTime {
    const LABEL: &'static str = "Unix";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + UNIX_EPOCH_JD
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - UNIX_EPOCH_JD
    }
}
