// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Greenwich Mean Sidereal Time.
//!
//! Linear low-precision expression in the J2000 day count `d`:
//!
//! ```text
//! GMST = (18.697374558 + 24.06570982441908 · d) mod 24   [hours]
//! ```

use super::instant::Time;
use super::scales::J2K;

/// GMST at the J2000.0 epoch, in hours.
const GMST_AT_J2000: f64 = 18.697_374_558;

/// Sidereal hours elapsed per solar day.
const SIDEREAL_HOURS_PER_DAY: f64 = 24.065_709_824_419_08;

const HOURS_PER_DAY: f64 = 24.0;

/// GMST in hours for an instant on the J2000 day-count scale.
///
/// The result is reduced with a Euclidean remainder, so instants before
/// J2000 also land in `[0, 24)`.
pub fn gmst_hours(d: Time<J2K>) -> f64 {
    let hours = (GMST_AT_J2000 + SIDEREAL_HOURS_PER_DAY * d.value()).rem_euclid(HOURS_PER_DAY);
    // rem_euclid may round a tiny negative remainder up to the modulus.
    if hours >= HOURS_PER_DAY {
        0.0
    } else {
        hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_advances_by_sidereal_excess_per_day() {
        let a = gmst_hours(Time::new(100.0));
        let b = gmst_hours(Time::new(101.0));
        let excess = (b - a).rem_euclid(24.0);
        assert!((excess - 0.065_709_824_419_08).abs() < 1e-6, "excess = {excess}");
    }

    #[test]
    fn gmst_before_j2000_is_in_range() {
        let h = gmst_hours(Time::new(-12_345.678));
        assert!((0.0..24.0).contains(&h), "gmst = {h}");
    }
}
