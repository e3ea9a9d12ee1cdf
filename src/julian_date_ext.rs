// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian centuries on the J2000 day count.

use qtty::*;

use super::instant::Time;
use super::scales::J2K;

/// One Julian century expressed in days.
const JULIAN_CENTURY: Days = Days::new(36_525.0);

impl Time<J2K> {
    /// The J2000.0 epoch itself, i.e. day zero of this scale.
    pub const EPOCH: Self = Self::new(0.0);

    /// Julian centuries since J2000.0: `T = d / 36525`.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new((self.quantity() / JULIAN_CENTURY).simplify().value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_century_zero() {
        assert_eq!(Time::<J2K>::EPOCH.julian_centuries(), Centuries::new(0.0));
    }

    #[test]
    fn whole_centuries_after_j2000() {
        let j2k = Time::<J2K>::new(36_525.0 * 3.0);
        assert!((j2k.julian_centuries() - Centuries::new(3.0)).abs() < Centuries::new(1e-12));
    }

    #[test]
    fn negative_centuries_before_j2000() {
        let j2k = Time::<J2K>::new(-36_525.0 / 2.0);
        assert!((j2k.julian_centuries() - Centuries::new(-0.5)).abs() < Centuries::new(1e-12));
    }
}
