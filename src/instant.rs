// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day counts tagged with the epoch they are measured from.
//!
//! [`Time<S>`] stores a scalar in [`Days`] whose epoch is fixed at compile
//! time by the marker `S: TimeScale`. Switching epochs goes through the
//! absolute Julian Day, so every marker only has to know its own offset.

use qtty::Days;
use std::marker::PhantomData;

/// An epoch counter measured in days.
///
/// Implementors map their native day count to and from the absolute
/// **Julian Day**.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix used when a [`Time`] is displayed.
    const LABEL: &'static str;

    fn to_jd(value: Days) -> Days;

    fn from_jd(jd: Days) -> Days;
}

/// Days elapsed since the epoch of `S`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self::from_days(Days::new(value))
    }

    #[inline]
    const fn from_days(quantity: Days) -> Self {
        Self {
            quantity,
            _scale: PhantomData,
        }
    }

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// The same instant counted from the epoch of `T`.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_days(T::from_jd(S::to_jd(self.quantity)))
    }
}

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}
