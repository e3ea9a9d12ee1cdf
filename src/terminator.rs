// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day/night terminator.
//!
//! For every integer longitude in `[-180, 180]` the terminator latitude is
//!
//! ```text
//! ha  = (GMST + lon/15)·15 − α
//! lat = atan(−cos ha / tan δ)
//! ```
//!
//! The 361 vertices are closed by repeating the first one and then reversed,
//! so the exposed ring winds around the night hemisphere.
//!
//! # Equinoxes
//!
//! At `δ = 0` the division above is by zero. The value is propagated with
//! IEEE-754 semantics rather than clamped: `atan(±∞)` gives ±90°, and the
//! rare `0/0` gives NaN. [`TerminatorCurve::is_finite`] lets the caller
//! skip drawing such a curve.

use super::geo::Polygon;
use super::sidereal::gmst_hours;
use super::solar::SunEquatorial;
use super::timestamp::Timestamp;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Westmost sampled longitude.
const LON_MIN: i32 = -180;
/// Eastmost sampled longitude.
const LON_MAX: i32 = 180;

/// Terminator model for one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Terminator {
    time: Timestamp,
    sun: SunEquatorial,
    gmst: f64,
}

impl Terminator {
    /// Number of sampled longitudes.
    pub const SAMPLES: usize = (LON_MAX - LON_MIN + 1) as usize;

    pub fn new(time: Timestamp) -> Self {
        Self {
            time,
            sun: SunEquatorial::at(time),
            gmst: gmst_hours(time.j2000_date()),
        }
    }

    pub fn time(&self) -> Timestamp {
        self.time
    }

    pub fn sun(&self) -> SunEquatorial {
        self.sun
    }

    /// Terminator latitude in degrees at `lon` degrees east.
    pub fn latitude_at(&self, lon: f64) -> f64 {
        let ha = ((self.gmst + lon / 15.0) * 15.0 - self.sun.right_ascension).to_radians();
        let delta = self.sun.declination.to_radians();
        (-ha.cos() / delta.tan()).atan().to_degrees()
    }

    /// `(lon, lat)` vertices from -180° to 180° in computation order.
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        (LON_MIN..=LON_MAX)
            .map(|lon| {
                let lon = f64::from(lon);
                (lon, self.latitude_at(lon))
            })
            .collect()
    }

    /// The closed, reversed ring.
    pub fn curve(&self) -> TerminatorCurve {
        let mut ring = self.vertices();
        ring.push(ring[0]);
        ring.reverse();
        TerminatorCurve {
            vertices: ring,
            declination: self.sun.declination,
        }
    }

    /// The night-side polygon.
    pub fn polygon(&self) -> Polygon {
        self.curve().into_polygon()
    }
}

/// Closed `(lon, lat)` ring of [`Terminator::SAMPLES`] + 1 vertices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TerminatorCurve {
    vertices: Vec<(f64, f64)>,
    declination: f64,
}

impl TerminatorCurve {
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Solar declination the curve was computed from, in degrees.
    pub fn declination(&self) -> f64 {
        self.declination
    }

    /// `true` when every latitude is finite.
    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|(_, lat)| lat.is_finite())
    }

    /// `true` when the sun sits exactly on the equator.
    pub fn is_degenerate(&self) -> bool {
        self.declination == 0.0
    }

    pub fn into_polygon(self) -> Polygon {
        Polygon::from_closed_ring(self.vertices)
    }
}

/// Night-side polygon at `time`.
pub fn terminator_polygon(time: Timestamp) -> Polygon {
    Terminator::new(time).polygon()
}
