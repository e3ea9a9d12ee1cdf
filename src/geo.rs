// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! WGS84 points and closed polygons.
//!
//! Coordinates are plain degrees. A [`Polygon`] stores its ring as
//! `(longitude, latitude)` pairs, the axis order used by GeoJSON and most
//! plotting back-ends.

use crate::error::GeoError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A validated `(latitude, longitude)` pair in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeoPoint"))]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Fails when either coordinate is non-finite or out of range.
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    #[inline]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub const fn lon(&self) -> f64 {
        self.lon
    }

    /// `(lon, lat)` in plotting order.
    #[inline]
    pub const fn xy(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.lon, self.lat)
    }
}

/// A closed exterior ring of `(lon, lat)` vertices.
///
/// The first and last vertex are identical. Vertices are not range-checked:
/// a terminator ring may legitimately carry non-finite latitudes at an
/// equinox.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPolygon"))]
pub struct Polygon {
    exterior: Vec<(f64, f64)>,
}

impl Polygon {
    /// Build from a ring, appending the first vertex if the ring is open.
    ///
    /// Fails when fewer than three distinct vertices are supplied.
    pub fn new(mut ring: Vec<(f64, f64)>) -> Result<Self, GeoError> {
        if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
            if !same_vertex(first, last) {
                ring.push(first);
            }
        }
        if ring.len() < 4 {
            return Err(GeoError::Malformed(format!(
                "polygon ring needs at least 3 vertices, got {}",
                ring.len().saturating_sub(1)
            )));
        }
        Ok(Self { exterior: ring })
    }

    /// Build from a ring that is already closed, without re-checking it.
    pub(crate) fn from_closed_ring(ring: Vec<(f64, f64)>) -> Self {
        Self { exterior: ring }
    }

    pub fn exterior(&self) -> &[(f64, f64)] {
        &self.exterior
    }

    /// Vertex count including the closing duplicate.
    pub fn len(&self) -> usize {
        self.exterior.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.exterior.first(), self.exterior.last()) {
            (Some(&a), Some(&b)) => self.exterior.len() > 1 && same_vertex(a, b),
            _ => false,
        }
    }

    /// Planar shoelace area in square degrees; positive when counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        self.exterior
            .windows(2)
            .map(|w| w[0].0 * w[1].1 - w[1].0 * w[0].1)
            .sum::<f64>()
            / 2.0
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }
}

/// Unchecked wire form of [`GeoPoint`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lon: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lon)
    }
}

/// Unchecked wire form of [`Polygon`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPolygon {
    exterior: Vec<(f64, f64)>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPolygon> for Polygon {
    type Error = GeoError;

    fn try_from(raw: RawPolygon) -> Result<Self, Self::Error> {
        Self::new(raw.exterior)
    }
}

/// Bitwise-equal comparison so that NaN vertices still close a ring.
fn same_vertex(a: (f64, f64), b: (f64, f64)) -> bool {
    a.0.to_bits() == b.0.to_bits() && a.1.to_bits() == b.1.to_bits()
}
