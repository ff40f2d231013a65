//! Coordinates and the fixed conversion constants.

use nalgebra::Vector2;

/// Empirical degrees² → m² factor used by the shoelace estimator.
///
/// Roughly `(111 km)²`; it ignores latitude-dependent longitude compression.
/// Keep as is: stored plot areas were computed with this value.
pub const DEG2_TO_M2_SCALE: f64 = 1_232_100.0;

/// Square metres in one hectare.
pub const M2_PER_HECTARE: f64 = 10_000.0;

/// Meridian arc length of one degree, in metres.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Largest latitude magnitude, in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// Largest longitude magnitude, in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Smallest vertex count that encloses an area.
pub const MIN_RING_VERTICES: usize = 3;

/// A point in signed decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `(lat, lon)` as a plane vector; x is latitude.
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.lat, self.lon)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// Round to 2 decimal places, deciding on the exact binary value.
///
/// Goes through the exact decimal formatter, so `0.015` (stored as
/// `0.01499…`) rounds down instead of being nudged up by `x * 100.0`.
pub fn round2(x: f64) -> f64 {
    format!("{x:.2}").parse().unwrap_or(x)
}
