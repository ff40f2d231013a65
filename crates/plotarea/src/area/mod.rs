//! Plot area in hectares from geographic coordinates.
//!
//! Two estimators, both deliberately simple and kept bit-for-bit stable for
//! historical data:
//! - `polygon_area`: shoelace formula applied directly to latitude/longitude
//!   degrees, scaled by a fixed empirical factor (`DEG2_TO_M2_SCALE`). The
//!   factor is calibrated at a single reference latitude and does not correct
//!   for longitude compression, so accuracy degrades away from it.
//! - `approximate_area`: bounding-box estimate from separate latitude and
//!   longitude lists, using 111 km per degree and `cos(mean latitude)` for the
//!   longitude span. It measures the enclosing rectangle, not the polygon.
//!
//! Conventions
//! - Rings are implicitly closed (last vertex connects back to the first).
//! - Fewer than `MIN_RING_VERTICES` points give an area of `0.0`, not an error.
//! - Results are non-negative and rounded to 2 decimals via `round2`.
//! - Self-intersecting rings are accepted; opposite lobes cancel.
//! - Inputs are expected within `MAX_LATITUDE`/`MAX_LONGITUDE`. The parsers in
//!   `crate::parse` enforce this; a latitude beyond ±90° flips the sign of
//!   `cos(mean latitude)` in `approximate_area`.

mod bbox;
mod shoelace;
mod types;

pub use bbox::{approximate_area, BoundingBox};
pub use shoelace::{polygon_area, signed_ring_area};
pub use types::{
    round2, Coordinate, DEG2_TO_M2_SCALE, MAX_LATITUDE, MAX_LONGITUDE, METERS_PER_DEGREE,
    MIN_RING_VERTICES, M2_PER_HECTARE,
};

#[cfg(test)]
mod tests;
