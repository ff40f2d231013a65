//! Curated surface for front ends (the `plotarea` CLI and any web layer).
//!
//! Prefer these re-exports over reaching into submodules so callers keep a
//! single import path when the internals move.

// Area
pub use crate::area::{
    approximate_area, polygon_area, round2, signed_ring_area, BoundingBox, Coordinate,
    DEG2_TO_M2_SCALE, MAX_LATITUDE, MAX_LONGITUDE, METERS_PER_DEGREE, MIN_RING_VERTICES,
    M2_PER_HECTARE,
};
// Economics
pub use crate::economics::{cost_per_hectare, yield_per_hectare, PlotEconomics};
// Input handling
pub use crate::error::AreaError;
pub use crate::parse::{
    parse_coordinate_pairs, parse_float_list, parse_latitudes, parse_longitudes,
};
pub use crate::survey::{measure, AreaMethod, PlotArea, PlotInput};
// Agronomy fallback
pub use crate::agronomy::{
    assess, fallback_yield, recommendations, soil_status, Assessment, Recommendation, SoilSample,
    SoilStatus,
};
