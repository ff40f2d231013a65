//! Farm plot area estimation and per-hectare economics.
//!
//! The crate is a stateless set of pure functions: callers hand in parsed
//! coordinates and get plain numbers (or a typed [`AreaError`]) back. There is
//! no I/O, no logging and no shared state, so every function is safe to call
//! from any number of threads.
//!
//! Layout
//! - `area`: shoelace polygon area and bounding-box approximation, in hectares.
//! - `economics`: cost and yield per hectare with an explicit zero-area guard.
//! - `parse`: form-string parsing (`"lat,lon;lat,lon"`, `"1.0,2.0,3.0"`).
//! - `survey`: picks the area method from whichever input shape was supplied.
//! - `agronomy`: rule-based yield fallback, soil status and recommendations.
//! - `rand`: deterministic random plots for benches and tests.

pub mod agronomy;
pub mod api;
pub mod area;
pub mod economics;
pub mod error;
pub mod parse;
pub mod rand;
pub mod survey;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use area::{approximate_area, polygon_area, round2, Coordinate};
pub use error::AreaError;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::{
        approximate_area, polygon_area, round2, signed_ring_area, BoundingBox, Coordinate,
    };
    pub use crate::economics::{cost_per_hectare, yield_per_hectare, PlotEconomics};
    pub use crate::error::AreaError;
    pub use crate::survey::{measure, AreaMethod, PlotArea, PlotInput};
}
