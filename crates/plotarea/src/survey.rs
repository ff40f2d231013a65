//! Choose the area estimator from whichever input shape was submitted.
//!
//! Paired coordinates win when present: they preserve vertex order and feed
//! the shoelace estimator. Separate latitude/longitude lists only support the
//! bounding-box estimate.

use crate::area::{approximate_area, polygon_area, MIN_RING_VERTICES};
use crate::error::AreaError;
use crate::parse::{parse_coordinate_pairs, parse_latitudes, parse_longitudes};

/// Raw form fields, as submitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotInput {
    /// `"lat,lon;lat,lon;..."`
    pub coordinates: Option<String>,
    /// `"lat1,lat2,..."`
    pub latitudes: Option<String>,
    /// `"lon1,lon2,..."`
    pub longitudes: Option<String>,
}

impl PlotInput {
    pub fn from_pairs(coordinates: impl Into<String>) -> Self {
        Self {
            coordinates: Some(coordinates.into()),
            ..Self::default()
        }
    }

    pub fn from_lists(latitudes: impl Into<String>, longitudes: impl Into<String>) -> Self {
        Self {
            coordinates: None,
            latitudes: Some(latitudes.into()),
            longitudes: Some(longitudes.into()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AreaMethod {
    /// Shoelace on ordered vertices.
    Polygon,
    /// Bounding rectangle of the lat/lon lists.
    BoundingBox,
}

impl AreaMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            AreaMethod::Polygon => "polygon",
            AreaMethod::BoundingBox => "bounding_box",
        }
    }
}

/// Measured plot.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotArea {
    pub hectares: f64,
    pub method: AreaMethod,
    /// Vertices for `Polygon`; the shorter list length for `BoundingBox`.
    pub vertices: usize,
    /// Bounding-box inputs only: latitude and longitude counts differ.
    pub mismatched_lists: bool,
}

impl PlotArea {
    /// Too few points to enclose anything; `hectares` is `0.0`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices < MIN_RING_VERTICES
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// Measure a plot from form input.
///
/// Errors: `NoCoordinates` when no usable field is present, or the parse
/// error of the chosen field.
pub fn measure(input: &PlotInput) -> Result<PlotArea, AreaError> {
    if let Some(pairs) = present(&input.coordinates) {
        let ring = parse_coordinate_pairs(pairs)?;
        return Ok(PlotArea {
            hectares: polygon_area(&ring),
            method: AreaMethod::Polygon,
            vertices: ring.len(),
            mismatched_lists: false,
        });
    }
    match (present(&input.latitudes), present(&input.longitudes)) {
        (Some(lats), Some(lons)) => {
            let lats = parse_latitudes(lats)?;
            let lons = parse_longitudes(lons)?;
            Ok(PlotArea {
                hectares: approximate_area(&lats, &lons),
                method: AreaMethod::BoundingBox,
                vertices: lats.len().min(lons.len()),
                mismatched_lists: lats.len() != lons.len(),
            })
        }
        _ => Err(AreaError::NoCoordinates),
    }
}
