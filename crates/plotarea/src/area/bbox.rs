use super::types::{round2, METERS_PER_DEGREE, MIN_RING_VERTICES, M2_PER_HECTARE};

/// Axis-aligned extent of a set of points, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Extent of separate latitude and longitude lists. `None` if either is empty.
    ///
    /// The lists are scanned independently; their lengths need not match.
    pub fn from_slices(lats: &[f64], lons: &[f64]) -> Option<Self> {
        let (min_lat, max_lat) = min_max(lats)?;
        let (min_lon, max_lon) = min_max(lons)?;
        Some(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }

    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values[1..]
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Bounding-box area estimate in hectares.
///
/// Spans are converted with 111 km per degree; the longitude span is further
/// scaled by `cos(mean latitude)`. Either list shorter than three entries
/// gives `0.0`. Mismatched lengths are the caller's concern.
pub fn approximate_area(lats: &[f64], lons: &[f64]) -> f64 {
    if lats.len() < MIN_RING_VERTICES || lons.len() < MIN_RING_VERTICES {
        return 0.0;
    }
    let Some(bbox) = BoundingBox::from_slices(lats, lons) else {
        return 0.0;
    };
    let avg_lat = lats.iter().sum::<f64>() / lats.len() as f64;
    let lat_m = bbox.lat_span() * METERS_PER_DEGREE;
    let lon_m = bbox.lon_span() * METERS_PER_DEGREE * avg_lat.to_radians().cos();
    round2(lat_m * lon_m / M2_PER_HECTARE)
}
