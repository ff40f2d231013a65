use nalgebra::Vector2;

use super::types::{round2, Coordinate, DEG2_TO_M2_SCALE, MIN_RING_VERTICES, M2_PER_HECTARE};

/// Signed area of the parallelogram spanned by `a` and `b`.
#[inline]
fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Signed shoelace half-sum of a closed ring, in degrees².
///
/// Positive when the ring turns counter-clockwise in the (lat, lon) plane.
/// Unrounded; returns `0.0` below `MIN_RING_VERTICES`.
pub fn signed_ring_area(coords: &[Coordinate]) -> f64 {
    let n = coords.len();
    if n < MIN_RING_VERTICES {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += parallelogram_area(coords[i].to_vector(), coords[j].to_vector());
    }
    sum / 2.0
}

/// Plot area in hectares via the shoelace formula on raw degrees.
///
/// `|signed_ring_area| * 1232100 / 10000`, rounded to 2 decimals. Rings with
/// fewer than three vertices have area `0.0`. Orientation does not matter;
/// a bowtie ring reports the difference of its lobes.
pub fn polygon_area(coords: &[Coordinate]) -> f64 {
    if coords.len() < MIN_RING_VERTICES {
        return 0.0;
    }
    let raw = signed_ring_area(coords).abs();
    round2(raw * DEG2_TO_M2_SCALE / M2_PER_HECTARE)
}
