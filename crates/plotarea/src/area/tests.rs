use super::*;
use proptest::prelude::*;

fn ring(points: &[(f64, f64)]) -> Vec<Coordinate> {
    points.iter().copied().map(Coordinate::from).collect()
}

fn square(side: f64) -> Vec<Coordinate> {
    ring(&[(0.0, 0.0), (0.0, side), (side, side), (side, 0.0)])
}

#[test]
fn fewer_than_three_points_is_zero() {
    assert_eq!(polygon_area(&[]), 0.0);
    assert_eq!(polygon_area(&ring(&[(1.0, 1.0)])), 0.0);
    assert_eq!(polygon_area(&ring(&[(0.0, 0.0), (5.0, 5.0)])), 0.0);
    assert_eq!(signed_ring_area(&ring(&[(0.0, 0.0), (5.0, 5.0)])), 0.0);
}

#[test]
fn reference_square_follows_fixed_scale() {
    // raw 1e-6 deg² → 1e-6 * 1232100 / 10000 = 1.2321e-4 ha → 0.00
    let sq = square(0.001);
    assert!((signed_ring_area(&sq).abs() - 1e-6).abs() < 1e-18);
    assert_eq!(polygon_area(&sq), 0.0);
    // larger squares stay on the same scale: 0.01 deg² → 1.2321 ha, 1 deg² → 123.21 ha
    assert_eq!(polygon_area(&square(0.1)), 1.23);
    assert_eq!(polygon_area(&square(1.0)), 123.21);
}

#[test]
fn orientation_sets_sign_not_magnitude() {
    let ccw = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let mut cw = ccw.clone();
    cw.reverse();
    assert!(signed_ring_area(&ccw) > 0.0);
    assert!(signed_ring_area(&cw) < 0.0);
    assert_eq!(polygon_area(&ccw), polygon_area(&cw));
}

#[test]
fn bowtie_lobes_cancel() {
    let bowtie = ring(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
    assert_eq!(polygon_area(&bowtie), 0.0);
}

#[test]
fn collinear_and_duplicate_vertices_are_accepted() {
    let line = ring(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(polygon_area(&line), 0.0);
    let dup = ring(&[(0.0, 0.0), (0.0, 1.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    assert_eq!(polygon_area(&dup), 123.21);
}

#[test]
fn small_plot_near_jakarta() {
    // ~0.01° square around (-6.2, 106.8): 0.0123 ha before rounding
    let plot = ring(&[
        (-6.2, 106.8),
        (-6.2, 106.81),
        (-6.21, 106.81),
        (-6.21, 106.8),
    ]);
    assert_eq!(polygon_area(&plot), 0.01);
}

#[test]
fn approximate_area_reference_triangle() {
    // spans of 1° each, mean latitude 1/3°
    let area = approximate_area(&[0.0, 0.0, 1.0], &[0.0, 1.0, 0.0]);
    assert_eq!(area, 1_232_079.15);
}

#[test]
fn approximate_area_shrinks_with_latitude() {
    let equator = approximate_area(&[0.0, 0.0, 1.0], &[10.0, 11.0, 10.0]);
    let north = approximate_area(&[60.0, 60.0, 61.0], &[10.0, 11.0, 10.0]);
    assert_eq!(north, 609_831.88);
    assert!(north < equator);
}

#[test]
fn approximate_area_short_lists_are_zero() {
    assert_eq!(approximate_area(&[0.0, 1.0], &[0.0, 1.0, 2.0]), 0.0);
    assert_eq!(approximate_area(&[0.0, 1.0, 2.0], &[0.0, 1.0]), 0.0);
    assert_eq!(approximate_area(&[], &[]), 0.0);
}

#[test]
fn approximate_area_is_bounding_rectangle() {
    // the triangle covers half its bounding box; the estimate reports the whole box
    let lats = [0.0, 0.0, 0.01, 0.01];
    let lons = [0.0, 0.01, 0.01, 0.0];
    assert_eq!(approximate_area(&lats, &lons), 123.21);
    assert_eq!(approximate_area(&lats[..3], &lons[..3]), 123.21);
}

#[test]
fn bounding_box_tracks_extremes() {
    let bbox = BoundingBox::from_slices(&[3.0, -1.0, 2.0], &[10.0, 12.5]).unwrap();
    assert_eq!(bbox.min_lat, -1.0);
    assert_eq!(bbox.max_lat, 3.0);
    assert_eq!(bbox.lat_span(), 4.0);
    assert_eq!(bbox.lon_span(), 2.5);
    assert!(BoundingBox::from_slices(&[], &[1.0]).is_none());
}

#[test]
fn round2_decides_on_the_stored_value() {
    assert_eq!(round2(0.12321), 0.12);
    assert_eq!(round2(1232079.1489964267), 1232079.15);
    assert_eq!(round2(0.015), 0.01);
    // exact binary ties go to the even digit
    assert_eq!(round2(0.125), 0.12);
    assert_eq!(round2(0.375), 0.38);
    assert_eq!(round2(2.0), 2.0);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let plot = square(0.37);
    let first = polygon_area(&plot);
    for _ in 0..100 {
        assert_eq!(polygon_area(&plot).to_bits(), first.to_bits());
    }
}

fn ring_strategy() -> impl Strategy<Value = Vec<Coordinate>> {
    prop::collection::vec((-60.0f64..60.0, -170.0f64..170.0), 3..16)
        .prop_map(|pts| pts.into_iter().map(Coordinate::from).collect())
}

proptest! {
    #[test]
    fn area_is_non_negative(coords in ring_strategy()) {
        prop_assert!(polygon_area(&coords) >= 0.0);
    }

    #[test]
    fn rotation_keeps_area(coords in ring_strategy(), k in 0usize..16) {
        let mut rotated = coords.clone();
        let shift = k % coords.len();
        rotated.rotate_left(shift);
        let a = signed_ring_area(&coords);
        let b = signed_ring_area(&rotated);
        prop_assert!((a - b).abs() <= 1e-9 * (1.0 + a.abs()));
        prop_assert!((polygon_area(&coords) - polygon_area(&rotated)).abs() <= 0.01 + 1e-6);
    }

    #[test]
    fn reversal_flips_sign_only(coords in ring_strategy()) {
        let mut reversed = coords.clone();
        reversed.reverse();
        let a = signed_ring_area(&coords);
        let b = signed_ring_area(&reversed);
        prop_assert!((a + b).abs() <= 1e-9 * (1.0 + a.abs()));
        prop_assert!((polygon_area(&coords) - polygon_area(&reversed)).abs() <= 0.01 + 1e-6);
    }

    #[test]
    fn approximate_area_is_non_negative(
        lats in prop::collection::vec(-90.0f64..=90.0, 3..10),
        lons in prop::collection::vec(-170.0f64..170.0, 3..10),
    ) {
        prop_assert!(approximate_area(&lats, &lons) >= 0.0);
    }
}
