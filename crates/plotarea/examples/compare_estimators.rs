//! Compare the shoelace and bounding-box estimates on a few random plots.
//!
//! Usage:
//!   cargo run -p plotarea --example compare_estimators -- [count]
//!
//! The bounding box encloses the ring, so its estimate is usually the larger
//! one; the gap grows with how irregular the plot is.

use plotarea::area::{approximate_area, polygon_area};
use plotarea::rand::{draw_plot, PlotCfg, ReplayToken};

fn main() {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let cfg = PlotCfg::default();
    for index in 0..count {
        let ring = draw_plot(cfg, ReplayToken { seed: 2025, index });
        let lats: Vec<f64> = ring.iter().map(|c| c.lat).collect();
        let lons: Vec<f64> = ring.iter().map(|c| c.lon).collect();
        println!(
            "plot {index}: V={}, polygon={} ha, bbox={} ha",
            ring.len(),
            polygon_area(&ring),
            approximate_area(&lats, &lons)
        );
    }
}
