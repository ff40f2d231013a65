//! Random farm plots (radial jitter + replay tokens).
//!
//! Model
//! - Start from `n` equally spaced angles around `center`, add bounded angular
//!   and radial jitter, and emit the ring in increasing angle.
//! - The result is star-shaped around `center`, hence simple, and turns
//!   counter-clockwise in the (lat, lon) plane.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::area::{Coordinate, MIN_RING_VERTICES};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(MIN_RING_VERTICES),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(MIN_RING_VERTICES);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PlotCfg {
    pub vertex_count: VertexCount,
    pub center: Coordinate,
    /// Base radius in degrees.
    pub radius_deg: f64,
    /// Radii are `radius_deg * (1 + u)`, `u ∈ [-radial_jitter, radial_jitter]`. Clamped to [0, 0.9].
    pub radial_jitter: f64,
    /// Angular jitter as a fraction of the base spacing 2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
}

impl Default for PlotCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 4, max: 10 },
            center: Coordinate::new(-6.2, 106.8),
            radius_deg: 0.005,
            radial_jitter: 0.25,
            angle_jitter_frac: 0.3,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one plot ring. Same `(cfg, tok)` → same ring.
pub fn draw_plot(cfg: PlotCfg, tok: ReplayToken) -> Vec<Coordinate> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.radius_deg.abs().max(1e-9);
    let delta = std::f64::consts::TAU / n as f64;
    (0..n)
        .map(|k| {
            let theta = k as f64 * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = r0 * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
            Coordinate::new(
                cfg.center.lat + r * theta.cos(),
                cfg.center.lon + r * theta.sin(),
            )
        })
        .collect()
}
