//! Rule-based soil assessment used when no trained yield model is available.
//!
//! Thresholds (soil test units):
//! - pH below 5.5 is acidic enough to cut the yield estimate and needs liming.
//! - N in mg/kg, P in mg/kg, K in percent.

use std::fmt;

/// Yield estimate for acidic soil (pH < 5.5).
pub const ACIDIC_FALLBACK_YIELD: f64 = 3.8;
/// Yield estimate otherwise.
pub const NORMAL_FALLBACK_YIELD: f64 = 4.8;

const ACIDIC_PH: f64 = 5.5;
const SLIGHTLY_ACIDIC_PH: f64 = 5.8;

/// One soil test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoilSample {
    pub ph: f64,
    pub nitrogen_mg_kg: f64,
    pub phosphorus_mg_kg: f64,
    pub potassium_pct: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoilStatus {
    Critical,
    Moderate,
    Healthy,
}

impl SoilStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SoilStatus::Critical => "critical",
            SoilStatus::Moderate => "moderate",
            SoilStatus::Healthy => "healthy",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recommendation {
    AddDolomite,
    NitrogenBooster,
    PhosphateFertilizer,
    PotassiumFertilizer,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Recommendation::AddDolomite => "Add dolomite lime",
            Recommendation::NitrogenBooster => {
                "Apply local microorganism solution (MOL) for nitrogen"
            }
            Recommendation::PhosphateFertilizer => "Apply phosphate fertilizer or high-P compost",
            Recommendation::PotassiumFertilizer => "Apply potassium fertilizer",
        };
        f.write_str(text)
    }
}

/// Yield estimate from pH alone.
pub fn fallback_yield(sample: &SoilSample) -> f64 {
    if sample.ph < ACIDIC_PH {
        ACIDIC_FALLBACK_YIELD
    } else {
        NORMAL_FALLBACK_YIELD
    }
}

pub fn soil_status(sample: &SoilSample) -> SoilStatus {
    if sample.ph < ACIDIC_PH || sample.nitrogen_mg_kg < 20.0 || sample.phosphorus_mg_kg < 10.0 {
        SoilStatus::Critical
    } else if sample.ph < SLIGHTLY_ACIDIC_PH {
        SoilStatus::Moderate
    } else {
        SoilStatus::Healthy
    }
}

/// Corrective actions, in a stable order (pH, N, P, K).
pub fn recommendations(sample: &SoilSample) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if sample.ph < ACIDIC_PH {
        out.push(Recommendation::AddDolomite);
    }
    if sample.nitrogen_mg_kg < 25.0 {
        out.push(Recommendation::NitrogenBooster);
    }
    if sample.phosphorus_mg_kg < 15.0 {
        out.push(Recommendation::PhosphateFertilizer);
    }
    if sample.potassium_pct < 0.30 {
        out.push(Recommendation::PotassiumFertilizer);
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub struct Assessment {
    pub estimated_yield: f64,
    pub status: SoilStatus,
    pub recommendations: Vec<Recommendation>,
}

pub fn assess(sample: &SoilSample) -> Assessment {
    Assessment {
        estimated_yield: fallback_yield(sample),
        status: soil_status(sample),
        recommendations: recommendations(sample),
    }
}
