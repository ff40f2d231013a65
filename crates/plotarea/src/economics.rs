//! Cost and yield per hectare.
//!
//! Both ratios are plain divisions by the plot area. A zero area is reported
//! as [`AreaError::ZeroArea`] instead of producing `inf`/`NaN`; negative or
//! non-finite areas are rejected with [`AreaError::InvalidArea`].

use crate::area::round2;
use crate::error::AreaError;

fn per_hectare(total: f64, area_hectare: f64) -> Result<f64, AreaError> {
    if !area_hectare.is_finite() || area_hectare < 0.0 {
        return Err(AreaError::InvalidArea(area_hectare));
    }
    if area_hectare == 0.0 {
        return Err(AreaError::ZeroArea);
    }
    Ok(total / area_hectare)
}

/// `total_cost / area_hectare`, unrounded.
pub fn cost_per_hectare(total_cost: f64, area_hectare: f64) -> Result<f64, AreaError> {
    per_hectare(total_cost, area_hectare)
}

/// `total_yield / area_hectare`, unrounded.
pub fn yield_per_hectare(total_yield: f64, area_hectare: f64) -> Result<f64, AreaError> {
    per_hectare(total_yield, area_hectare)
}

/// Per-hectare figures for one plot, rounded to 2 decimals.
///
/// `None` marks a ratio that is undefined for this area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotEconomics {
    pub area_hectare: f64,
    pub cost_per_hectare: Option<f64>,
    pub yield_per_hectare: Option<f64>,
}

impl PlotEconomics {
    /// Derive both ratios. Errors are folded into `None`; use
    /// [`PlotEconomics::check`] to learn why.
    pub fn derive(area_hectare: f64, total_cost: f64, total_yield: f64) -> Self {
        Self {
            area_hectare,
            cost_per_hectare: cost_per_hectare(total_cost, area_hectare).ok().map(round2),
            yield_per_hectare: yield_per_hectare(total_yield, area_hectare).ok().map(round2),
        }
    }

    /// The reason ratios are undefined, if they are.
    pub fn check(&self) -> Result<(), AreaError> {
        per_hectare(0.0, self.area_hectare).map(|_| ())
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        self.cost_per_hectare.is_some()
    }
}
