use plotarea::api::{Assessment, PlotArea, PlotEconomics};
use serde::Serialize;

/// JSON shape printed by `plotarea measure`.
#[derive(Debug, Serialize)]
pub struct PlotReport {
    pub area_hectare: f64,
    pub method: &'static str,
    pub vertices: usize,
    pub total_cost: f64,
    pub total_yield: f64,
    /// `null` when the area is zero.
    pub cost_per_hectare: Option<f64>,
    pub yield_per_hectare: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl PlotReport {
    pub fn build(plot: &PlotArea, total_cost: f64, total_yield: f64) -> Self {
        let econ = PlotEconomics::derive(plot.hectares, total_cost, total_yield);
        let mut warnings = Vec::new();
        if plot.is_degenerate() {
            warnings.push(format!(
                "only {} point(s); at least 3 are needed to enclose an area",
                plot.vertices
            ));
        }
        if plot.mismatched_lists {
            warnings.push("latitude and longitude lists differ in length".to_string());
        }
        if let Err(e) = econ.check() {
            warnings.push(e.to_string());
        }
        Self {
            area_hectare: plot.hectares,
            method: plot.method.as_str(),
            vertices: plot.vertices,
            total_cost,
            total_yield,
            cost_per_hectare: econ.cost_per_hectare,
            yield_per_hectare: econ.yield_per_hectare,
            warnings,
        }
    }
}

/// JSON shape printed by `plotarea assess`.
#[derive(Debug, Serialize)]
pub struct AssessmentReport {
    pub estimated_yield: f64,
    pub status: &'static str,
    pub recommendations: Vec<String>,
}

impl From<&Assessment> for AssessmentReport {
    fn from(a: &Assessment) -> Self {
        Self {
            estimated_yield: a.estimated_yield,
            status: a.status.as_str(),
            recommendations: a.recommendations.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotarea::api::{assess, measure, PlotInput, SoilSample};
    use serde_json::Value;

    #[test]
    fn full_report_has_ratios() {
        let plot = measure(&PlotInput::from_pairs("0,0;0,0.1;0.1,0.1;0.1,0")).unwrap();
        let report = PlotReport::build(&plot, 15_000_000.0, 4_800.0);
        assert_eq!(report.area_hectare, 1.23);
        assert_eq!(report.method, "polygon");
        assert_eq!(report.cost_per_hectare, Some(12_195_121.95));
        assert_eq!(report.yield_per_hectare, Some(3_902.44));
        assert!(report.warnings.is_empty());
        let json: Value = serde_json::to_value(&report).unwrap();
        assert!(json.get("warnings").is_none());
    }

    #[test]
    fn zero_area_report_nulls_ratios_and_warns() {
        let plot = measure(&PlotInput::from_pairs("0,0;1,1")).unwrap();
        let report = PlotReport::build(&plot, 15_000_000.0, 4_800.0);
        assert_eq!(report.area_hectare, 0.0);
        assert_eq!(report.warnings.len(), 2);
        let json: Value = serde_json::to_value(&report).unwrap();
        assert!(json["cost_per_hectare"].is_null());
        assert!(json["yield_per_hectare"].is_null());
    }

    #[test]
    fn mismatched_lists_warn() {
        let plot = measure(&PlotInput::from_lists("0,0,1,1", "0,1,0")).unwrap();
        let report = PlotReport::build(&plot, 1.0, 1.0);
        assert_eq!(report.method, "bounding_box");
        assert!(report.warnings.iter().any(|w| w.contains("differ in length")));
    }

    #[test]
    fn assessment_report_strings() {
        let a = assess(&SoilSample {
            ph: 5.0,
            nitrogen_mg_kg: 30.0,
            phosphorus_mg_kg: 20.0,
            potassium_pct: 0.5,
        });
        let report = AssessmentReport::from(&a);
        assert_eq!(report.status, "critical");
        assert_eq!(report.estimated_yield, 3.8);
        assert_eq!(report.recommendations, vec!["Add dolomite lime".to_string()]);
    }
}
