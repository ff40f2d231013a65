//! Build stamp and the `<out-stem>.provenance.json` sidecar of a batch run.

use anyhow::{Context, Result};
use plotarea::api::{DEG2_TO_M2_SCALE, METERS_PER_DEGREE, M2_PER_HECTARE};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::batch::BatchSummary;

/// Conversion constants the areas were computed with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AreaConstants {
    pub deg2_to_m2_scale: f64,
    pub m2_per_hectare: f64,
    pub meters_per_degree: f64,
}

impl Default for AreaConstants {
    fn default() -> Self {
        Self {
            deg2_to_m2_scale: DEG2_TO_M2_SCALE,
            m2_per_hectare: M2_PER_HECTARE,
            meters_per_degree: METERS_PER_DEGREE,
        }
    }
}

/// Which build produced an area figure.
#[derive(Clone, Debug, Serialize)]
pub struct BuildStamp {
    pub code_rev: String,
    pub version: &'static str,
    pub constants: AreaConstants,
}

impl BuildStamp {
    pub fn current() -> Self {
        Self {
            code_rev: code_rev(),
            version: plotarea::VERSION,
            constants: AreaConstants::default(),
        }
    }
}

/// `GIT_COMMIT` from the build environment, else from the runtime one.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|rev| !rev.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Everything needed to tell how a batch output was produced.
#[derive(Debug, Serialize)]
pub struct BatchProvenance<'a> {
    #[serde(flatten)]
    pub stamp: BuildStamp,
    pub input: &'a Path,
    pub output: &'a Path,
    pub total_cost: f64,
    pub total_yield: f64,
    pub summary: &'a BatchSummary,
}

impl BatchProvenance<'_> {
    /// Write the sidecar next to `output` and return its path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = sidecar_path(self.output);
        let json = serde_json::to_vec_pretty(self).context("serializing batch provenance")?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `areas.csv` → `areas.provenance.json`
fn sidecar_path(output: &Path) -> PathBuf {
    output.with_extension("provenance.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn sidecar_replaces_the_csv_extension() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/season/areas.csv")),
            Path::new("/tmp/season/areas.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("areas")),
            Path::new("areas.provenance.json")
        );
    }

    #[test]
    fn stamp_carries_the_area_constants() {
        let stamp = BuildStamp::current();
        assert_eq!(stamp.version, plotarea::VERSION);
        assert_eq!(stamp.constants.deg2_to_m2_scale, 1_232_100.0);
        assert_eq!(stamp.constants.meters_per_degree, 111_000.0);
        assert!(!stamp.code_rev.is_empty());
    }

    #[test]
    fn batch_sidecar_records_totals_and_counts() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("plots.csv");
        let output = dir.path().join("areas.csv");
        let summary = BatchSummary {
            rows: 4,
            measured: 2,
            failed: 1,
            zero_area: 1,
        };
        let written = BatchProvenance {
            stamp: BuildStamp::current(),
            input: &input,
            output: &output,
            total_cost: 15_000_000.0,
            total_yield: 4_800.0,
            summary: &summary,
        }
        .write()
        .unwrap();
        assert_eq!(written, dir.path().join("areas.provenance.json"));

        let doc: Value = serde_json::from_slice(&std::fs::read(written).unwrap()).unwrap();
        assert_eq!(doc["output"], output.to_string_lossy().as_ref());
        assert_eq!(doc["total_cost"], 15_000_000.0);
        assert_eq!(doc["summary"]["failed"], 1);
        assert_eq!(doc["constants"]["m2_per_hectare"], 10_000.0);
        assert_eq!(doc["version"], plotarea::VERSION);
    }
}
