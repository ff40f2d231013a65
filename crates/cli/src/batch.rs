//! Batch measurement of plots listed in a CSV file.
//!
//! Input columns: `plot_id`, `coordinates` (`"lat,lon;lat,lon;..."`, quoted).
//! Output columns: `plot_id`, `area_hectare`, `cost_per_hectare`,
//! `yield_per_hectare`, `error`. A row that fails to parse keeps a null area
//! and carries the message in `error`; it does not abort the batch.

use anyhow::{Context, Result};
use plotarea::api::{measure, PlotEconomics, PlotInput};
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::provenance::{BatchProvenance, BuildStamp};

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub rows: usize,
    pub measured: usize,
    pub failed: usize,
    pub zero_area: usize,
}

#[derive(Debug, PartialEq)]
struct RowResult {
    area: Option<f64>,
    cost: Option<f64>,
    yield_: Option<f64>,
    error: Option<String>,
}

fn measure_row(coordinates: Option<&str>, total_cost: f64, total_yield: f64) -> RowResult {
    let input = PlotInput {
        coordinates: coordinates.map(str::to_string),
        ..PlotInput::default()
    };
    match measure(&input) {
        Ok(plot) => {
            let econ = PlotEconomics::derive(plot.hectares, total_cost, total_yield);
            RowResult {
                area: Some(plot.hectares),
                cost: econ.cost_per_hectare,
                yield_: econ.yield_per_hectare,
                error: econ.check().err().map(|e| e.to_string()),
            }
        }
        Err(e) => RowResult {
            area: None,
            cost: None,
            yield_: None,
            error: Some(e.to_string()),
        },
    }
}

/// Measure every row of `input` and write the results to `out`, plus a
/// provenance sidecar next to it.
pub fn run(input: &Path, out: &Path, total_cost: f64, total_yield: f64) -> Result<BatchSummary> {
    tracing::info!(input = %input.display(), out = %out.display(), "batch");
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?
        .collect()
        .with_context(|| format!("reading {}", input.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let ids = df
        .column("plot_id")
        .context("input is missing a 'plot_id' column")?
        .cast(&DataType::String)?;
    let coords = df
        .column("coordinates")
        .context("input is missing a 'coordinates' column")?
        .cast(&DataType::String)?;

    let mut summary = BatchSummary::default();
    let mut plot_ids: Vec<String> = Vec::with_capacity(df.height());
    let mut areas: Vec<Option<f64>> = Vec::with_capacity(df.height());
    let mut costs: Vec<Option<f64>> = Vec::with_capacity(df.height());
    let mut yields: Vec<Option<f64>> = Vec::with_capacity(df.height());
    let mut errors: Vec<Option<String>> = Vec::with_capacity(df.height());

    for (row, (id, ring)) in ids.str()?.into_iter().zip(coords.str()?).enumerate() {
        let id = id.map(str::to_string).unwrap_or_else(|| format!("row-{row}"));
        let result = measure_row(ring, total_cost, total_yield);
        summary.rows += 1;
        match (&result.area, &result.error) {
            (None, Some(error)) => {
                summary.failed += 1;
                tracing::warn!(plot_id = %id, %error, "batch_row_failed");
            }
            (Some(_), Some(_)) => summary.zero_area += 1,
            _ => summary.measured += 1,
        }
        plot_ids.push(id);
        areas.push(result.area);
        costs.push(result.cost);
        yields.push(result.yield_);
        errors.push(result.error);
    }

    let mut table = df!(
        "plot_id" => plot_ids,
        "area_hectare" => areas,
        "cost_per_hectare" => costs,
        "yield_per_hectare" => yields,
        "error" => errors,
    )?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file).finish(&mut table)?;

    let prov = BatchProvenance {
        stamp: BuildStamp::current(),
        input,
        output: out,
        total_cost,
        total_yield,
        summary: &summary,
    }
    .write()?;
    tracing::info!(
        rows = summary.rows,
        measured = summary.measured,
        failed = summary.failed,
        zero_area = summary.zero_area,
        provenance = %prov.display(),
        "batch_done"
    );
    Ok(summary)
}
