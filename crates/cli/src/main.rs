use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use plotarea::api::{assess, measure, PlotInput, SoilSample};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod provenance;
mod report;

use provenance::BuildStamp;
use report::{AssessmentReport, PlotReport};

/// Placeholder season budget for a plot, in local currency.
const DEFAULT_TOTAL_COST: f64 = 15_000_000.0;
/// Placeholder season harvest for a plot, in kg.
const DEFAULT_TOTAL_YIELD: f64 = 4_800.0;

#[derive(Parser)]
#[command(name = "plotarea")]
#[command(about = "Farm plot area, per-hectare economics and soil assessment")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy, Debug)]
struct Totals {
    /// Total season cost spread over the plot
    #[arg(long, default_value_t = DEFAULT_TOTAL_COST, value_parser = finite_total)]
    total_cost: f64,
    /// Total season yield harvested from the plot
    #[arg(long, default_value_t = DEFAULT_TOTAL_YIELD, value_parser = finite_total)]
    total_yield: f64,
}

fn finite_total(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("'{s}' is not a number: {e}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}

#[derive(Subcommand)]
enum Action {
    /// Measure one plot and print a JSON report
    Measure {
        /// Ordered ring "lat,lon;lat,lon;..." (preferred when given)
        #[arg(long, allow_hyphen_values = true)]
        coords: Option<String>,
        /// Latitudes "lat1,lat2,..." for the bounding-box estimate
        #[arg(long, allow_hyphen_values = true)]
        lats: Option<String>,
        /// Longitudes "lon1,lon2,..." for the bounding-box estimate
        #[arg(long, allow_hyphen_values = true)]
        lons: Option<String>,
        #[command(flatten)]
        totals: Totals,
    },
    /// Rule-based soil assessment (yield fallback, status, recommendations)
    Assess {
        #[arg(long)]
        ph: f64,
        /// Nitrogen, mg/kg
        #[arg(long)]
        nitrogen: f64,
        /// Phosphorus, mg/kg
        #[arg(long)]
        phosphorus: f64,
        /// Potassium, percent
        #[arg(long)]
        potassium: f64,
    },
    /// Measure every plot in a CSV (columns: plot_id, coordinates)
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        totals: Totals,
    },
    /// Print the build stamp (code revision, version, area constants)
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Measure {
            coords,
            lats,
            lons,
            totals,
        } => run_measure(
            PlotInput {
                coordinates: coords,
                latitudes: lats,
                longitudes: lons,
            },
            totals,
        ),
        Action::Assess {
            ph,
            nitrogen,
            phosphorus,
            potassium,
        } => run_assess(SoilSample {
            ph,
            nitrogen_mg_kg: nitrogen,
            phosphorus_mg_kg: phosphorus,
            potassium_pct: potassium,
        }),
        Action::Batch { input, out, totals } => {
            let summary = batch::run(&input, &out, totals.total_cost, totals.total_yield)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Action::Report => print_report(),
    }
}

fn run_measure(input: PlotInput, totals: Totals) -> Result<()> {
    let plot = measure(&input)?;
    tracing::info!(
        method = plot.method.as_str(),
        vertices = plot.vertices,
        hectares = plot.hectares,
        "measure"
    );
    let report = PlotReport::build(&plot, totals.total_cost, totals.total_yield);
    for warning in &report.warnings {
        tracing::warn!(%warning, "measure");
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_assess(sample: SoilSample) -> Result<()> {
    let assessment = assess(&sample);
    tracing::info!(
        ph = sample.ph,
        status = assessment.status.as_str(),
        estimated_yield = assessment.estimated_yield,
        "assess"
    );
    let report = AssessmentReport::from(&assessment);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&BuildStamp::current())?);
    Ok(())
}
