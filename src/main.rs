mod charts;
mod input;
mod model;
mod report;
mod tables;
mod tracing;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::input::{InputError, load_grid_states, load_results};
use crate::report::{ReportError, ReportLayout, ReportOptions, ReportView, write_reports};
use crate::tables::grid::GridStates;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

#[derive(Debug, Parser)]
#[command(name = "kira-eerreport", version)]
#[command(about = "Render DET/ROC curves and EER statistics grids from precomputed results")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the report page and its companion files
    Run(RunConfig),
}

#[derive(Debug, Clone, clap::Args)]
struct RunConfig {
    /// Results file: JSON array, {"data": [...]}, or `var data = [...];` (optionally .gz)
    #[arg(long = "input")]
    input: PathBuf,

    /// Output directory
    #[arg(long = "out")]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = ReportLayout::Detailed)]
    layout: ReportLayout,

    /// Write General Stats.xlsx, Errors.xlsx and Tresholds.xlsx
    #[arg(long)]
    export: bool,

    /// Grid state (visible columns, filters) applied to the exports
    #[arg(long = "grid-state")]
    grid_state: Option<PathBuf>,

    /// Also write eer_report.csv
    #[arg(long)]
    csv: bool,

    #[arg(long, default_value = "EER report")]
    title: String,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let Command::Run(config) = &cli.command;
    crate::tracing::init_tracing(config.verbose);

    if let Err(err) = run(config) {
        ::tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), AppError> {
    let bundle = load_results(&config.input)?;

    let grid_states = match &config.grid_state {
        Some(path) => load_grid_states(path)?,
        None => GridStates::default(),
    };
    if config.layout == ReportLayout::Simple && (config.export || config.grid_state.is_some()) {
        ::tracing::warn!("--export and --grid-state apply to the detailed layout only");
    }

    let view = ReportView::new(config.title.clone(), config.layout, &bundle);
    let options = ReportOptions {
        export: config.export,
        csv: config.csv,
        grid_states,
    };
    let summary = write_reports(&view, &config.out_dir, &options)?;
    ::tracing::info!(
        layout = config.layout.name(),
        files = summary.files.len(),
        out = %config.out_dir.display(),
        "report complete"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/fixtures.rs"]
mod fixtures;

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
