pub mod csv;
pub mod html;
pub mod json;
pub mod writer;

use std::path::PathBuf;

use thiserror::Error;

use crate::charts::ChartSet;
use crate::input::ResultsBundle;
use crate::model::ExperimentSet;
use crate::tables::TableView;
use crate::tables::export::ExportError;
use crate::tables::grid::{AutoGrid, GridStates, StatsGrid};

pub use writer::write_reports;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("export of {view} failed: {source}")]
    Export {
        view: &'static str,
        #[source]
        source: ExportError,
    },
    #[error("report incomplete: {}", .0.join("; "))]
    Incomplete(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportLayout {
    /// Three statistics grids with spreadsheet export.
    Detailed,
    /// One grid with columns inferred from the records, no export.
    Simple,
}

impl ReportLayout {
    pub fn name(self) -> &'static str {
        match self {
            ReportLayout::Detailed => "detailed",
            ReportLayout::Simple => "simple",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub export: bool,
    pub csv: bool,
    pub grid_states: GridStates,
}

#[derive(Debug, Clone, Default)]
pub struct ReportSummary {
    pub files: Vec<PathBuf>,
}

/// Everything one rendered report owns: its input, layout and chart state.
#[derive(Debug, Clone)]
pub struct ReportView<'a> {
    title: String,
    layout: ReportLayout,
    bundle: &'a ResultsBundle,
    charts: ChartSet,
}

impl<'a> ReportView<'a> {
    pub fn new(title: impl Into<String>, layout: ReportLayout, bundle: &'a ResultsBundle) -> Self {
        Self {
            title: title.into(),
            layout,
            bundle,
            charts: ChartSet::build(&bundle.set),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn layout(&self) -> ReportLayout {
        self.layout
    }

    pub fn set(&self) -> &'a ExperimentSet {
        &self.bundle.set
    }

    pub fn bundle(&self) -> &'a ResultsBundle {
        self.bundle
    }

    pub fn charts(&self) -> &ChartSet {
        &self.charts
    }

    pub fn stats_grid(&self, view: TableView) -> StatsGrid<'a> {
        StatsGrid::with_spreadsheet_export(view, &self.bundle.set)
    }

    pub fn auto_grid(&self) -> AutoGrid {
        AutoGrid::new(&self.bundle.records)
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
