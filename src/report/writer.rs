use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::report::csv::write_csv_report;
use crate::report::html::render_page;
use crate::report::json::{chart_configs, data_json, grid_configs, render_bundle_json};
use crate::report::{ReportError, ReportLayout, ReportOptions, ReportSummary, ReportView};
use crate::tables::TableView;

pub const PAGE_FILE: &str = "index.html";
pub const BUNDLE_FILE: &str = "report.json";
pub const CSV_FILE: &str = "eer_report.csv";

/// Writes every output of one report. Chart and table adapters run
/// independently; failures are collected and returned only after all
/// remaining outputs were written.
pub fn write_reports(
    view: &ReportView<'_>,
    out_dir: &Path,
    options: &ReportOptions,
) -> Result<ReportSummary, ReportError> {
    fs::create_dir_all(out_dir)?;
    let mut summary = ReportSummary::default();
    let mut failures: Vec<String> = Vec::new();

    let charts = chart_configs(view)
        .map_err(|err| record_failure(&mut failures, "charts", err))
        .ok();
    let grids = grid_configs(view)
        .map_err(|err| record_failure(&mut failures, "tables", err))
        .ok();

    let data = data_json(view)?;
    let page = render_page(view, &data, charts.as_ref(), grids.as_ref())?;
    let page_path = out_dir.join(PAGE_FILE);
    write_text(&page_path, &page)?;
    summary.files.push(page_path);

    let bundle = render_bundle_json(view, charts.as_ref(), grids.as_ref())?;
    let bundle_path = out_dir.join(BUNDLE_FILE);
    write_text(&bundle_path, &bundle)?;
    summary.files.push(bundle_path);

    // The simple layout has no export.
    if options.export && view.layout() == ReportLayout::Detailed {
        for &table in TableView::all() {
            let grid = view.stats_grid(table);
            match grid.export(options.grid_states.for_view(table), out_dir) {
                Ok(files) => summary.files.extend(files),
                Err(source) => record_failure(
                    &mut failures,
                    "export",
                    ReportError::Export {
                        view: table.name(),
                        source,
                    },
                ),
            }
        }
    }

    if options.csv {
        let csv_path = out_dir.join(CSV_FILE);
        match write_csv_report(view.set(), &csv_path) {
            Ok(()) => summary.files.push(csv_path),
            Err(err) => record_failure(&mut failures, "csv", err),
        }
    }

    for path in &summary.files {
        tracing::info!(path = %path.display(), "wrote");
    }

    if failures.is_empty() {
        Ok(summary)
    } else {
        Err(ReportError::Incomplete(failures))
    }
}

fn record_failure(failures: &mut Vec<String>, step: &str, err: ReportError) {
    tracing::error!(step = step, "{err}");
    failures.push(format!("{step}: {err}"));
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/writer.rs"]
mod tests;
