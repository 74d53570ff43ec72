use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use thiserror::Error;

use crate::tables::grid::{GridState, StatsGrid, VisibleTable};
use crate::tables::{CellValue, TableView};

/// File name the grid's built-in export falls back to.
pub const BUILTIN_EXPORT_FILE: &str = "DataGrid.xlsx";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("column {field} is not part of the {view} view")]
    UnknownColumn { view: &'static str, field: String },
    #[error("invalid filter on {field}: {reason}")]
    InvalidFilter { field: String, reason: String },
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raised before a grid exports. A handler that performs the export itself
/// sets `cancel` so the built-in export does not run as well.
#[derive(Debug)]
pub struct ExportingEvent<'s> {
    pub view: TableView,
    pub state: &'s GridState,
    pub cancel: bool,
}

pub trait ExportHandler {
    fn on_exporting(
        &self,
        grid: &StatsGrid<'_>,
        event: &mut ExportingEvent<'_>,
        out_dir: &Path,
    ) -> Result<PathBuf, ExportError>;
}

/// Export button of the detailed views: one worksheet mirroring the grid,
/// saved under the view's fixed file name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetExport;

impl ExportHandler for SpreadsheetExport {
    fn on_exporting(
        &self,
        grid: &StatsGrid<'_>,
        event: &mut ExportingEvent<'_>,
        out_dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        event.cancel = true;
        let table = grid.visible(event.state)?;
        let path = out_dir.join(event.view.export_file_name());
        save_table(&table, event.view.sheet_name(), &path)?;
        Ok(path)
    }
}

impl StatsGrid<'_> {
    /// Runs the export: the registered handler first, then the built-in
    /// export unless the handler cancelled it. Returns every file written.
    pub fn export(
        &self,
        state: &GridState,
        out_dir: &Path,
    ) -> Result<Vec<PathBuf>, ExportError> {
        fs::create_dir_all(out_dir)?;
        let mut event = ExportingEvent {
            view: self.view(),
            state,
            cancel: false,
        };

        let mut files = Vec::with_capacity(1);
        if let Some(handler) = self.handler() {
            files.push(handler.on_exporting(self, &mut event, out_dir)?);
        }
        if !event.cancel {
            let table = self.visible(state)?;
            let path = out_dir.join(BUILTIN_EXPORT_FILE);
            save_table(&table, "Sheet1", &path)?;
            files.push(path);
        }

        for path in &files {
            tracing::info!(view = self.view().name(), path = %path.display(), "exported grid");
        }
        Ok(files)
    }
}

pub fn build_workbook(
    table: &VisibleTable<'_>,
    sheet_name: &str,
) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, def) in table.columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, def.caption, &header)?;
    }
    for (idx, exp) in table.rows.iter().enumerate() {
        let row = idx as u32 + 1;
        for (col, def) in table.columns.iter().enumerate() {
            match def.cell(exp) {
                CellValue::Text(text) => worksheet.write_string(row, col as u16, text)?,
                CellValue::Number(v) => worksheet.write_number(row, col as u16, v)?,
            };
        }
    }

    let last_col = table.columns.len().saturating_sub(1) as u16;
    worksheet.autofilter(0, 0, table.rows.len() as u32, last_col)?;
    worksheet.set_freeze_panes(1, 1)?;

    Ok(workbook)
}

/// Workbook construction, buffer serialization, then the file save, in
/// that order.
pub fn save_table(
    table: &VisibleTable<'_>,
    sheet_name: &str,
    path: &Path,
) -> Result<(), ExportError> {
    let mut workbook = build_workbook(table, sheet_name)?;
    let buffer = workbook.save_to_buffer()?;
    fs::write(path, buffer)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/tables/export.rs"]
mod tests;
