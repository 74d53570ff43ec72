use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{ExperimentResult, ExperimentSet};
use crate::tables::export::{ExportError, ExportHandler, SpreadsheetExport};
use crate::tables::{CellValue, ColumnDef, TableView};

/// Row filter as set from the grid's filter row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RowFilter {
    /// Case-insensitive substring match on the cell text.
    Contains { field: String, value: String },
    /// Inclusive numeric range; an absent bound is open.
    Between {
        field: String,
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
}

impl RowFilter {
    pub fn field(&self) -> &str {
        match self {
            RowFilter::Contains { field, .. } | RowFilter::Between { field, .. } => field,
        }
    }

    fn matches(&self, value: CellValue<'_>) -> Result<bool, ExportError> {
        match (self, value) {
            (RowFilter::Contains { value: needle, .. }, cell) => Ok(cell
                .to_text()
                .to_lowercase()
                .contains(&needle.to_lowercase())),
            (RowFilter::Between { min, max, .. }, CellValue::Number(v)) => {
                Ok(min.is_none_or(|lo| v >= lo) && max.is_none_or(|hi| v <= hi))
            }
            (RowFilter::Between { field, .. }, CellValue::Text(_)) => {
                Err(ExportError::InvalidFilter {
                    field: field.clone(),
                    reason: "range filter on a text column".to_string(),
                })
            }
        }
    }
}

/// Visible state of one grid: column order/visibility and active filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridState {
    /// Visible columns in display order; `None` shows every column of the view.
    pub columns: Option<Vec<String>>,
    pub filters: Vec<RowFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStates {
    pub general: GridState,
    pub errors: GridState,
    pub thresholds: GridState,
}

impl GridStates {
    pub fn for_view(&self, view: TableView) -> &GridState {
        match view {
            TableView::General => &self.general,
            TableView::Errors => &self.errors,
            TableView::Thresholds => &self.thresholds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridColumn {
    pub data_field: &'static str,
    pub caption: &'static str,
    pub fixed: bool,
    pub allow_hiding: bool,
    pub allow_reordering: bool,
    pub allow_header_filtering: bool,
}

impl GridColumn {
    pub fn from_def(def: &ColumnDef) -> Self {
        let fixed = def.is_fixed();
        Self {
            data_field: def.key,
            caption: def.caption,
            fixed,
            allow_hiding: !fixed,
            allow_reordering: !fixed,
            allow_header_filtering: fixed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<GridColumn>>,
    pub show_borders: bool,
    pub show_row_lines: bool,
    pub show_column_lines: bool,
    pub column_auto_width: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub remote_operations: bool,
    pub hover_state_enabled: bool,
    pub allow_column_reordering: bool,
    pub allow_column_resizing: bool,
    pub column_resizing_mode: &'static str,
    pub column_chooser: ColumnChooser,
    pub filter_row: FilterRow,
    pub header_filter: HeaderFilter,
    pub load_panel: Toggle,
    pub export: Toggle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnChooser {
    pub enabled: bool,
    pub mode: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRow {
    pub visible: bool,
    pub apply_filter: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderFilter {
    pub visible: bool,
    pub height: u32,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

impl GridConfig {
    fn base(columns: Option<Vec<GridColumn>>, export: bool) -> Self {
        Self {
            columns,
            show_borders: true,
            show_row_lines: true,
            show_column_lines: true,
            column_auto_width: true,
            remote_operations: false,
            hover_state_enabled: true,
            allow_column_reordering: true,
            allow_column_resizing: true,
            column_resizing_mode: "nextColumn",
            column_chooser: ColumnChooser {
                enabled: true,
                mode: "select",
            },
            filter_row: FilterRow {
                visible: true,
                apply_filter: "auto",
            },
            header_filter: HeaderFilter {
                visible: true,
                height: 500,
                width: 400,
            },
            load_panel: Toggle { enabled: true },
            export: Toggle { enabled: export },
        }
    }

    pub fn for_view(view: TableView) -> Self {
        Self::base(Some(view.columns().map(GridColumn::from_def).collect()), true)
    }

    /// Single grid of the simple layout: columns are left to the grid's own
    /// inference from the record fields, and there is no export.
    pub fn auto() -> Self {
        Self {
            remote_operations: true,
            ..Self::base(None, false)
        }
    }
}

/// Current columns and rows of a stats grid under a given state.
#[derive(Debug, Clone)]
pub struct VisibleTable<'a> {
    pub columns: Vec<&'static ColumnDef>,
    pub rows: Vec<&'a ExperimentResult>,
}

/// One of the three detailed statistics grids.
pub struct StatsGrid<'a> {
    view: TableView,
    set: &'a ExperimentSet,
    on_exporting: Option<Box<dyn ExportHandler>>,
}

impl<'a> StatsGrid<'a> {
    pub fn new(view: TableView, set: &'a ExperimentSet) -> Self {
        Self {
            view,
            set,
            on_exporting: None,
        }
    }

    /// Grid wired with the spreadsheet export button.
    pub fn with_spreadsheet_export(view: TableView, set: &'a ExperimentSet) -> Self {
        Self::new(view, set).on_exporting(Box::new(SpreadsheetExport))
    }

    pub fn on_exporting(mut self, handler: Box<dyn ExportHandler>) -> Self {
        self.on_exporting = Some(handler);
        self
    }

    pub fn view(&self) -> TableView {
        self.view
    }

    pub fn config(&self) -> GridConfig {
        GridConfig::for_view(self.view)
    }

    pub fn handler(&self) -> Option<&dyn ExportHandler> {
        self.on_exporting.as_deref()
    }

    /// Visible columns under `state`. The experiment column stays pinned first
    /// whatever order the state lists.
    pub fn resolve_columns(
        &self,
        state: &GridState,
    ) -> Result<Vec<&'static ColumnDef>, ExportError> {
        let Some(keys) = &state.columns else {
            return Ok(self.view.columns().collect());
        };
        let mut columns: Vec<&'static ColumnDef> =
            self.view.columns().filter(|c| c.is_fixed()).collect();
        for key in keys {
            let def = self
                .view
                .column(key)
                .ok_or_else(|| ExportError::UnknownColumn {
                    view: self.view.name(),
                    field: key.clone(),
                })?;
            if !columns.iter().any(|c| c.key == def.key) {
                columns.push(def);
            }
        }
        Ok(columns)
    }

    pub fn visible(&self, state: &GridState) -> Result<VisibleTable<'a>, ExportError> {
        let columns = self.resolve_columns(state)?;

        let mut filters = Vec::with_capacity(state.filters.len());
        for filter in &state.filters {
            let def = self
                .view
                .column(filter.field())
                .ok_or_else(|| ExportError::UnknownColumn {
                    view: self.view.name(),
                    field: filter.field().to_string(),
                })?;
            filters.push((filter, def));
        }

        let mut rows = Vec::with_capacity(self.set.len());
        for exp in self.set.experiments() {
            let mut keep = true;
            for (filter, def) in &filters {
                if !filter.matches(def.cell(exp))? {
                    keep = false;
                    break;
                }
            }
            if keep {
                rows.push(exp);
            }
        }

        Ok(VisibleTable { columns, rows })
    }
}

/// The single grid of the simple layout. It has no export.
#[derive(Debug, Clone)]
pub struct AutoGrid {
    columns: Vec<String>,
}

pub const AUTO_GRID_CONTAINER: &str = "gridContainer";

impl AutoGrid {
    pub fn new(records: &[Map<String, Value>]) -> Self {
        Self {
            columns: infer_columns(records),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn config(&self) -> GridConfig {
        GridConfig::auto()
    }
}

/// Field names across all records, in first-seen order.
pub fn infer_columns(records: &[Map<String, Value>]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

#[cfg(test)]
#[path = "../../tests/src_inline/tables/grid.rs"]
mod tests;
