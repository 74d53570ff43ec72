use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::report::{ReportError, ReportLayout, ReportView};
use crate::tables::TableView;
use crate::tables::grid::{AUTO_GRID_CONTAINER, GridConfig};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridEntry {
    pub title: &'static str,
    pub options: GridConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_file: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

/// Chart configs keyed by canvas id.
pub fn chart_configs(view: &ReportView<'_>) -> Result<Value, ReportError> {
    let mut out = Map::new();
    for (kind, config) in view.charts().configs() {
        out.insert(kind.canvas_id().to_string(), serde_json::to_value(config)?);
    }
    Ok(Value::Object(out))
}

pub fn grid_entries(view: &ReportView<'_>) -> Vec<(&'static str, GridEntry)> {
    match view.layout() {
        ReportLayout::Detailed => TableView::all()
            .iter()
            .map(|&table| {
                let grid = view.stats_grid(table);
                (
                    table.container_id(),
                    GridEntry {
                        title: table.title(),
                        options: grid.config(),
                        export_file: Some(table.export_file_name()),
                        sheet_name: Some(table.sheet_name()),
                        fields: Vec::new(),
                    },
                )
            })
            .collect(),
        ReportLayout::Simple => {
            let grid = view.auto_grid();
            vec![(
                AUTO_GRID_CONTAINER,
                GridEntry {
                    title: "Results",
                    options: grid.config(),
                    export_file: None,
                    sheet_name: None,
                    fields: grid.columns().to_vec(),
                },
            )]
        }
    }
}

/// Grid entries keyed by container id.
pub fn grid_configs(view: &ReportView<'_>) -> Result<Value, ReportError> {
    let mut out = Map::new();
    for (id, entry) in grid_entries(view) {
        out.insert(id.to_string(), serde_json::to_value(entry)?);
    }
    Ok(Value::Object(out))
}

pub fn data_json(view: &ReportView<'_>) -> Result<Value, ReportError> {
    Ok(serde_json::to_value(&view.bundle().records)?)
}

/// Configuration bundle for a surrounding UI shell.
pub fn render_bundle_json(
    view: &ReportView<'_>,
    charts: Option<&Value>,
    grids: Option<&Value>,
) -> Result<String, ReportError> {
    let experiments = view.set().names().collect::<Vec<_>>();
    let bundle = json!({
        "tool": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        },
        "title": view.title(),
        "layout": view.layout().name(),
        "experiments": experiments,
        "charts": charts.cloned().unwrap_or(Value::Null),
        "grids": grids.cloned().unwrap_or(Value::Null),
    });
    Ok(serde_json::to_string_pretty(&bundle)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
