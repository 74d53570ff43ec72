use std::fmt::Write as FmtWrite;

use serde_json::Value;

use crate::charts::ChartKind;
use crate::report::{ReportError, ReportView, escape_html};

const JQUERY_JS: &str = "https://code.jquery.com/jquery-3.7.1.min.js";
const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
const DEVEXTREME_CSS: &str = "https://cdn3.devexpress.com/jslib/23.2.5/css/dx.light.css";
const DEVEXTREME_JS: &str = "https://cdn3.devexpress.com/jslib/23.2.5/js/dx.all.js";
const EXCELJS_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/exceljs/4.4.0/exceljs.min.js";
const FILESAVER_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/FileSaver.js/2.0.5/FileSaver.min.js";

// Registers charts and grids once on document ready. Each widget is created
// independently so one failing does not stop the others. The export handler
// cancels the grid's built-in export and runs workbook -> buffer -> save.
const PAGE_SCRIPT: &str = r#"$(function () {
    const report = { charts: {}, grids: {} };

    Object.entries(chartConfigs).forEach(function ([id, config]) {
        try {
            const ctx = document.getElementById(id).getContext('2d');
            report.charts[id] = new Chart(ctx, config);
        } catch (err) {
            console.error('chart ' + id + ' failed', err);
        }
    });

    Object.entries(gridConfigs).forEach(function ([id, grid]) {
        try {
            const options = Object.assign({ dataSource: data }, grid.options);
            if (grid.exportFile) {
                options.onExporting = function (e) {
                    const workbook = new ExcelJS.Workbook();
                    const worksheet = workbook.addWorksheet(grid.sheetName);
                    DevExpress.excelExporter.exportDataGrid({
                        component: e.component,
                        worksheet: worksheet,
                        autoFilterEnabled: true
                    }).then(function () {
                        return workbook.xlsx.writeBuffer();
                    }).then(function (buffer) {
                        saveAs(new Blob([buffer], { type: 'application/octet-stream' }), grid.exportFile);
                    }).catch(function (err) {
                        DevExpress.ui.notify('Export to ' + grid.exportFile + ' failed: ' + err, 'error', 5000);
                    });
                    e.cancel = true;
                };
            }
            report.grids[id] = $('#' + id).dxDataGrid(options).dxDataGrid('instance');
        } catch (err) {
            console.error('grid ' + id + ' failed', err);
        }
    });

    document.dispatchEvent(new CustomEvent('eerreport:ready', { detail: report }));
});
"#;

pub fn render_page(
    view: &ReportView<'_>,
    data: &Value,
    charts: Option<&Value>,
    grids: Option<&Value>,
) -> Result<String, ReportError> {
    let mut html = String::with_capacity(64 * 1024);
    let title = escape_html(view.title());

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\"/>")?;
    writeln!(
        html,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>"
    )?;
    writeln!(html, "<title>{title}</title>")?;
    writeln!(html, "<link rel=\"stylesheet\" href=\"{DEVEXTREME_CSS}\"/>")?;
    writeln!(html, "<style>")?;
    writeln!(
        html,
        "body{{font-family:Arial,Helvetica,sans-serif;margin:20px;color:#222;background:#fff;}}"
    )?;
    writeln!(html, "h1{{margin:0 0 8px 0;font-size:24px;}}")?;
    writeln!(html, "h2{{margin:24px 0 8px 0;font-size:20px;}}")?;
    writeln!(html, ".meta{{color:#555;font-size:13px;margin-bottom:16px;}}")?;
    writeln!(
        html,
        ".charts{{display:grid;grid-template-columns:repeat(auto-fit,minmax(480px,1fr));gap:24px;}}"
    )?;
    writeln!(html, ".notice{{color:#c00000;font-weight:bold;}}")?;
    writeln!(html, "</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;

    writeln!(html, "<h1>{title}</h1>")?;
    writeln!(
        html,
        "<div class=\"meta\">Experiments: {}<br/>Operating points: {}<br/>Generated by {} {}</div>",
        view.set().len(),
        view.charts().labels().len(),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )?;

    writeln!(html, "<h2>Curves</h2>")?;
    if charts.is_some() {
        writeln!(html, "<div class=\"charts\">")?;
        for kind in ChartKind::all() {
            writeln!(
                html,
                "<div><h3>{}</h3><canvas id=\"{}\"></canvas></div>",
                kind.title(),
                kind.canvas_id()
            )?;
        }
        writeln!(html, "</div>")?;
    } else {
        writeln!(html, "<p class=\"notice\">Charts could not be generated.</p>")?;
    }

    writeln!(html, "<h2>Statistics</h2>")?;
    match grids {
        Some(Value::Object(entries)) => {
            for (id, entry) in entries {
                let heading = entry.get("title").and_then(Value::as_str).unwrap_or("");
                writeln!(html, "<h3>{}</h3>", escape_html(heading))?;
                writeln!(html, "<div id=\"{}\"></div>", escape_html(id))?;
            }
        }
        _ => writeln!(html, "<p class=\"notice\">Tables could not be generated.</p>")?,
    }

    for src in [JQUERY_JS, CHART_JS, DEVEXTREME_JS, EXCELJS_JS, FILESAVER_JS] {
        writeln!(html, "<script src=\"{src}\"></script>")?;
    }

    let empty = Value::Object(Default::default());
    writeln!(html, "<script>")?;
    writeln!(html, "const data = {};", script_json(data)?)?;
    writeln!(
        html,
        "const chartConfigs = {};",
        script_json(charts.unwrap_or(&empty))?
    )?;
    writeln!(
        html,
        "const gridConfigs = {};",
        script_json(grids.unwrap_or(&empty))?
    )?;
    html.push_str(PAGE_SCRIPT);
    writeln!(html, "</script>")?;

    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

/// JSON safe to inline in a `<script>` element.
fn script_json(value: &Value) -> Result<String, ReportError> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace('<', "\\u003c"))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
