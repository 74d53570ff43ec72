use serde_json::json;

use super::*;
use crate::fixtures::example_bundle;
use crate::report::ReportLayout;
use crate::report::json::{chart_configs, data_json, grid_configs};

fn render(layout: ReportLayout, with_charts: bool, with_grids: bool) -> String {
    let bundle = example_bundle();
    let view = ReportView::new("EER <report>", layout, &bundle);
    let data = data_json(&view).unwrap();
    let charts = chart_configs(&view).unwrap();
    let grids = grid_configs(&view).unwrap();
    render_page(
        &view,
        &data,
        with_charts.then_some(&charts),
        with_grids.then_some(&grids),
    )
    .unwrap()
}

#[test]
fn test_page_has_canvases_and_grids() {
    let html = render(ReportLayout::Detailed, true, true);
    for id in ["detChart", "detChartLog", "rocChart", "rocChartLog"] {
        assert!(html.contains(&format!("<canvas id=\"{id}\"></canvas>")), "{id}");
    }
    for id in ["gridContainerGeneral", "gridContainerErrors", "gridContainerThresholds"] {
        assert!(html.contains(&format!("<div id=\"{id}\"></div>")), "{id}");
    }
    assert!(!html.contains("<div id=\"gridContainer\"></div>"));
    assert!(html.contains("<title>EER &lt;report&gt;</title>"));
    assert!(html.contains("e.cancel = true"));
    assert!(html.contains("Experiments: 2"));
}

#[test]
fn test_simple_page_has_single_grid() {
    let html = render(ReportLayout::Simple, true, true);
    assert!(html.contains("<div id=\"gridContainer\"></div>"));
    assert!(!html.contains("gridContainerGeneral"));
}

#[test]
fn test_failed_adapter_leaves_the_other() {
    let html = render(ReportLayout::Detailed, false, true);
    assert!(html.contains("Charts could not be generated."));
    assert!(!html.contains("<canvas"));
    assert!(html.contains("gridContainerErrors"));
    assert!(html.contains("const chartConfigs = {};"));

    let html = render(ReportLayout::Detailed, true, false);
    assert!(html.contains("Tables could not be generated."));
    assert!(html.contains("<canvas id=\"rocChart\"></canvas>"));
}

#[test]
fn test_script_json_escapes_tags() {
    let text = script_json(&json!({"name": "</script><b>"})).unwrap();
    assert!(!text.contains('<'));
    assert_eq!(text, "{\"name\":\"\\u003c/script>\\u003cb>\"}");
}
