use serde_json::json;

use super::*;
use crate::charts::AxisScale;
use crate::fixtures::{example_bundle, experiment, named_set, set_of};
use crate::model::palette::palette;

#[test]
fn test_one_dataset_per_experiment_in_input_order() {
    let set = set_of(vec![
        experiment("Zeta", &[0.0, 1.0], &[1.0, 0.0], &[0.0, 1.0]),
        experiment("Alpha", &[0.0, 1.0], &[0.9, 0.1], &[0.1, 0.9]),
        experiment("Mid", &[0.0, 1.0], &[0.8, 0.2], &[0.2, 0.8]),
    ]);
    let charts = ChartSet::build(&set);
    for family in [ChartFamily::Det, ChartFamily::Roc] {
        let labels = charts
            .datasets(family)
            .iter()
            .map(|d| d.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["Zeta", "Alpha", "Mid"]);
    }
}

#[test]
fn test_palette_wraps_past_eighteen() {
    let set = named_set(20);
    let charts = ChartSet::build(&set);
    let det = charts.datasets(ChartFamily::Det);
    assert_eq!(det.len(), 20);
    for (i, ds) in det.iter().enumerate() {
        assert_eq!(ds.background_color, palette()[i % 18]);
        assert_eq!(ds.border_color, ds.background_color);
        assert!(!ds.fill);
    }
    assert_eq!(det[18].border_color, det[0].border_color);
    assert_eq!(det[19].border_color, det[1].border_color);
}

#[test]
fn test_log_variants_share_datasets() {
    let bundle = example_bundle();
    let charts = ChartSet::build(&bundle.set);

    let det = serde_json::to_value(charts.config(ChartKind::Det)).unwrap();
    let det_log = serde_json::to_value(charts.config(ChartKind::DetLog)).unwrap();
    assert_eq!(det["data"], det_log["data"]);
    assert_ne!(det["options"]["scales"], det_log["options"]["scales"]);

    let roc = serde_json::to_value(charts.config(ChartKind::Roc)).unwrap();
    let roc_log = serde_json::to_value(charts.config(ChartKind::RocLog)).unwrap();
    assert_eq!(roc["data"], roc_log["data"]);
    assert_ne!(det["data"], roc["data"]);
}

#[test]
fn test_axis_scale_types() {
    let charts = ChartSet::build(&example_bundle().set);

    let det = serde_json::to_value(charts.config(ChartKind::Det)).unwrap();
    assert!(det["options"]["scales"]["x"].get("type").is_none());
    assert!(det["options"]["scales"]["y"].get("type").is_none());

    let det_log = serde_json::to_value(charts.config(ChartKind::DetLog)).unwrap();
    assert_eq!(det_log["options"]["scales"]["x"]["type"], "logarithmic");
    assert_eq!(det_log["options"]["scales"]["y"]["type"], "logarithmic");

    let roc_log = serde_json::to_value(charts.config(ChartKind::RocLog)).unwrap();
    assert_eq!(roc_log["options"]["scales"]["x"]["type"], "logarithmic");
    assert!(roc_log["options"]["scales"]["y"].get("type").is_none());

    assert_eq!(ChartKind::RocLog.scales().y, AxisScale::Linear);
}

#[test]
fn test_axis_titles_fixed_per_family() {
    let weird = set_of(vec![experiment(
        "False match rate",
        &[0.0],
        &[1.0],
        &[0.0],
    )]);
    for set in [weird, named_set(2)] {
        let charts = ChartSet::build(&set);
        for (kind, config) in charts.configs() {
            let (x, y) = match kind {
                ChartKind::Det | ChartKind::DetLog => ("False match rate", "False non-match rate"),
                ChartKind::Roc | ChartKind::RocLog => ("False match rate", "True match rate"),
            };
            assert_eq!(config.options.scales.x.title.text, x);
            assert_eq!(config.options.scales.y.title.text, y);
            assert!(config.options.scales.x.title.display);
            assert!(config.options.scales.y.display);
        }
    }
}

#[test]
fn test_det_example_end_to_end() {
    let charts = ChartSet::build(&example_bundle().set);
    let det = serde_json::to_value(charts.config(ChartKind::Det)).unwrap();
    assert_eq!(
        det,
        json!({
            "type": "line",
            "data": {
                "labels": [0.0, 0.5, 1.0],
                "datasets": [
                    {
                        "label": "SysA",
                        "data": [1.0, 0.4, 0.0],
                        "backgroundColor": palette()[0],
                        "borderColor": palette()[0],
                        "fill": false
                    },
                    {
                        "label": "SysB",
                        "data": [1.0, 0.3, 0.0],
                        "backgroundColor": palette()[1],
                        "borderColor": palette()[1],
                        "fill": false
                    }
                ]
            },
            "options": {
                "responsive": true,
                "plugins": { "legend": { "position": "top" } },
                "scales": {
                    "x": { "display": true, "title": { "display": true, "text": "False match rate" } },
                    "y": { "display": true, "title": { "display": true, "text": "False non-match rate" } }
                }
            }
        })
    );
}

#[test]
fn test_roc_uses_tpr_series() {
    let charts = ChartSet::build(&example_bundle().set);
    let roc = charts.datasets(ChartFamily::Roc);
    assert_eq!(roc[0].data, vec![0.0, 0.6, 1.0]);
    assert_eq!(roc[1].data, vec![0.0, 0.7, 1.0]);
    assert_eq!(charts.labels(), &[0.0, 0.5, 1.0]);
}

#[test]
fn test_canvas_ids() {
    let ids = ChartKind::all()
        .iter()
        .map(|k| k.canvas_id())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["detChart", "detChartLog", "rocChart", "rocChartLog"]);

    let charts = ChartSet::build(&named_set(1));
    let kinds = charts.configs().map(|(kind, _)| kind).collect::<Vec<_>>();
    assert_eq!(kinds, ChartKind::all());
}
