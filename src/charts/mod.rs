pub mod builder;

use serde::Serialize;

use crate::model::ExperimentResult;

pub use builder::ChartSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFamily {
    Det,
    Roc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Det,
    DetLog,
    Roc,
    RocLog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Logarithmic,
}

impl AxisScale {
    /// Linear axes keep the chart library's default scale type.
    fn type_name(self) -> Option<&'static str> {
        match self {
            AxisScale::Linear => None,
            AxisScale::Logarithmic => Some("logarithmic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisScales {
    pub x: AxisScale,
    pub y: AxisScale,
}

/// Which series a chart family plots and how its axes are titled.
#[derive(Debug, Clone, Copy)]
pub struct SeriesSpec {
    pub family: ChartFamily,
    pub select: fn(&ExperimentResult) -> &[f64],
    pub x_title: &'static str,
    pub y_title: &'static str,
}

fn fnmr_series(exp: &ExperimentResult) -> &[f64] {
    &exp.fnmr_samples
}

fn tpr_series(exp: &ExperimentResult) -> &[f64] {
    &exp.tpr_samples
}

pub const DET_SERIES: SeriesSpec = SeriesSpec {
    family: ChartFamily::Det,
    select: fnmr_series,
    x_title: "False match rate",
    y_title: "False non-match rate",
};

pub const ROC_SERIES: SeriesSpec = SeriesSpec {
    family: ChartFamily::Roc,
    select: tpr_series,
    x_title: "False match rate",
    y_title: "True match rate",
};

const ALL_KINDS: [ChartKind; 4] = [
    ChartKind::Det,
    ChartKind::DetLog,
    ChartKind::Roc,
    ChartKind::RocLog,
];

impl ChartKind {
    pub fn all() -> &'static [ChartKind] {
        &ALL_KINDS
    }

    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartKind::Det => "detChart",
            ChartKind::DetLog => "detChartLog",
            ChartKind::Roc => "rocChart",
            ChartKind::RocLog => "rocChartLog",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Det => "DET curves",
            ChartKind::DetLog => "DET curves (log scale)",
            ChartKind::Roc => "ROC curves",
            ChartKind::RocLog => "ROC curves (log scale)",
        }
    }

    pub fn series(self) -> &'static SeriesSpec {
        match self {
            ChartKind::Det | ChartKind::DetLog => &DET_SERIES,
            ChartKind::Roc | ChartKind::RocLog => &ROC_SERIES,
        }
    }

    pub fn scales(self) -> AxisScales {
        use AxisScale::{Linear, Logarithmic};
        match self {
            ChartKind::Det | ChartKind::Roc => AxisScales {
                x: Linear,
                y: Linear,
            },
            ChartKind::DetLog => AxisScales {
                x: Logarithmic,
                y: Logarithmic,
            },
            ChartKind::RocLog => AxisScales {
                x: Logarithmic,
                y: Linear,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub fill: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig<'a> {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData<'a>,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData<'a> {
    pub labels: &'a [f64],
    pub datasets: &'a [Dataset],
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub display: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<&'static str>,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: &'static str,
}

impl Axis {
    fn new(scale: AxisScale, text: &'static str) -> Self {
        Self {
            display: true,
            scale_type: scale.type_name(),
            title: AxisTitle {
                display: true,
                text,
            },
        }
    }
}
