use crate::charts::{
    Axis, AxisScales, ChartConfig, ChartData, ChartFamily, ChartKind, ChartOptions, DET_SERIES,
    Dataset, Legend, Plugins, ROC_SERIES, Scales, SeriesSpec,
};
use crate::model::ExperimentSet;
use crate::model::palette::color_for;

/// Chart state of one rendered report: the shared x labels and one dataset
/// list per chart family. Linear and log variants of a family borrow the same
/// list, so their content cannot diverge.
#[derive(Debug, Clone)]
pub struct ChartSet {
    labels: Vec<f64>,
    det: Vec<Dataset>,
    roc: Vec<Dataset>,
}

impl ChartSet {
    pub fn build(set: &ExperimentSet) -> Self {
        let chart_set = Self {
            labels: set.labels().to_vec(),
            det: build_datasets(set, &DET_SERIES),
            roc: build_datasets(set, &ROC_SERIES),
        };
        tracing::debug!(
            datasets = chart_set.det.len(),
            labels = chart_set.labels.len(),
            "built chart datasets"
        );
        chart_set
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    pub fn datasets(&self, family: ChartFamily) -> &[Dataset] {
        match family {
            ChartFamily::Det => &self.det,
            ChartFamily::Roc => &self.roc,
        }
    }

    pub fn config(&self, kind: ChartKind) -> ChartConfig<'_> {
        let spec = kind.series();
        line_chart_config(
            &self.labels,
            self.datasets(spec.family),
            spec,
            kind.scales(),
        )
    }

    pub fn configs(&self) -> impl Iterator<Item = (ChartKind, ChartConfig<'_>)> {
        ChartKind::all()
            .iter()
            .map(move |&kind| (kind, self.config(kind)))
    }
}

pub fn build_datasets(set: &ExperimentSet, spec: &SeriesSpec) -> Vec<Dataset> {
    set.experiments()
        .iter()
        .enumerate()
        .map(|(idx, exp)| {
            let color = color_for(idx);
            Dataset {
                label: exp.experiment.clone(),
                data: (spec.select)(exp).to_vec(),
                background_color: color,
                border_color: color,
                fill: false,
            }
        })
        .collect()
}

pub fn line_chart_config<'a>(
    labels: &'a [f64],
    datasets: &'a [Dataset],
    spec: &SeriesSpec,
    scales: AxisScales,
) -> ChartConfig<'a> {
    ChartConfig {
        chart_type: "line",
        data: ChartData { labels, datasets },
        options: ChartOptions {
            responsive: true,
            plugins: Plugins {
                legend: Legend { position: "top" },
            },
            scales: Scales {
                x: Axis::new(scales.x, spec.x_title),
                y: Axis::new(scales.y, spec.y_title),
            },
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/builder.rs"]
mod tests;
