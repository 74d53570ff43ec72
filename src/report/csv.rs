use std::path::Path;

use crate::model::ExperimentSet;
use crate::report::ReportError;
use crate::tables::{ColumnDef, all_columns, format_number};

const STATS_ORDER: &[&str] = &[
    "experiment",
    "gmean",
    "gstd",
    "imean",
    "istd",
    "sindex",
    "AUC",
    "jndex",
    "jindexTh",
    "MCC",
    "MCCTh",
    "EERLow",
    "EERHigh",
    "EER",
    "ZeroFMR",
    "FMR1000",
    "FMR100",
    "FMR20",
    "FMR10",
    "ZeroFNMR",
    "EERTh",
    "ZeroFMRTh",
    "FMR1000Th",
    "FMR100Th",
    "FMR20Th",
    "FMR10Th",
    "ZeroFNMRTh",
];

const LEGEND: &[&str] = &[
    "Legend:",
    "GMean: Genuine scores distribution mean",
    "GSTD: Genuine scores distribution standard deviation",
    "IMean: Impostor scores distribution mean",
    "ISTD: Impostor scores distribution standard deviation",
    "Sensitivity index (d'): See NICE:II protocol evaluation",
    "AUC: Area under the ROC curve",
    "J-Index: Youden's J statistic (Youden's Index)",
    "MCC: Matthews Correlation Coefficient",
    "EER: Equal Error Rate",
    "EERlow, EERhigh: See FVC2000 protocol evaluation",
    "FMR: False Match Rate",
    "FNMR: False Non-Match Rate",
    "_TH: Threshold",
    "EER_TH: Threshold for which EERlow and EERHigh were calculated",
];

fn stats_columns() -> Vec<&'static ColumnDef> {
    STATS_ORDER
        .iter()
        .filter_map(|key| all_columns().iter().find(|c| c.key == *key))
        .collect()
}

pub fn write_csv_report(set: &ExperimentSet, path: &Path) -> Result<(), ReportError> {
    let mut w = ::csv::WriterBuilder::new().flexible(true).from_path(path)?;

    w.write_record([format!(
        "Generated using {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )])?;

    let columns = stats_columns();
    w.write_record(columns.iter().map(|c| c.caption))?;
    for exp in set.experiments() {
        w.write_record(columns.iter().map(|c| c.cell(exp).to_text()))?;
    }

    write_blank(&mut w)?;
    for line in LEGEND {
        w.write_record([*line])?;
    }
    write_blank(&mut w)?;

    let mut header = Vec::with_capacity(set.len() * 3);
    for name in set.names() {
        header.push(" ".to_string());
        header.push(format!("{name} (FMR)"));
        header.push(format!("{name} (FNMR)"));
    }
    w.write_record(&header)?;

    let n_rows = set
        .experiments()
        .iter()
        .map(|e| e.samples.len())
        .max()
        .unwrap_or(0);
    for i in 0..n_rows {
        let mut row = Vec::with_capacity(set.len() * 3);
        for exp in set.experiments() {
            row.push(" ".to_string());
            match (exp.samples.get(i), exp.fnmr_samples.get(i)) {
                (Some(fmr), Some(fnmr)) => {
                    row.push(format_number(*fmr));
                    row.push(format_number(*fnmr));
                }
                _ => {
                    row.push(" ".to_string());
                    row.push(" ".to_string());
                }
            }
        }
        w.write_record(&row)?;
    }

    w.flush()?;
    Ok(())
}

/// Empty line. A single empty field would be written as `""`.
fn write_blank<W: std::io::Write>(w: &mut ::csv::Writer<W>) -> Result<(), ReportError> {
    w.write_record(std::iter::empty::<&str>())?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/csv.rs"]
mod tests;
