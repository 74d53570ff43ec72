pub mod export;
pub mod grid;

use serde::{Deserialize, Serialize};

use crate::model::ExperimentResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableView {
    General,
    Errors,
    Thresholds,
}

const ALL_VIEWS: [TableView; 3] = [TableView::General, TableView::Errors, TableView::Thresholds];

impl TableView {
    pub fn all() -> &'static [TableView] {
        &ALL_VIEWS
    }

    pub fn name(self) -> &'static str {
        match self {
            TableView::General => "general",
            TableView::Errors => "errors",
            TableView::Thresholds => "thresholds",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TableView::General => "General statistics",
            TableView::Errors => "Error rates",
            TableView::Thresholds => "Thresholds",
        }
    }

    pub fn container_id(self) -> &'static str {
        match self {
            TableView::General => "gridContainerGeneral",
            TableView::Errors => "gridContainerErrors",
            TableView::Thresholds => "gridContainerThresholds",
        }
    }

    // "Tresholds" is the established download name; keep it.
    pub fn export_file_name(self) -> &'static str {
        match self {
            TableView::General => "General Stats.xlsx",
            TableView::Errors => "Errors.xlsx",
            TableView::Thresholds => "Tresholds.xlsx",
        }
    }

    pub fn sheet_name(self) -> &'static str {
        match self {
            TableView::General => "General Stats",
            TableView::Errors => "Errors",
            TableView::Thresholds => "Thresholds",
        }
    }

    /// Columns of the view in display order, the fixed experiment column first.
    pub fn columns(self) -> impl Iterator<Item = &'static ColumnDef> {
        COLUMNS
            .iter()
            .filter(move |c| c.view.is_none() || c.view == Some(self))
    }

    pub fn column(self, key: &str) -> Option<&'static ColumnDef> {
        self.columns().find(|c| c.key == key)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ColumnSource {
    Name,
    Stat(fn(&ExperimentResult) -> f64),
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub key: &'static str,
    pub caption: &'static str,
    /// `None` marks the experiment column shared (and pinned) by every view.
    pub view: Option<TableView>,
    pub source: ColumnSource,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl CellValue<'_> {
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.to_string(),
            CellValue::Number(v) => format_number(*v),
        }
    }
}

/// Shortest round-trip text of `v`. Magnitudes outside `[1e-4, 1e16)` use
/// exponent form with a signed, two-digit exponent (`1e-07`, `2.5e+16`).
pub fn format_number(v: f64) -> String {
    if v != 0.0 && v.is_finite() && !(1e-4..1e16).contains(&v.abs()) {
        let sci = format!("{v:e}");
        if let Some((mantissa, exp)) = sci.split_once('e') {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            return format!("{mantissa}e{sign}{digits:0>2}");
        }
    }
    format!("{v}")
}

impl ColumnDef {
    pub fn is_fixed(&self) -> bool {
        self.view.is_none()
    }

    pub fn cell<'a>(&self, exp: &'a ExperimentResult) -> CellValue<'a> {
        match self.source {
            ColumnSource::Name => CellValue::Text(&exp.experiment),
            ColumnSource::Stat(get) => CellValue::Number(get(exp)),
        }
    }
}

macro_rules! stat {
    ($key:literal, $caption:literal, $view:ident, $field:ident) => {
        ColumnDef {
            key: $key,
            caption: $caption,
            view: Some(TableView::$view),
            source: ColumnSource::Stat(|e| e.$field),
        }
    };
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef {
        key: "experiment",
        caption: "Experiment ID",
        view: None,
        source: ColumnSource::Name,
    },
    stat!("gmean", "GMean", General, gmean),
    stat!("gstd", "GSTD", General, gstd),
    stat!("imean", "IMean", General, imean),
    stat!("istd", "ISTD", General, istd),
    stat!("sindex", "Sensitivity index (d')", General, sindex),
    stat!("jndex", "J-Index", General, jndex),
    stat!("MCC", "MCC", General, mcc),
    stat!("EERLow", "EERlow", Errors, eer_low),
    stat!("EERHigh", "EERhigh", Errors, eer_high),
    stat!("EER", "EER", Errors, eer),
    stat!("ZeroFMR", "ZeroFMR", Errors, zero_fmr),
    stat!("FMR1000", "FMR1000", Errors, fmr1000),
    stat!("FMR100", "FMR100", Errors, fmr100),
    stat!("FMR20", "FMR20", Errors, fmr20),
    stat!("FMR10", "FMR10", Errors, fmr10),
    stat!("ZeroFNMR", "ZeroFNMR", Errors, zero_fnmr),
    stat!("AUC", "AUC", Errors, auc),
    stat!("EERTh", "EER_TH", Thresholds, eer_th),
    stat!("ZeroFMRTh", "ZeroFMR_TH", Thresholds, zero_fmr_th),
    stat!("FMR1000Th", "FMR1000_TH", Thresholds, fmr1000_th),
    stat!("FMR100Th", "FMR100_TH", Thresholds, fmr100_th),
    stat!("FMR20Th", "FMR20_TH", Thresholds, fmr20_th),
    stat!("FMR10Th", "FMR10_TH", Thresholds, fmr10_th),
    stat!("ZeroFNMRTh", "ZeroFNMR_TH", Thresholds, zero_fnmr_th),
    stat!("jindexTh", "J-Index_TH", Thresholds, jindex_th),
    stat!("MCCTh", "MCC_TH", Thresholds, mcc_th),
];

pub fn all_columns() -> &'static [ColumnDef] {
    COLUMNS
}

#[cfg(test)]
#[path = "../../tests/src_inline/tables/tests.rs"]
mod tests;
