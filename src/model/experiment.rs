use serde::{Deserialize, Serialize};

/// One evaluated system, as produced by the upstream statistics step.
///
/// Field names follow the keys of the results array verbatim, including the
/// `jndex` / `jindexTh` spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    pub experiment: String,
    pub samples: Vec<f64>,
    pub fnmr_samples: Vec<f64>,
    pub tpr_samples: Vec<f64>,

    pub gmean: f64,
    pub gstd: f64,
    pub imean: f64,
    pub istd: f64,
    pub sindex: f64,
    pub jndex: f64,
    #[serde(rename = "MCC")]
    pub mcc: f64,

    #[serde(rename = "EERLow")]
    pub eer_low: f64,
    #[serde(rename = "EERHigh")]
    pub eer_high: f64,
    #[serde(rename = "EER")]
    pub eer: f64,
    #[serde(rename = "ZeroFMR")]
    pub zero_fmr: f64,
    #[serde(rename = "FMR1000")]
    pub fmr1000: f64,
    #[serde(rename = "FMR100")]
    pub fmr100: f64,
    #[serde(rename = "FMR20")]
    pub fmr20: f64,
    #[serde(rename = "FMR10")]
    pub fmr10: f64,
    #[serde(rename = "ZeroFNMR")]
    pub zero_fnmr: f64,
    #[serde(rename = "AUC")]
    pub auc: f64,

    #[serde(rename = "EERTh")]
    pub eer_th: f64,
    #[serde(rename = "ZeroFMRTh")]
    pub zero_fmr_th: f64,
    #[serde(rename = "FMR1000Th")]
    pub fmr1000_th: f64,
    #[serde(rename = "FMR100Th")]
    pub fmr100_th: f64,
    #[serde(rename = "FMR20Th")]
    pub fmr20_th: f64,
    #[serde(rename = "FMR10Th")]
    pub fmr10_th: f64,
    #[serde(rename = "ZeroFNMRTh")]
    pub zero_fnmr_th: f64,
    #[serde(rename = "jindexTh")]
    pub jindex_th: f64,
    #[serde(rename = "MCCTh")]
    pub mcc_th: f64,
}

/// A validated, non-empty collection of experiments sharing one sampling grid.
///
/// Only `input::validate` constructs it, so every holder can rely on:
/// at least one experiment, unique names, equal-length sample series and
/// identical `samples` across experiments.
#[derive(Debug, Clone)]
pub struct ExperimentSet {
    experiments: Vec<ExperimentResult>,
}

impl ExperimentSet {
    pub(crate) fn from_validated(experiments: Vec<ExperimentResult>) -> Self {
        debug_assert!(!experiments.is_empty());
        Self { experiments }
    }

    pub fn experiments(&self) -> &[ExperimentResult] {
        &self.experiments
    }

    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    /// Shared x-axis operating points (taken from the first experiment).
    pub fn labels(&self) -> &[f64] {
        &self.experiments[0].samples
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.experiments.iter().map(|e| e.experiment.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/experiment.rs"]
mod tests;
