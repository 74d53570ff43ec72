use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

pub mod source;
pub mod validate;

use crate::model::{ExperimentResult, ExperimentSet};
use crate::tables::grid::GridStates;
use source::{parse_payload, read_text_maybe_gz};
use validate::validate_experiments;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid record #{index} ({experiment}): {source}")]
    Record {
        index: usize,
        experiment: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("results contain no experiments")]
    Empty,
    #[error("experiment {experiment}: {field} has {found} values, samples has {expected}")]
    LengthMismatch {
        experiment: String,
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error(
        "experiment {experiment}: samples differ from those of {reference}; all experiments must share the same operating points"
    )]
    SamplingMismatch {
        experiment: String,
        reference: String,
    },
    #[error("duplicate experiment name: {0}")]
    DuplicateExperiment(String),
}

/// Loaded results: the validated experiments plus the raw records in input
/// order (the simple grid infers its columns from the latter).
#[derive(Debug, Clone)]
pub struct ResultsBundle {
    pub set: ExperimentSet,
    pub records: Vec<Map<String, Value>>,
}

pub fn load_results(path: &Path) -> Result<ResultsBundle, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "results file not found: {}",
            path.display()
        )));
    }
    let text = read_text_maybe_gz(path)?;
    let bundle = parse_results(&text)?;
    tracing::info!(
        path = %path.display(),
        experiments = bundle.set.len(),
        operating_points = bundle.set.labels().len(),
        "loaded results"
    );
    Ok(bundle)
}

pub fn parse_results(text: &str) -> Result<ResultsBundle, InputError> {
    let items = match parse_payload(text)? {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(InputError::Parse(
                    "expected a results array or an object with a \"data\" array".to_string(),
                ));
            }
        },
        _ => {
            return Err(InputError::Parse(
                "expected a results array or an object with a \"data\" array".to_string(),
            ));
        }
    };

    let mut records = Vec::with_capacity(items.len());
    let mut experiments = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(record) = item else {
            return Err(InputError::Parse(format!("record #{index} is not an object")));
        };
        let experiment = serde_json::from_value::<ExperimentResult>(Value::Object(record.clone()))
            .map_err(|source| InputError::Record {
                index,
                experiment: record
                    .get("experiment")
                    .and_then(Value::as_str)
                    .unwrap_or("<unnamed>")
                    .to_string(),
                source,
            })?;
        experiments.push(experiment);
        records.push(record);
    }

    let set = validate_experiments(experiments)?;
    Ok(ResultsBundle { set, records })
}

pub fn load_grid_states(path: &Path) -> Result<GridStates, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "grid state file not found: {}",
            path.display()
        )));
    }
    let text = read_text_maybe_gz(path)?;
    serde_json::from_str(&text)
        .map_err(|e| InputError::Parse(format!("grid state {}: {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
