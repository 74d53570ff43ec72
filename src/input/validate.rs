use std::collections::BTreeSet;

use crate::input::InputError;
use crate::model::{ExperimentResult, ExperimentSet};

pub fn validate_experiments(
    experiments: Vec<ExperimentResult>,
) -> Result<ExperimentSet, InputError> {
    let Some(first) = experiments.first() else {
        return Err(InputError::Empty);
    };

    let mut seen = BTreeSet::new();
    for exp in &experiments {
        if !seen.insert(exp.experiment.as_str()) {
            return Err(InputError::DuplicateExperiment(exp.experiment.clone()));
        }

        let expected = exp.samples.len();
        for (field, found) in [
            ("fnmr_samples", exp.fnmr_samples.len()),
            ("tpr_samples", exp.tpr_samples.len()),
        ] {
            if found != expected {
                return Err(InputError::LengthMismatch {
                    experiment: exp.experiment.clone(),
                    field,
                    expected,
                    found,
                });
            }
        }

        if exp.samples != first.samples {
            return Err(InputError::SamplingMismatch {
                experiment: exp.experiment.clone(),
                reference: first.experiment.clone(),
            });
        }
    }

    Ok(ExperimentSet::from_validated(experiments))
}
