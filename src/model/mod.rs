pub mod experiment;
pub mod palette;

pub use experiment::{ExperimentResult, ExperimentSet};
