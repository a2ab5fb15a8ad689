//! Core types for the regression playground.

mod options;
mod result;
mod sample;
mod summary;

pub use options::{
    EvaluationOptions, EvaluationOptionsBuilder, GenerationOptions, GenerationOptionsBuilder,
    OptionsError, PlaygroundParams, DEFAULT_TOP_K, MAX_FEATURES,
};
pub use result::FitResult;
pub use sample::{DataSummary, Record, SampleSet};
pub use summary::{EvaluationSummary, FTest, OutlierRecord};
