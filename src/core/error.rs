use thiserror::Error;

/// Failure modes of sample construction and statistic evaluation.
///
/// Undefined arithmetic (too few observations, zero-mean spread ratios) is
/// deliberately *not* an error: those cases surface as `NaN`/`+inf`
/// sentinel values so that report formatting can keep working with plain
/// floats.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("empty sample: at least one observation is required")]
    EmptySample,

    #[error("insufficient observations: {actual} observed, at least {required} required")]
    InsufficientObservations { required: usize, actual: usize },

    #[error("non-numeric observation '{value}' is not supported by this statistic")]
    NonNumeric { value: String },

    #[error("cannot interpret observation '{value}' as a number")]
    Conversion { value: String },

    #[error("confidence level {value} must lie strictly between 0 and 1")]
    InvalidConfidence { value: f64 },

    #[error("distribution parameters rejected: {0}")]
    Distribution(String),
}
