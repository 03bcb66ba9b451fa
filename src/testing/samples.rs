//! Ready-made samples for unit tests.

use crate::core::{Observation, Sample};

/// Sample of plain numeric observations.
pub fn numeric(values: &[f64]) -> Sample {
    Sample::from_values(values.iter().copied()).expect("numeric fixture must be non-empty")
}

/// Sample of category labels.
pub fn categorical(labels: &[&str]) -> Sample {
    Sample::from_values(labels.iter().copied()).expect("categorical fixture must be non-empty")
}

/// Numeric sample with `None` slots for missing observations.
pub fn with_missing(values: &[Option<f64>]) -> Sample {
    Sample::new(
        values
            .iter()
            .map(|v| Observation::from(*v))
            .collect(),
    )
    .expect("missing-value fixture must be non-empty")
}
