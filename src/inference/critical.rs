use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::core::StatsError;

/// Cumulative probability of a two-tailed interval at the given
/// confidence level: `1 - (1 - confidence) / 2`.
fn two_tailed_probability(confidence: f64) -> Result<f64, StatsError> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(StatsError::InvalidConfidence { value: confidence });
    }
    Ok(1.0 - (1.0 - confidence) / 2.0)
}

/// Two-tailed Student-t critical value for the given confidence level and
/// degrees of freedom.
pub fn student_t_critical(confidence: f64, degrees_of_freedom: f64) -> Result<f64, StatsError> {
    let p = two_tailed_probability(confidence)?;
    let t = StudentsT::new(0.0, 1.0, degrees_of_freedom)
        .map_err(|e| StatsError::Distribution(e.to_string()))?;
    Ok(t.inverse_cdf(p))
}

/// Two-tailed standard-Normal critical value for the given confidence
/// level.
pub fn normal_critical(confidence: f64) -> Result<f64, StatsError> {
    let p = two_tailed_probability(confidence)?;
    let normal = Normal::new(0.0, 1.0).map_err(|e| StatsError::Distribution(e.to_string()))?;
    Ok(normal.inverse_cdf(p))
}
