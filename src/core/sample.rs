use crate::core::error::StatsError;
use crate::core::observation::Observation;

/// A validated, immutable sample of observations.
///
/// Construction normalizes the input (numeric `NaN` becomes
/// [`Observation::Missing`]) and caches the non-missing observation count,
/// which inference formulas use as their denominator. There is no mutating
/// API: every statistic is a pure read, so a `Sample` can be shared across
/// threads freely.
#[derive(Debug, Clone)]
pub struct Sample {
    observations: Vec<Observation>,
    observed: usize,
}

impl Sample {
    /// Wraps an already-normalized sequence of observations.
    pub fn new(observations: Vec<Observation>) -> Result<Self, StatsError> {
        if observations.is_empty() {
            return Err(StatsError::EmptySample);
        }
        let observations: Vec<Observation> = observations
            .into_iter()
            .map(|o| match o {
                Observation::Numeric(x) if x.is_nan() => Observation::Missing,
                other => other,
            })
            .collect();
        let observed = observations.iter().filter(|o| !o.is_missing()).count();
        Ok(Self {
            observations,
            observed,
        })
    }

    /// Builds a sample from any sequence of convertible values.
    pub fn from_values<T, I>(values: I) -> Result<Self, StatsError>
    where
        T: Into<Observation>,
        I: IntoIterator<Item = T>,
    {
        Self::new(values.into_iter().map(Into::into).collect())
    }

    /// Total element count, missing values included.
    #[inline]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Construction rejects empty input, so this only exists to satisfy
    /// the usual `len`/`is_empty` pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Cached count of non-missing observations.
    #[inline]
    pub fn observed_count(&self) -> usize {
        self.observed
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Numeric view without coercion: category labels are an error,
    /// missing values read as `NaN`.
    pub(crate) fn strict_values(&self) -> Result<Vec<f64>, StatsError> {
        self.observations
            .iter()
            .map(|o| match o {
                Observation::Numeric(x) => Ok(*x),
                Observation::Missing => Ok(f64::NAN),
                Observation::Category(label) => Err(StatsError::NonNumeric {
                    value: label.clone(),
                }),
            })
            .collect()
    }

    /// Numeric view with coercion: category labels are parsed where
    /// possible, missing values read as `NaN`.
    pub(crate) fn coerced_values(&self) -> Result<Vec<f64>, StatsError> {
        self.observations.iter().map(Observation::to_numeric).collect()
    }
}
