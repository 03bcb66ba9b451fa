use crate::core::{Sample, StatsError};
use crate::descriptive::frequency::{FrequencyTable, Mode};

/// Mean of a slice; `NaN` for an empty slice.
pub(crate) fn mean_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance with Bessel's correction; `NaN` below two values.
pub(crate) fn sample_variance_of(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let mean = mean_of(values);
    let squared_deviations: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    squared_deviations / (values.len() - 1) as f64
}

pub(crate) fn sample_std_of(values: &[f64]) -> f64 {
    sample_variance_of(values).sqrt()
}

/// Descriptive statistics, implemented directly from their definitions.
///
/// Numeric statistics fail with [`StatsError::NonNumeric`] when the sample
/// holds category labels; a missing observation reads as `NaN` and poisons
/// sums and means the way it would in any float pipeline. Undefined results
/// (too few observations, empty numeric view) come back as `NaN` inside
/// `Ok`, never as errors.
impl Sample {
    /// Arithmetic total of the sample.
    pub fn sum(&self) -> Result<f64, StatsError> {
        Ok(self.strict_values()?.iter().sum())
    }

    /// Arithmetic mean: `sum / len`, counting missing slots in `len`.
    pub fn mean(&self) -> Result<f64, StatsError> {
        Ok(mean_of(&self.strict_values()?))
    }

    /// Middle value of a sorted copy; even-length samples average the two
    /// middle elements.
    pub fn median(&self) -> Result<f64, StatsError> {
        let mut values = self.strict_values()?;
        if values.is_empty() {
            return Ok(f64::NAN);
        }
        values.sort_by(f64::total_cmp);
        let mid = values.len() / 2;
        Ok(if values.len() % 2 == 0 {
            (values[mid - 1] + values[mid]) / 2.0
        } else {
            values[mid]
        })
    }

    /// Most frequent value(s), categorical or numeric.
    ///
    /// A sample of more than one element where nothing repeats has no mode.
    /// Values tied at the maximum frequency are all returned, in first-seen
    /// order.
    pub fn mode(&self) -> Mode {
        let table = FrequencyTable::tally(self.iter());
        let max = table.max_count();
        if max == 0 || (max == 1 && self.len() > 1) {
            return Mode::None;
        }
        let mut tied: Vec<_> = table
            .iter()
            .filter(|(_, count)| *count == max)
            .map(|(observation, _)| observation.clone())
            .collect();
        if tied.len() == 1 {
            Mode::Unique(tied.remove(0))
        } else {
            Mode::Tied(tied)
        }
    }

    /// Sample variance (Bessel's correction, n−1 divisor); `NaN` for fewer
    /// than two elements.
    pub fn variance(&self) -> Result<f64, StatsError> {
        Ok(sample_variance_of(&self.strict_values()?))
    }

    /// Square root of [`variance`](Sample::variance).
    pub fn std_dev(&self) -> Result<f64, StatsError> {
        Ok(sample_std_of(&self.strict_values()?))
    }

    /// `max − min` over the non-missing values; `NaN` when none remain.
    pub fn range(&self) -> Result<f64, StatsError> {
        let values = self.strict_values()?;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        if max < min {
            return Ok(f64::NAN);
        }
        Ok(max - min)
    }

    /// Pearson's coefficient of variation: `(std_dev / mean) * 100`.
    ///
    /// A zero mean with zero spread reads as no variability (`0.0`); a zero
    /// mean with nonzero spread has no defined spread ratio (`+inf`). `NaN`
    /// inputs stay `NaN`.
    pub fn coefficient_of_variation(&self) -> Result<f64, StatsError> {
        let mean = self.mean()?;
        let std_dev = self.std_dev()?;
        if mean.is_nan() || std_dev.is_nan() {
            return Ok(f64::NAN);
        }
        if mean == 0.0 {
            if std_dev == 0.0 {
                return Ok(0.0);
            }
            return Ok(f64::INFINITY);
        }
        Ok((std_dev / mean) * 100.0)
    }
}
