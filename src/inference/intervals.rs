use std::fmt;

use serde::Serialize;

use crate::core::{Observation, Sample, StatsError};
use crate::descriptive::{mean_of, sample_std_of};
use crate::inference::critical::{normal_critical, student_t_critical};
use crate::summary::{Summarize, SummaryEntry, SummaryValue};

/// Confidence level used by [`Summarize::summary`] and the textual report.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// An interval expected to contain the true population parameter with the
/// stated probability under repeated sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    #[inline]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lower, self.upper)
    }
}

/// Confidence intervals for a population mean and a population
/// proportion, built on the descriptive layer's mean and standard
/// deviation.
///
/// Owns its [`Sample`] and delegates every base statistic to it; the only
/// additional requirement is at least two non-missing observations, since
/// the standard error is undefined below that.
#[derive(Debug)]
pub struct Inference {
    sample: Sample,
}

impl Inference {
    pub fn new(sample: Sample) -> Result<Self, StatsError> {
        let observed = sample.observed_count();
        if observed < 2 {
            return Err(StatsError::InsufficientObservations {
                required: 2,
                actual: observed,
            });
        }
        Ok(Self { sample })
    }

    /// Builds the sample and the engine in one step.
    pub fn from_values<T, I>(values: I) -> Result<Self, StatsError>
    where
        T: Into<Observation>,
        I: IntoIterator<Item = T>,
    {
        Self::new(Sample::from_values(values)?)
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// Mean and sample standard deviation over the coerced numeric view,
    /// shared by the interval math and the summary.
    fn coerced_mean_and_std(&self) -> Result<(f64, f64), StatsError> {
        let values = self.sample.coerced_values()?;
        Ok((mean_of(&values), sample_std_of(&values)))
    }

    fn interval_around(
        &self,
        mean: f64,
        std_dev: f64,
        confidence: f64,
    ) -> Result<ConfidenceInterval, StatsError> {
        let n = self.sample.observed_count() as f64;
        let critical = student_t_critical(confidence, n - 1.0)?;
        let standard_error = std_dev / n.sqrt();
        let margin = critical * standard_error;
        Ok(ConfidenceInterval::new(mean - margin, mean + margin))
    }

    /// Confidence interval for the population mean, using the Student-t
    /// distribution with n−1 degrees of freedom.
    ///
    /// Observations are coerced to numbers first, so numeric labels like
    /// `"3.5"` participate; a label that cannot be read as a number fails
    /// with [`StatsError::Conversion`].
    pub fn mean_confidence_interval(
        &self,
        confidence: f64,
    ) -> Result<ConfidenceInterval, StatsError> {
        let (mean, std_dev) = self.coerced_mean_and_std()?;
        self.interval_around(mean, std_dev, confidence)
    }

    /// Confidence interval for the population proportion of observations
    /// equal to `success`, using the Normal approximation.
    ///
    /// Works on categorical and numeric samples alike; missing
    /// observations never match. The bounds are **not** clamped to
    /// `[0, 1]`: for small samples or extreme proportions the interval can
    /// exceed the natural range, and callers are expected to know that.
    pub fn proportion_confidence_interval(
        &self,
        success: impl Into<Observation>,
        confidence: f64,
    ) -> Result<ConfidenceInterval, StatsError> {
        let success = success.into();
        let n = self.sample.observed_count() as f64;
        let successes = self.sample.iter().filter(|o| **o == success).count() as f64;
        let p_hat = successes / n;
        let q_hat = 1.0 - p_hat;
        let critical = normal_critical(confidence)?;
        let standard_error = (p_hat * q_hat / n).sqrt();
        let margin = critical * standard_error;
        Ok(ConfidenceInterval::new(p_hat - margin, p_hat + margin))
    }

    fn mean_report(&self) -> MeanReport {
        let (mean, std_dev) = match self.coerced_mean_and_std() {
            Ok(pair) => pair,
            Err(StatsError::Conversion { .. } | StatsError::NonNumeric { .. }) => {
                return MeanReport::NotApplicable;
            }
            Err(other) => return MeanReport::Failed(other.to_string()),
        };
        match self.interval_around(mean, std_dev, DEFAULT_CONFIDENCE) {
            Ok(interval) => MeanReport::Computed { mean, interval },
            Err(other) => MeanReport::Failed(other.to_string()),
        }
    }
}

/// Outcome of the default-confidence mean interval, with conversion
/// failures kept apart from every other failure. The two branches produce
/// differently shaped summary entries and that asymmetry is part of the
/// documented contract.
enum MeanReport {
    Computed { mean: f64, interval: ConfidenceInterval },
    NotApplicable,
    Failed(String),
}

impl Summarize for Inference {
    /// Key inference metrics as a partial result: the observation count is
    /// always present, and a failed mean interval is recorded in-band as a
    /// text marker instead of propagating.
    fn summary(&self) -> Result<Vec<SummaryEntry>, StatsError> {
        let mut entries = vec![SummaryEntry::new(
            "count",
            SummaryValue::Count(self.sample.observed_count()),
        )];
        match self.mean_report() {
            MeanReport::Computed { mean, interval } => {
                entries.push(SummaryEntry::new("sample_mean", SummaryValue::Scalar(mean)));
                entries.push(SummaryEntry::new(
                    format!("mean_ci_{:.0}%", DEFAULT_CONFIDENCE * 100.0),
                    SummaryValue::Interval(interval),
                ));
            }
            MeanReport::NotApplicable => entries.push(SummaryEntry::new(
                "mean_ci",
                SummaryValue::Text("not applicable (non-numeric data)".to_string()),
            )),
            MeanReport::Failed(message) => entries.push(SummaryEntry::new(
                "mean_ci",
                SummaryValue::Text(format!("computation failed: {message}")),
            )),
        }
        Ok(entries)
    }
}

impl fmt::Display for Inference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistical inference (n={})", self.sample.observed_count())?;
        writeln!(f, "{}", "-".repeat(30))?;
        match self.mean_report() {
            MeanReport::Computed { mean, interval } => {
                writeln!(f, "Sample mean: {mean:.4}")?;
                writeln!(
                    f,
                    "Mean CI ({:.0}%): {interval}",
                    DEFAULT_CONFIDENCE * 100.0
                )?;
            }
            MeanReport::NotApplicable => {
                writeln!(f, "Mean CI: not applicable (non-numeric data)")?;
            }
            MeanReport::Failed(message) => {
                writeln!(f, "Mean CI: computation failed: {message}")?;
            }
        }
        writeln!(f, "{}", "-".repeat(30))?;
        write!(
            f,
            "Use proportion_confidence_interval(success, confidence) for a population proportion."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::samples;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn requires_two_observed_values() {
        let err = Inference::from_values([7.0]).unwrap_err();
        assert_eq!(
            err,
            StatsError::InsufficientObservations {
                required: 2,
                actual: 1
            }
        );

        // A second slot that is missing does not help.
        let err = Inference::new(samples::with_missing(&[Some(7.0), None])).unwrap_err();
        assert_eq!(
            err,
            StatsError::InsufficientObservations {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn mean_interval_matches_hand_computation() {
        // mean 5.0, variance 32/7, t(0.975, df=7) = 2.364624
        let inference =
            Inference::from_values([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        let interval = inference.mean_confidence_interval(0.95).unwrap();
        assert!(approx_eq(interval.lower, 3.2125, 1e-3));
        assert!(approx_eq(interval.upper, 6.7875, 1e-3));
        assert!(approx_eq(interval.lower + interval.upper, 10.0, 1e-6));
    }

    #[test]
    fn mean_interval_collapses_for_identical_values() {
        let inference = Inference::from_values([4.2, 4.2, 4.2, 4.2]).unwrap();
        let interval = inference.mean_confidence_interval(0.95).unwrap();
        assert!(approx_eq(interval.lower, 4.2, EPS));
        assert!(approx_eq(interval.upper, 4.2, EPS));
        assert!(approx_eq(interval.width(), 0.0, EPS));
    }

    #[test]
    fn higher_confidence_widens_the_interval() {
        let inference =
            Inference::from_values([12.0, 15.0, 11.0, 14.0, 13.0, 16.0, 12.0, 14.0]).unwrap();
        let narrow = inference.mean_confidence_interval(0.95).unwrap();
        let wide = inference.mean_confidence_interval(0.99).unwrap();
        assert!(wide.width() > narrow.width());
    }

    #[test]
    fn mean_interval_accepts_numeric_labels() {
        let inference = Inference::from_values(["1.0", "2.0", "3.0"]).unwrap();
        let interval = inference.mean_confidence_interval(0.95).unwrap();
        assert!(approx_eq(interval.lower + interval.upper, 4.0, 1e-9));
    }

    #[test]
    fn mean_interval_rejects_non_numeric_data() {
        let inference = Inference::new(samples::categorical(&["red", "blue"])).unwrap();
        assert!(matches!(
            inference.mean_confidence_interval(0.95).unwrap_err(),
            StatsError::Conversion { .. }
        ));
    }

    #[test]
    fn proportion_interval_matches_hand_computation() {
        // 6 successes out of 10: p = 0.6, se = sqrt(0.024), z = 1.959964
        let inference = Inference::from_values([
            "f", "f", "f", "f", "f", "f", "m", "m", "m", "m",
        ])
        .unwrap();
        let interval = inference.proportion_confidence_interval("f", 0.95).unwrap();
        assert!(approx_eq(interval.lower, 0.2964, 1e-3));
        assert!(approx_eq(interval.upper, 0.9036, 1e-3));
    }

    #[test]
    fn proportion_interval_of_unanimous_sample_is_a_point() {
        let inference = Inference::from_values(["yes", "yes", "yes"]).unwrap();
        let interval = inference.proportion_confidence_interval("yes", 0.95).unwrap();
        assert!(approx_eq(interval.lower, 1.0, EPS));
        assert!(approx_eq(interval.upper, 1.0, EPS));
    }

    #[test]
    fn proportion_interval_may_exceed_natural_bounds() {
        // 9 of 10 successes at 99%: upper bound passes 1, by design.
        let mut values = vec!["s"; 9];
        values.push("t");
        let inference = Inference::from_values(values).unwrap();
        let interval = inference.proportion_confidence_interval("s", 0.99).unwrap();
        assert!(interval.upper > 1.0);
    }

    #[test]
    fn proportion_interval_works_on_numeric_samples() {
        let inference = Inference::from_values([1.0, 1.0, 0.0, 1.0]).unwrap();
        let interval = inference.proportion_confidence_interval(1.0, 0.95).unwrap();
        assert!(interval.lower < 0.75 && 0.75 < interval.upper);
    }

    #[test]
    fn summary_of_numeric_sample_reports_mean_interval() {
        let inference = Inference::from_values([1.0, 2.0, 3.0, 4.0]).unwrap();
        let entries = inference.summary().unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["count", "sample_mean", "mean_ci_95%"]);
        assert_eq!(entries[0].value, SummaryValue::Count(4));
        assert_eq!(entries[1].value, SummaryValue::Scalar(2.5));
    }

    #[test]
    fn summary_of_categorical_sample_marks_not_applicable() {
        let inference = Inference::new(samples::categorical(&["a", "b", "a"])).unwrap();
        let entries = inference.summary().unwrap();
        assert_eq!(entries[0].value, SummaryValue::Count(3));
        assert_eq!(entries[1].name, "mean_ci");
        assert_eq!(
            entries[1].value,
            SummaryValue::Text("not applicable (non-numeric data)".to_string())
        );
    }

    #[test]
    fn textual_report_formats_numeric_samples() {
        let inference = Inference::from_values([1.0, 2.0, 3.0, 4.0]).unwrap();
        let report = inference.to_string();
        assert!(report.contains("Statistical inference (n=4)"));
        assert!(report.contains("Sample mean: 2.5000"));
        assert!(report.contains("Mean CI (95%): ("));
        assert!(report.contains("proportion_confidence_interval"));
    }

    #[test]
    fn textual_report_never_fails_on_categorical_samples() {
        let inference = Inference::new(samples::categorical(&["x", "y"])).unwrap();
        let report = inference.to_string();
        assert!(report.contains("not applicable (non-numeric data)"));
        assert!(report.contains("proportion_confidence_interval"));
    }
}
