use crate::core::{Observation, Sample, StatsError};
use crate::summary::entry::{SummaryEntry, SummaryValue};
use crate::summary::summarize::Summarize;

/// Descriptive report over a numeric sample.
///
/// Unlike the inferential summary, numeric-type failures propagate: asking
/// for a quantitative report over category labels is a caller error.
pub struct QuantitativeAnalysis {
    sample: Sample,
}

impl QuantitativeAnalysis {
    pub fn new(sample: Sample) -> Self {
        Self { sample }
    }

    pub fn from_values<T, I>(values: I) -> Result<Self, StatsError>
    where
        T: Into<Observation>,
        I: IntoIterator<Item = T>,
    {
        Ok(Self::new(Sample::from_values(values)?))
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }
}

impl Summarize for QuantitativeAnalysis {
    fn summary(&self) -> Result<Vec<SummaryEntry>, StatsError> {
        Ok(vec![
            SummaryEntry::new("count", SummaryValue::Count(self.sample.len())),
            SummaryEntry::new("sum", SummaryValue::Scalar(self.sample.sum()?)),
            SummaryEntry::new("mean", SummaryValue::Scalar(self.sample.mean()?)),
            SummaryEntry::new("median", SummaryValue::Scalar(self.sample.median()?)),
            SummaryEntry::new("variance", SummaryValue::Scalar(self.sample.variance()?)),
            SummaryEntry::new("std_dev", SummaryValue::Scalar(self.sample.std_dev()?)),
            SummaryEntry::new("range", SummaryValue::Scalar(self.sample.range()?)),
            SummaryEntry::new(
                "coefficient_of_variation",
                SummaryValue::Scalar(self.sample.coefficient_of_variation()?),
            ),
        ])
    }
}
