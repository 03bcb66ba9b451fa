use crate::core::{Observation, Sample, StatsError};
use crate::descriptive::{FrequencyTable, Mode};
use crate::summary::entry::{SummaryEntry, SummaryValue};
use crate::summary::summarize::Summarize;

/// Frequency-oriented report over a categorical sample.
///
/// Needs no numeric data at all, so it also works on numeric samples
/// treated as labels.
pub struct CategoricalAnalysis {
    sample: Sample,
}

impl CategoricalAnalysis {
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

impl Summarize for CategoricalAnalysis {
    fn summary(&self) -> Result<Vec<SummaryEntry>, StatsError> {
        let table = FrequencyTable::tally(self.sample.iter());
        let mut entries = vec![
            SummaryEntry::new("count", SummaryValue::Count(self.sample.len())),
            SummaryEntry::new(
                "observed",
                SummaryValue::Count(self.sample.observed_count()),
            ),
            SummaryEntry::new("distinct_values", SummaryValue::Count(table.len())),
        ];
        entries.push(match self.sample.mode() {
            Mode::None => SummaryEntry::new("mode", SummaryValue::Text("none".to_string())),
            Mode::Unique(value) => SummaryEntry::new("mode", SummaryValue::Value(value)),
            Mode::Tied(values) => SummaryEntry::new("mode", SummaryValue::Values(values)),
        });
        for (observation, count) in table.iter() {
            entries.push(SummaryEntry::new(
                format!("freq[{observation}]"),
                SummaryValue::Count(count),
            ));
        }
        Ok(entries)
    }
}
