use serde_json::{Map, Value};

use crate::core::StatsError;
use crate::summary::entry::SummaryEntry;

/// Summary capability shared by every analysis over a sample.
///
/// Each concrete analysis (quantitative, categorical, inferential) decides
/// which metrics belong in its report; there is no default report, so a
/// new analysis type cannot compile without providing one.
pub trait Summarize {
    /// Returns the analysis's key metrics, in report order.
    fn summary(&self) -> Result<Vec<SummaryEntry>, StatsError>;
}

pub trait SummarizeExt {
    /// Renders [`Summarize::summary`] as a JSON object, preserving entry
    /// order.
    fn summary_json(&self) -> Result<Value, StatsError>;
}

impl<T: Summarize + ?Sized> SummarizeExt for T {
    fn summary_json(&self) -> Result<Value, StatsError> {
        let mut map = Map::new();
        for entry in self.summary()? {
            let value = serde_json::to_value(&entry.value).unwrap_or(Value::Null);
            map.insert(entry.name, value);
        }
        Ok(Value::Object(map))
    }
}
