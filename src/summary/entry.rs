use std::fmt;

use serde::Serialize;

use crate::core::Observation;
use crate::inference::ConfidenceInterval;

/// One named metric in a summary report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub name: String,
    pub value: SummaryValue,
}

impl SummaryEntry {
    /// Convenience constructor
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: SummaryValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The value side of a summary entry.
///
/// Summaries mix counts, scalars, observation values, intervals, and
/// in-band failure markers, so a single float does not cover them.
/// Serialization is untagged: each variant renders as its natural JSON
/// shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SummaryValue {
    Count(usize),
    Scalar(f64),
    Value(Observation),
    Values(Vec<Observation>),
    Interval(ConfidenceInterval),
    Text(String),
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryValue::Count(n) => write!(f, "{n}"),
            SummaryValue::Scalar(v) => write!(f, "{v}"),
            SummaryValue::Value(o) => write!(f, "{o}"),
            SummaryValue::Values(observations) => {
                write!(f, "{{")?;
                for (i, o) in observations.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{o}")?;
                }
                write!(f, "}}")
            }
            SummaryValue::Interval(interval) => write!(f, "{interval}"),
            SummaryValue::Text(text) => write!(f, "{text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_each_variant() {
        assert_eq!(SummaryValue::Count(7).to_string(), "7");
        assert_eq!(SummaryValue::Scalar(2.5).to_string(), "2.5");
        assert_eq!(
            SummaryValue::Value(Observation::from("red")).to_string(),
            "red"
        );
        assert_eq!(
            SummaryValue::Values(vec![Observation::from(1), Observation::from(2)]).to_string(),
            "{1, 2}"
        );
        assert_eq!(
            SummaryValue::Interval(ConfidenceInterval::new(1.0, 2.0)).to_string(),
            "(1.0000, 2.0000)"
        );
        assert_eq!(SummaryValue::Text("n/a".to_string()).to_string(), "n/a");
    }

    #[test]
    fn serializes_to_natural_json_shapes() {
        let count = serde_json::to_value(SummaryValue::Count(3)).unwrap();
        assert_eq!(count, serde_json::json!(3));

        let interval =
            serde_json::to_value(SummaryValue::Interval(ConfidenceInterval::new(0.5, 1.5)))
                .unwrap();
        assert_eq!(interval, serde_json::json!({ "lower": 0.5, "upper": 1.5 }));

        let values = serde_json::to_value(SummaryValue::Values(vec![
            Observation::from(1),
            Observation::from("a"),
            Observation::Missing,
        ]))
        .unwrap();
        assert_eq!(values, serde_json::json!([1.0, "a", null]));
    }
}
