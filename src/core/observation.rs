use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::core::error::StatsError;

/// A single observation in a sample: a number, a category label, or a
/// missing value.
///
/// Numeric `NaN` is the wire encoding of a missing value; [`Sample`]
/// construction normalizes `Numeric(NaN)` into `Missing`, so equality and
/// hashing only ever see well-behaved numeric payloads.
///
/// [`Sample`]: crate::core::Sample
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Observation {
    Numeric(f64),
    Category(String),
    Missing,
}

impl Observation {
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Observation::Missing)
    }

    /// Coerces the observation into a number.
    ///
    /// Category labels are parsed, so `"3.5"` passes while `"blue"` fails
    /// with [`StatsError::Conversion`]. Missing values coerce to `NaN`.
    pub fn to_numeric(&self) -> Result<f64, StatsError> {
        match self {
            Observation::Numeric(x) => Ok(*x),
            Observation::Missing => Ok(f64::NAN),
            Observation::Category(label) => {
                label
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| StatsError::Conversion {
                        value: label.clone(),
                    })
            }
        }
    }
}

impl Eq for Observation {}

impl Hash for Observation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Observation::Numeric(x) => {
                state.write_u8(0);
                // -0.0 and 0.0 compare equal, so they must hash equal too.
                let canonical = if *x == 0.0 { 0.0f64 } else { *x };
                state.write_u64(canonical.to_bits());
            }
            Observation::Category(label) => {
                state.write_u8(1);
                label.hash(state);
            }
            Observation::Missing => state.write_u8(2),
        }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observation::Numeric(x) => write!(f, "{x}"),
            Observation::Category(label) => write!(f, "{label}"),
            Observation::Missing => write!(f, "?"),
        }
    }
}

impl From<f64> for Observation {
    fn from(value: f64) -> Self {
        Observation::Numeric(value)
    }
}

impl From<i64> for Observation {
    fn from(value: i64) -> Self {
        Observation::Numeric(value as f64)
    }
}

impl From<i32> for Observation {
    fn from(value: i32) -> Self {
        Observation::Numeric(f64::from(value))
    }
}

impl From<&str> for Observation {
    fn from(value: &str) -> Self {
        Observation::Category(value.to_string())
    }
}

impl From<String> for Observation {
    fn from(value: String) -> Self {
        Observation::Category(value)
    }
}

impl<T: Into<Observation>> From<Option<T>> for Observation {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Observation::Missing,
        }
    }
}
