mod critical;
mod intervals;

pub use critical::{normal_critical, student_t_critical};
pub use intervals::{ConfidenceInterval, DEFAULT_CONFIDENCE, Inference};
