mod categorical;
mod entry;
mod quantitative;
mod summarize;

pub use categorical::CategoricalAnalysis;
pub use entry::{SummaryEntry, SummaryValue};
pub use quantitative::QuantitativeAnalysis;
pub use summarize::{Summarize, SummarizeExt};
