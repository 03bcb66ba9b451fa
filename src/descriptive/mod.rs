mod frequency;
mod statistics;

pub use frequency::{FrequencyTable, Mode};

pub(crate) use statistics::{mean_of, sample_std_of};
