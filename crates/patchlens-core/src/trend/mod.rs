//! Line classifier: up / down / neutral trend of one change statement.

pub mod classifier;
pub mod vocabulary;

pub use classifier::{classify_trend, classify_trend_with, sum_numbers};
pub use vocabulary::TrendVocabulary;
