pub mod history;
pub mod patch;
pub mod summary;

pub use history::{ChangeLine, HistoryEntry};
pub use patch::{ChangeBlock, EntityKind, PatchCategory, PatchNoteEntry, PatchSnapshot};
pub use summary::{AggregatedChange, EntitySummary, SubComponentSummary, Trend, TrendTally};
