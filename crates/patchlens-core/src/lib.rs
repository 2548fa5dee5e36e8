//! PatchLens Core - patch note change aggregation and trend classification
//!
//! Given an entity's (champion, rune, item) free-text patch notes across
//! many releases, this crate:
//! - groups change lines by the sub-component they describe
//! - collapses repeated edits of one stat into a single net transition
//! - deduplicates textual changes
//! - classifies every resulting line as a buff, nerf or neutral change
//!
//! The engine is pure and synchronous. Retrieval of patch text sits behind
//! the [`history::HistorySource`] trait.

pub mod aggregate;
pub mod chain;
pub mod config;
pub mod errors;
pub mod history;
pub mod logging_facility;
pub mod model;
pub mod tier;
pub mod trend;
pub mod version;

#[doc(hidden)]
pub use patchlens_core_types;

// Re-export commonly used types
pub use aggregate::{aggregate, aggregate_with, AggregateOptions, IconPolicy};
pub use chain::merge_chains;
pub use config::EngineConfig;
pub use errors::{ExError, ExErrorKind, PatchLensError};
pub use history::{summarize, HistorySource, MemoryHistorySource};
pub use model::{EntitySummary, HistoryEntry, Trend};
pub use tier::{tier_list, TierEntry, TierListCache};
pub use trend::classify_trend;
pub use version::compare_releases;
