//! Change aggregation engine.
//!
//! Turns an entity's per-release change blocks into one [`EntitySummary`]:
//! lines are grouped by sub-component, stat edits are merged into net
//! chains, textual lines are deduplicated and every resulting line is
//! classified as a buff, nerf or neutral adjustment.
//!
//! ## Entry point
//!
//! ```
//! use patchlens_core::aggregate::aggregate;
//! use patchlens_core::model::{ChangeBlock, HistoryEntry, Trend};
//!
//! let history = vec![
//!     HistoryEntry::new("14.2", vec![ChangeBlock::new(Some("Q"), &["Damage: 15 → 20"])]),
//!     HistoryEntry::new("14.1", vec![ChangeBlock::new(Some("Q"), &["Damage: 10 → 15"])]),
//! ];
//! let summary = aggregate(&history);
//! let q = summary.group("Q").unwrap();
//! assert_eq!(q.changes[0].text, "Damage: 10 → 20");
//! assert_eq!(q.changes[0].trend, Trend::Up);
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: no shared state; identical input yields identical output.
//! - **Total**: never fails. Bad releases order as `0`, unparseable lines
//!   pass through verbatim.
//!
//! [`EntitySummary`]: crate::model::EntitySummary

pub mod engine;
pub mod options;

pub use engine::{aggregate, aggregate_with};
pub use options::{AggregateOptions, IconPolicy, DEFAULT_GROUP_TITLE};
