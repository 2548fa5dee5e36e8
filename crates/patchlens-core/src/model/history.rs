use serde::{Deserialize, Serialize};

use super::patch::ChangeBlock;

/// One release's worth of changes for a single entity
///
/// This is the record the history ingestion boundary hands to the
/// aggregation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Dotted release identifier
    #[serde(alias = "patch_version")]
    pub release: String,

    /// Sub-component blocks in note order
    #[serde(default)]
    pub blocks: Vec<ChangeBlock>,
}

impl HistoryEntry {
    pub fn new(release: impl Into<String>, blocks: Vec<ChangeBlock>) -> Self {
        Self {
            release: release.into(),
            blocks,
        }
    }
}

/// A single free-text statement describing one edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLine {
    pub text: String,

    /// Owning release identifier
    pub release: String,

    /// Resolved group title the line was filed under
    pub title: String,
}

impl ChangeLine {
    pub fn new(
        text: impl Into<String>,
        release: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            release: release.into(),
            title: title.into(),
        }
    }
}
