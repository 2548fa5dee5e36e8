use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sub-component block of a patch note: an ability, a stat block,
/// or the bare entity when `title` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChangeBlock {
    /// Ability name or "Base Stats"; None means top-level
    #[serde(default)]
    pub title: Option<String>,

    /// Opaque icon reference, passed through unchanged
    #[serde(default)]
    pub icon_url: Option<String>,

    /// Raw change lines in note order
    #[serde(default)]
    pub changes: Vec<String>,
}

impl ChangeBlock {
    pub fn new(title: Option<&str>, changes: &[&str]) -> Self {
        Self {
            title: title.map(str::to_string),
            icon_url: None,
            changes: changes.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn with_icon(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }
}

/// Category a patch note is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PatchCategory {
    Champions,
    Items,
    Runes,
    ItemsRunes,
    Modes,
    Skins,
    Systems,
    BugFixes,
    NewContent,
    Cosmetics,
    Unknown,
}

/// Kind of tracked entity
///
/// Only the history resolution boundary dispatches on this; the
/// aggregation engine is kind-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Champion,
    Item,
    Rune,
}

impl EntityKind {
    /// Whether notes filed under `category` can describe this kind
    pub fn accepts(&self, category: PatchCategory) -> bool {
        match self {
            EntityKind::Champion => category == PatchCategory::Champions,
            EntityKind::Item => matches!(category, PatchCategory::Items | PatchCategory::ItemsRunes),
            EntityKind::Rune => matches!(category, PatchCategory::Runes | PatchCategory::ItemsRunes),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Champion => "champion",
            EntityKind::Item => "item",
            EntityKind::Rune => "rune",
        }
    }
}

/// A single entity's entry within one release's notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchNoteEntry {
    /// Stable identifier (usually the English name)
    pub id: String,

    /// Display title
    pub title: String,

    #[serde(default)]
    pub image_url: Option<String>,

    pub category: PatchCategory,

    #[serde(default)]
    pub details: Vec<ChangeBlock>,
}

/// All notes published for one release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchSnapshot {
    /// Dotted release identifier, e.g. "14.3"
    pub version: String,

    pub fetched_at: DateTime<Utc>,

    #[serde(default)]
    pub patch_notes: Vec<PatchNoteEntry>,
}
