use serde::{Deserialize, Serialize};

use crate::trend::TrendVocabulary;

/// Group title used for blocks without a sub-component title
pub const DEFAULT_GROUP_TITLE: &str = "General";

/// Which icon a group keeps when several blocks supply one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconPolicy {
    /// Keep the icon of the oldest block that had one
    #[default]
    FirstSeen,
    /// Keep the icon of the newest block that had one
    LastSeen,
}

/// Tunables for [`aggregate_with`](super::aggregate_with)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateOptions {
    pub default_title: String,
    pub icon_policy: IconPolicy,
    pub vocabulary: TrendVocabulary,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_GROUP_TITLE.to_string(),
            icon_policy: IconPolicy::default(),
            vocabulary: TrendVocabulary::default(),
        }
    }
}
