//! Output types of the aggregation engine.
//!
//! Plain serializable values with no behaviour beyond simple accessors.

use serde::{Deserialize, Serialize};

/// Direction of a single change statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// One final change line with its classified trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedChange {
    pub text: String,
    pub trend: Trend,
}

/// All aggregated changes for one sub-component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubComponentSummary {
    pub title: String,
    pub icon: Option<String>,
    pub changes: Vec<AggregatedChange>,
}

/// Buff / nerf / neutral counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrendTally {
    pub up: u32,
    pub down: u32,
    pub neutral: u32,
}

impl TrendTally {
    pub fn record(&mut self, trend: Trend) {
        match trend {
            Trend::Up => self.up += 1,
            Trend::Down => self.down += 1,
            Trend::Neutral => self.neutral += 1,
        }
    }

    /// Net balance, buffs minus nerfs
    pub fn score(&self) -> i64 {
        i64::from(self.up) - i64::from(self.down)
    }
}

/// The engine's top-level output for one entity
///
/// Groups appear in the order their sub-component was first seen in the
/// chronological walk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntitySummary {
    pub groups: Vec<SubComponentSummary>,
}

impl EntitySummary {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Find a group by its title
    pub fn group(&self, title: &str) -> Option<&SubComponentSummary> {
        self.groups.iter().find(|g| g.title == title)
    }

    /// Trend counts across every group
    pub fn tally(&self) -> TrendTally {
        self.groups
            .iter()
            .flat_map(|g| g.changes.iter())
            .fold(TrendTally::default(), |mut tally, change| {
                tally.record(change.trend);
                tally
            })
    }
}
