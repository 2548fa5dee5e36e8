//! Tier list: per-entity buff / nerf tallies across recent patches.
//!
//! Every raw change line counts once; no chain merging happens here, so an
//! entity touched in many patches weighs more than one touched once.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use crate::model::{PatchCategory, PatchSnapshot, Trend};
use crate::trend::classify_trend;
use crate::version::ReleaseVersion;
use crate::{log_op_end, log_op_start};

/// Trend counts for one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierEntry {
    pub name: String,
    pub category: PatchCategory,
    pub buffs: u32,
    pub nerfs: u32,
    pub adjusted: u32,
    /// Last non-empty image seen, newest release winning
    pub icon_url: Option<String>,
}

impl TierEntry {
    fn new(name: &str, category: PatchCategory) -> Self {
        Self {
            name: name.to_string(),
            category,
            buffs: 0,
            nerfs: 0,
            adjusted: 0,
            icon_url: None,
        }
    }

    /// Buffs minus nerfs
    pub fn score(&self) -> i64 {
        i64::from(self.buffs) - i64::from(self.nerfs)
    }
}

/// Build the tier list from a set of patches
///
/// Entries are keyed by (note title, category) and sorted by score
/// descending, then buffs descending, nerfs ascending and name ascending.
pub fn tier_list(patches: &[PatchSnapshot]) -> Vec<TierEntry> {
    let started = Instant::now();
    log_op_start!("tier_list", patch_count = patches.len() as u64);

    let mut ordered: Vec<&PatchSnapshot> = patches.iter().collect();
    ordered.sort_by_key(|p| ReleaseVersion::parse(&p.version));

    let mut order: Vec<(String, PatchCategory)> = Vec::new();
    let mut entries: HashMap<(String, PatchCategory), TierEntry> = HashMap::new();

    for note in ordered.iter().flat_map(|p| p.patch_notes.iter()) {
        let key = (note.title.clone(), note.category);
        let entry = entries.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            TierEntry::new(&note.title, note.category)
        });

        if let Some(icon) = note.image_url.as_deref().filter(|i| !i.trim().is_empty()) {
            entry.icon_url = Some(icon.to_string());
        }

        for change in note.details.iter().flat_map(|b| b.changes.iter()) {
            match classify_trend(change) {
                Trend::Up => entry.buffs += 1,
                Trend::Down => entry.nerfs += 1,
                Trend::Neutral => entry.adjusted += 1,
            }
        }
    }

    let mut list: Vec<TierEntry> = order
        .into_iter()
        .filter_map(|key| entries.remove(&key))
        .collect();
    list.sort_by(|a, b| {
        b.score()
            .cmp(&a.score())
            .then_with(|| b.buffs.cmp(&a.buffs))
            .then_with(|| a.nerfs.cmp(&b.nerfs))
            .then_with(|| a.name.cmp(&b.name))
    });

    log_op_end!(
        "tier_list",
        duration_ms = started.elapsed().as_millis() as u64,
        entity_count = list.len() as u64
    );
    list
}

/// Distinct note titles of one category across patches, sorted
pub fn changed_titles(patches: &[PatchSnapshot], category: PatchCategory) -> Vec<String> {
    patches
        .iter()
        .flat_map(|p| p.patch_notes.iter())
        .filter(|n| n.category == category)
        .map(|n| n.title.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Identity of a patch set: every version with its fetch time
pub fn patch_signature(patches: &[PatchSnapshot]) -> String {
    patches
        .iter()
        .map(|p| {
            format!(
                "{}|{};",
                p.version,
                p.fetched_at.to_rfc3339_opts(SecondsFormat::Millis, true)
            )
        })
        .collect()
}

/// Memoizes [`tier_list`] on the patch set signature
#[derive(Debug, Default)]
pub struct TierListCache {
    cached: Option<(String, Vec<TierEntry>)>,
}

impl TierListCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached list when the patch set is unchanged, otherwise
    /// recompute and cache it
    pub fn get_or_compute(&mut self, patches: &[PatchSnapshot]) -> Vec<TierEntry> {
        let signature = patch_signature(patches);
        if let Some((cached_sig, list)) = &self.cached {
            if *cached_sig == signature {
                tracing::debug!("tier list cache hit");
                return list.clone();
            }
        }
        let list = tier_list(patches);
        self.cached = Some((signature, list.clone()));
        list
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn is_warm(&self) -> bool {
        self.cached.is_some()
    }
}
