//! Aggregation computation.
//!
//! The walk is a fold over the release-sorted history into a local
//! accumulator, so nothing outlives a single call.

use std::collections::HashMap;
use std::time::Instant;

use super::options::{AggregateOptions, IconPolicy};
use crate::chain::merge_chains;
use crate::model::{
    AggregatedChange, ChangeBlock, ChangeLine, EntitySummary, HistoryEntry, SubComponentSummary,
};
use crate::trend::{classify_trend_with, TrendVocabulary};
use crate::version::ReleaseVersion;
use crate::{log_op_end, log_op_start};

/// Aggregate an entity history with default options
pub fn aggregate(history: &[HistoryEntry]) -> EntitySummary {
    aggregate_with(history, &AggregateOptions::default())
}

/// Aggregate an entity history
///
/// The input need not be sorted; releases are ordered numerically here and
/// entries with equal releases keep their input order.
pub fn aggregate_with(history: &[HistoryEntry], options: &AggregateOptions) -> EntitySummary {
    let started = Instant::now();
    log_op_start!("aggregate", release_count = history.len() as u64);

    let vocabulary = options.vocabulary.clone().normalized();

    let mut ordered: Vec<(ReleaseVersion, &HistoryEntry)> = history
        .iter()
        .map(|entry| (ReleaseVersion::parse(&entry.release), entry))
        .collect();
    ordered.sort_by(|a, b| a.0.cmp(&b.0));

    let groups = ordered
        .iter()
        .flat_map(|(_, entry)| {
            entry
                .blocks
                .iter()
                .map(move |block| (entry.release.as_str(), block))
        })
        .fold(GroupAccumulator::default(), |acc, (release, block)| {
            acc.push(release, block, options)
        })
        .finish(&vocabulary);

    let summary = EntitySummary { groups };

    log_op_end!(
        "aggregate",
        duration_ms = started.elapsed().as_millis() as u64,
        group_count = summary.groups.len() as u64
    );
    summary
}

struct GroupDraft {
    title: String,
    icon: Option<String>,
    lines: Vec<ChangeLine>,
}

#[derive(Default)]
struct GroupAccumulator {
    drafts: Vec<GroupDraft>,
    index: HashMap<String, usize>,
}

impl GroupAccumulator {
    fn push(mut self, release: &str, block: &ChangeBlock, options: &AggregateOptions) -> Self {
        let title = resolve_title(block, &options.default_title);
        let idx = match self.index.get(&title) {
            Some(&idx) => idx,
            None => {
                self.index.insert(title.clone(), self.drafts.len());
                self.drafts.push(GroupDraft {
                    title: title.clone(),
                    icon: None,
                    lines: Vec::new(),
                });
                self.drafts.len() - 1
            }
        };

        let draft = &mut self.drafts[idx];
        if let Some(icon) = block.icon_url.as_deref().filter(|i| !i.trim().is_empty()) {
            match options.icon_policy {
                IconPolicy::FirstSeen => {
                    draft.icon.get_or_insert_with(|| icon.to_string());
                }
                IconPolicy::LastSeen => draft.icon = Some(icon.to_string()),
            }
        }

        draft.lines.extend(
            block
                .changes
                .iter()
                .filter(|text| !text.trim().is_empty())
                .map(|text| ChangeLine::new(text.clone(), release, title.as_str())),
        );
        self
    }

    fn finish(self, vocabulary: &TrendVocabulary) -> Vec<SubComponentSummary> {
        self.drafts
            .into_iter()
            .filter_map(|draft| {
                let changes: Vec<AggregatedChange> = merge_chains(&draft.lines)
                    .lines()
                    .into_iter()
                    .map(|text| AggregatedChange {
                        trend: classify_trend_with(vocabulary, &text),
                        text,
                    })
                    .collect();
                if changes.is_empty() {
                    tracing::debug!(group = %draft.title, "dropping group without changes");
                    return None;
                }
                Some(SubComponentSummary {
                    title: draft.title,
                    icon: draft.icon,
                    changes,
                })
            })
            .collect()
    }
}

fn resolve_title(block: &ChangeBlock, default_title: &str) -> String {
    block
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(default_title)
        .to_string()
}
