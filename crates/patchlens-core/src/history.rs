//! History ingestion boundary.
//!
//! [`HistorySource`] is the contract the aggregation engine consumes: given
//! an entity kind and name, return that entity's per-release entries.
//! Retrieval and storage live behind it. [`MemoryHistorySource`] resolves
//! histories from patch snapshots held in memory.

use std::time::Instant;

use crate::aggregate::{aggregate_with, AggregateOptions};
use crate::errors::{ExError, PatchLensError};
use crate::model::{EntityKind, EntitySummary, HistoryEntry, PatchSnapshot};
use crate::version::ReleaseVersion;
use crate::{log_op_end, log_op_error, log_op_start};

/// Supplies an entity's ordered change history
pub trait HistorySource {
    /// Entries for one entity, oldest release first
    ///
    /// An unknown entity yields an empty history, not an error.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an empty name; implementations backed by a
    /// remote store may return `ExternalService` or `Serialization`.
    fn history(&self, kind: EntityKind, name: &str) -> Result<Vec<HistoryEntry>, ExError>;
}

/// Resolve an entity's history and aggregate it
///
/// # Errors
///
/// Propagates the source's error; aggregation itself cannot fail.
pub fn summarize<S: HistorySource + ?Sized>(
    source: &S,
    kind: EntityKind,
    name: &str,
    options: &AggregateOptions,
) -> Result<EntitySummary, ExError> {
    let history = source
        .history(kind, name)
        .map_err(|e| e.with_op("summarize").with_entity(name))?;
    Ok(aggregate_with(&history, options))
}

/// In-memory history source over patch snapshots
#[derive(Debug, Clone, Default)]
pub struct MemoryHistorySource {
    patches: Vec<PatchSnapshot>,
}

impl MemoryHistorySource {
    pub fn new(patches: Vec<PatchSnapshot>) -> Self {
        let mut source = Self::default();
        for patch in patches {
            source.insert(patch);
        }
        source
    }

    /// Load a JSON array of patch snapshots
    ///
    /// # Errors
    ///
    /// `Serialization` when the payload is not a valid snapshot array.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ExError> {
        let patches: Vec<PatchSnapshot> = serde_json::from_slice(bytes).map_err(|e| {
            ExError::from(PatchLensError::MalformedSnapshots {
                reason: e.to_string(),
            })
            .with_op("load_snapshots")
        })?;
        Ok(Self::new(patches))
    }

    /// Add a patch, replacing any held patch with the same version
    pub fn insert(&mut self, patch: PatchSnapshot) {
        match self.patches.iter_mut().find(|p| p.version == patch.version) {
            Some(existing) => *existing = patch,
            None => self.patches.push(patch),
        }
    }

    pub fn patches(&self) -> &[PatchSnapshot] {
        &self.patches
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }
}

impl HistorySource for MemoryHistorySource {
    fn history(&self, kind: EntityKind, name: &str) -> Result<Vec<HistoryEntry>, ExError> {
        let started = Instant::now();
        log_op_start!("history", entity = name, entity_kind = kind.as_str());

        let search = name.trim().to_lowercase();
        if search.is_empty() {
            let err = ExError::from(PatchLensError::EmptyEntityName).with_op("history");
            log_op_error!(
                "history",
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            return Err(err);
        }

        let search = search.as_str();
        let mut entries: Vec<(ReleaseVersion, HistoryEntry)> = self
            .patches
            .iter()
            .flat_map(|patch| {
                patch
                    .patch_notes
                    .iter()
                    .filter(move |note| kind.accepts(note.category))
                    .filter(move |note| {
                        note.id.to_lowercase() == search || note.title.to_lowercase() == search
                    })
                    .map(move |note| {
                        (
                            ReleaseVersion::parse(&patch.version),
                            HistoryEntry::new(patch.version.clone(), note.details.clone()),
                        )
                    })
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        log_op_end!(
            "history",
            duration_ms = started.elapsed().as_millis() as u64,
            release_count = entries.len() as u64
        );
        Ok(entries.into_iter().map(|(_, entry)| entry).collect())
    }
}
