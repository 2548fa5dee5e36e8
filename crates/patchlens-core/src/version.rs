//! Release identifier ordering.
//!
//! Releases are dotted numeric strings ("9.1", "10.1", "14.3.1"). They are
//! compared segment by segment as integers, with missing trailing segments
//! treated as 0. A segment that is not a number reads as 0 on its own, so
//! "25.S1.2" orders as 25.0.2.

use std::cmp::Ordering;
use std::fmt;

/// A parsed dotted release identifier
#[derive(Debug, Clone, Default)]
pub struct ReleaseVersion {
    segments: Vec<u64>,
}

impl ReleaseVersion {
    /// Parse a dotted release identifier
    ///
    /// Never fails: non-numeric or empty segments read as 0, and empty
    /// input yields version `0`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        let mut malformed = false;
        let segments = trimmed
            .split('.')
            .map(|segment| {
                segment.trim().parse::<u64>().unwrap_or_else(|_| {
                    malformed = true;
                    0
                })
            })
            .collect();
        if malformed {
            tracing::debug!(release = raw, "non-numeric release segment, reading it as 0");
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    fn segment(&self, idx: usize) -> u64 {
        self.segments.get(idx).copied().unwrap_or(0)
    }
}

impl PartialEq for ReleaseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ReleaseVersion {}

impl PartialOrd for ReleaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReleaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        (0..len)
            .map(|idx| self.segment(idx).cmp(&other.segment(idx)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "0");
        }
        let parts: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Compare two raw release identifiers numerically
pub fn compare_releases(a: &str, b: &str) -> Ordering {
    ReleaseVersion::parse(a).cmp(&ReleaseVersion::parse(b))
}
