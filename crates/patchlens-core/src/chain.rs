//! Stat chain merging.
//!
//! Collapses "Name: A → B" edits of the same stat across releases into one
//! net transition. The oldest start value is kept and the end value follows
//! the newest edit. Lines that do not look like a transition pass through
//! verbatim, deduplicated.
//!
//! ```
//! use patchlens_core::chain::merge_chains;
//! use patchlens_core::model::ChangeLine;
//!
//! let lines = vec![
//!     ChangeLine::new("Damage: 10 → 15", "14.1", "Q"),
//!     ChangeLine::new("Damage: 15 → 20", "14.2", "Q"),
//! ];
//! assert_eq!(merge_chains(&lines).lines(), vec!["Damage: 10 → 20".to_string()]);
//! ```

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::model::ChangeLine;
use crate::trend::classifier::{ARROW_ALTERNATION, NORMALIZED_ARROW};

static ARROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ARROW_ALTERNATION).expect("Invalid arrow regex"));

/// "Name: old → new"; the name runs up to the first colon
static COLON_FORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?P<name>[^:]+?)\s*:\s*(?P<old>.+?)\s*(?:{})\s*(?P<new>.+?)\s*$",
        ARROW_ALTERNATION
    ))
    .expect("Invalid colon form regex")
});

/// "Name old → new" where the old value starts with a number; the name is
/// the shortest prefix followed by whitespace and a numeric value
static NUMERIC_SPACE_FORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?P<name>.+?)\s+(?P<old>[-+]?[.,]?\d.*?)\s*(?:{})\s*(?P<new>.+?)\s*$",
        ARROW_ALTERNATION
    ))
    .expect("Invalid numeric space form regex")
});

/// "Name old → new" with a textual old value; the name is the first word
static PLAIN_SPACE_FORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?P<name>\S+)\s+(?P<old>.+?)\s*(?:{})\s*(?P<new>.+?)\s*$",
        ARROW_ALTERNATION
    ))
    .expect("Invalid plain space form regex")
});

/// How the stat name was separated from its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    Colon,
    Space,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Colon => ": ",
            Separator::Space => " ",
        }
    }
}

/// A parsed "name, old value, new value" statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTransition<'a> {
    pub name: &'a str,
    pub separator: Separator,
    pub old: &'a str,
    pub new: &'a str,
}

/// Match one line against the stat transition pattern
///
/// Tries the colon form first, then the numeric space form, then the plain
/// space form. Returns None when no form matches, when any part is empty,
/// or when a part contains a further arrow (multi-step lines).
pub fn parse_stat_line(line: &str) -> Option<StatTransition<'_>> {
    let forms: [(&Regex, Separator); 3] = [
        (&*COLON_FORM_RE, Separator::Colon),
        (&*NUMERIC_SPACE_FORM_RE, Separator::Space),
        (&*PLAIN_SPACE_FORM_RE, Separator::Space),
    ];
    forms
        .iter()
        .find_map(|(re, separator)| {
            re.captures(line)
                .and_then(|caps| transition(&caps, *separator))
        })
}

fn transition<'a>(caps: &Captures<'a>, separator: Separator) -> Option<StatTransition<'a>> {
    let name = caps.name("name")?.as_str().trim();
    let old = caps.name("old")?.as_str().trim();
    let new = caps.name("new")?.as_str().trim();
    let parts = [name, old, new];
    if parts.iter().any(|p| p.is_empty() || ARROW_RE.is_match(p)) {
        return None;
    }
    Some(StatTransition {
        name,
        separator,
        old,
        new,
    })
}

/// Net transition of one stat across every edit seen so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatChain {
    pub name: String,
    /// First observed "from" value; fixed once created
    pub start: String,
    /// Most recently observed "to" value
    pub end: String,
    /// Separator style of the first occurrence
    pub separator: Separator,
}

impl StatChain {
    /// Rebuild the statement with a normalized arrow
    pub fn render(&self) -> String {
        format!(
            "{}{}{} {} {}",
            self.name,
            self.separator.as_str(),
            self.start,
            NORMALIZED_ARROW,
            self.end
        )
    }
}

/// Result of merging one group's lines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainMerge {
    /// Chains in order of first sighting
    pub chains: Vec<StatChain>,
    /// Non-transition lines, deduplicated, in order of first appearance
    pub passthrough: Vec<String>,
}

impl ChainMerge {
    /// Look up a chain by stat name
    pub fn chain(&self, name: &str) -> Option<&StatChain> {
        self.chains.iter().find(|c| c.name == name)
    }

    /// Final output lines: rendered chains, then passthrough lines
    pub fn lines(&self) -> Vec<String> {
        self.chains
            .iter()
            .map(StatChain::render)
            .chain(self.passthrough.iter().cloned())
            .collect()
    }
}

#[derive(Default)]
struct MergeAccumulator {
    merge: ChainMerge,
    chain_index: HashMap<String, usize>,
    seen_passthrough: HashSet<String>,
}

impl MergeAccumulator {
    fn push(mut self, text: &str) -> Self {
        if text.trim().is_empty() {
            return self;
        }
        match parse_stat_line(text) {
            Some(t) => match self.chain_index.get(t.name) {
                Some(&idx) => {
                    tracing::trace!(stat = t.name, end = t.new, "extending stat chain");
                    self.merge.chains[idx].end = t.new.to_string();
                }
                None => {
                    self.chain_index
                        .insert(t.name.to_string(), self.merge.chains.len());
                    self.merge.chains.push(StatChain {
                        name: t.name.to_string(),
                        start: t.old.to_string(),
                        end: t.new.to_string(),
                        separator: t.separator,
                    });
                }
            },
            None => {
                if self.seen_passthrough.insert(text.to_string()) {
                    self.merge.passthrough.push(text.to_string());
                }
            }
        }
        self
    }
}

/// Merge chronologically ordered lines (oldest first) into net chains and
/// deduplicated passthrough lines
pub fn merge_chains(lines: &[ChangeLine]) -> ChainMerge {
    lines
        .iter()
        .fold(MergeAccumulator::default(), |acc, line| acc.push(&line.text))
        .merge
}
