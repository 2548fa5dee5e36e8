use regex::Regex;
use std::sync::LazyLock;

use super::vocabulary::{contains_any, TrendVocabulary};
use crate::model::Trend;

/// Arrow glyphs recognised between an old and a new value
pub(crate) const ARROW_ALTERNATION: &str = r"→|⇒|->";

/// Arrow used when rebuilding merged lines
pub(crate) const NORMALIZED_ARROW: &str = "→";

static ARROW_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\s*(?:{})\s*", ARROW_ALTERNATION)).expect("Invalid arrow regex")
});

/// Signed integers or decimals, with `.` or `,` as the decimal mark
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?\d+(?:[.,]\d+)?").expect("Invalid number regex"));

static DEFAULT_VOCABULARY: LazyLock<TrendVocabulary> =
    LazyLock::new(|| TrendVocabulary::default().normalized());

/// Classify one change line using the default vocabulary
pub fn classify_trend(line: &str) -> Trend {
    classify_trend_with(&DEFAULT_VOCABULARY, line)
}

/// Classify one change line
///
/// `vocab` must already be [`normalized`](TrendVocabulary::normalized).
/// First match wins:
/// 1. removal exception ("no longer reduced") → up
/// 2. removal ("removed", "no longer ...") → down
/// 3. exactly two arrow-separated parts with numbers on both sides: compare
///    the sums, inverted for cooldown / cost / time stats
/// 4. buff keywords → up, nerf keywords → down
/// 5. neutral
pub fn classify_trend_with(vocab: &TrendVocabulary, line: &str) -> Trend {
    let lower = line.to_lowercase();

    if contains_any(&lower, &vocab.removal_exceptions) {
        return Trend::Up;
    }
    if contains_any(&lower, &vocab.removal) {
        return Trend::Down;
    }

    let is_inverse = contains_any(&lower, &vocab.inverse);

    let parts: Vec<&str> = ARROW_SPLIT_RE.split(line).collect();
    if let [from, to] = parts.as_slice() {
        if let (Some(from), Some(to)) = (sum_numbers(from), sum_numbers(to)) {
            if to > from {
                return if is_inverse { Trend::Down } else { Trend::Up };
            }
            if to < from {
                return if is_inverse { Trend::Up } else { Trend::Down };
            }
        }
    }

    if contains_any(&lower, &vocab.buff) {
        return Trend::Up;
    }
    if contains_any(&lower, &vocab.nerf) {
        return Trend::Down;
    }

    Trend::Neutral
}

/// Sum every number in `text`
///
/// Multi-rank values ("60/70/80") are summed as a rough measure of total
/// power. Returns None when the text holds no number.
pub fn sum_numbers(text: &str) -> Option<f64> {
    let values: Vec<f64> = NUMBER_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum())
    }
}
