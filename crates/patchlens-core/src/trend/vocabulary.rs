use serde::{Deserialize, Serialize};

/// Keyword families driving trend classification
///
/// Matching is case-insensitive substring search. The default carries
/// English and Russian vocabulary, since patch notes are published in both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendVocabulary {
    /// Phrases meaning a negative effect was lifted; always a buff.
    /// Checked before `removal`.
    pub removal_exceptions: Vec<String>,

    /// Removal or cessation of an effect; a nerf
    pub removal: Vec<String>,

    /// Stats where a lower number is better
    pub inverse: Vec<String>,

    /// Fallback buff keywords
    pub buff: Vec<String>,

    /// Fallback nerf keywords
    pub nerf: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for TrendVocabulary {
    fn default() -> Self {
        Self {
            removal_exceptions: words(&["no longer reduced", "больше не уменьшается"]),
            removal: words(&["removed", "удалено", "no longer", "больше не"]),
            inverse: words(&[
                "cooldown",
                "перезарядка",
                "cost",
                "стоимость",
                "затраты",
                "mana",
                "маны",
                "energy",
                "энергии",
                "time",
                "время",
            ]),
            buff: words(&[
                "increased",
                "buffed",
                "new effect",
                "увеличен",
                "усилен",
                "новый эффект",
            ]),
            nerf: words(&[
                "decreased",
                "nerfed",
                "removed",
                "уменьшен",
                "ослаблен",
                "удалено",
            ]),
        }
    }
}

impl TrendVocabulary {
    /// Lower-case every keyword so lookups can compare against a
    /// lower-cased line directly.
    pub fn normalized(mut self) -> Self {
        for list in [
            &mut self.removal_exceptions,
            &mut self.removal,
            &mut self.inverse,
            &mut self.buff,
            &mut self.nerf,
        ] {
            list.retain(|w| !w.trim().is_empty());
            for word in list.iter_mut() {
                *word = word.to_lowercase();
            }
        }
        self
    }
}

/// True if the lower-cased `haystack` contains any of `words`
pub(crate) fn contains_any(haystack: &str, words: &[String]) -> bool {
    words.iter().any(|w| haystack.contains(w.as_str()))
}
