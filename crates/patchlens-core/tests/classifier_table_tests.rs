//! Table-driven checks of line trend classification.

use patchlens_core::model::Trend;
use patchlens_core::trend::{classify_trend, classify_trend_with, TrendVocabulary};

#[test]
fn classification_table() {
    let cases = [
        // numeric, normal stats
        ("Damage: 10 → 8", Trend::Down),
        ("Damage: 60 → 70", Trend::Up),
        ("Attack range 500 -> 525", Trend::Up),
        ("Health per level: 104 ⇒ 99", Trend::Down),
        // numeric, inverse stats
        ("Cooldown: 10 → 8", Trend::Up),
        ("Energy cost: 50 → 40", Trend::Up),
        ("Cast time: 0.25 → 0.5", Trend::Down),
        ("Total cost: 3000 → 3100", Trend::Down),
        // removal
        ("Slow no longer reduced by tenacity", Trend::Up),
        ("No longer applies grievous wounds", Trend::Down),
        ("Bonus movement speed removed", Trend::Down),
        // keywords
        ("Shield duration increased", Trend::Up),
        ("Heal nerfed", Trend::Down),
        ("New effect: gains a stack on hit", Trend::Up),
        // neutral
        ("Updated tooltip", Trend::Neutral),
        ("Targeting: unit → location", Trend::Neutral),
    ];

    for (line, expected) in cases {
        assert_eq!(classify_trend(line), expected, "line: {line}");
    }
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(classify_trend("COOLDOWN: 10 → 8"), Trend::Up);
    assert_eq!(classify_trend("Damage INCREASED"), Trend::Up);
    assert_eq!(classify_trend("SLOW NO LONGER REDUCED"), Trend::Up);
}

#[test]
fn one_sided_numbers_fall_back_to_keywords() {
    assert_eq!(classify_trend("Damage: none → 20, increased"), Trend::Up);
    assert_eq!(classify_trend("Damage: none → some"), Trend::Neutral);
}

#[test]
fn custom_vocabulary() {
    let vocab = TrendVocabulary {
        inverse: vec!["windup".to_string()],
        ..TrendVocabulary::default()
    }
    .normalized();
    assert_eq!(classify_trend_with(&vocab, "Windup: 0.3 → 0.25"), Trend::Up);
    // "cooldown" is no longer inverse under this vocabulary
    assert_eq!(classify_trend_with(&vocab, "Cooldown: 10 → 8"), Trend::Down);
}
