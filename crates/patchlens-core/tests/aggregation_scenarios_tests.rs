//! End-to-end aggregation scenarios over in-memory histories.

use patchlens_core::aggregate::{aggregate, aggregate_with, AggregateOptions};
use patchlens_core::model::{ChangeBlock, EntitySummary, HistoryEntry, Trend};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn block(title: &str, changes: &[&str]) -> ChangeBlock {
    ChangeBlock::new(Some(title), changes)
}

fn entry(release: &str, blocks: Vec<ChangeBlock>) -> HistoryEntry {
    HistoryEntry::new(release, blocks)
}

fn texts(summary: &EntitySummary, title: &str) -> Vec<String> {
    summary
        .group(title)
        .map(|g| g.changes.iter().map(|c| c.text.clone()).collect())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn single_release_single_chain_is_kept_as_is() {
    let history = vec![entry("14.1", vec![block("Q", &["X: 10 → 20"])])];
    let summary = aggregate(&history);

    assert_eq!(summary.groups.len(), 1);
    let q = &summary.groups[0];
    assert_eq!(q.title, "Q");
    assert_eq!(q.changes.len(), 1);
    assert_eq!(q.changes[0].text, "X: 10 → 20");
    assert_eq!(q.changes[0].trend, Trend::Up);
}

#[test]
fn chain_across_releases_collapses_to_net_delta() {
    let history = vec![
        entry("14.1", vec![block("Q", &["X: 10 → 15"])]),
        entry("14.2", vec![block("Q", &["X: 15 → 20"])]),
    ];
    assert_eq!(texts(&aggregate(&history), "Q"), vec!["X: 10 → 20"]);
}

#[test]
fn chain_follows_release_order_not_input_order() {
    let history = vec![
        entry("10.1", vec![block("W", &["Cooldown: 12 → 10"])]),
        entry("9.1", vec![block("W", &["Cooldown: 14 → 12"])]),
    ];
    let summary = aggregate(&history);
    assert_eq!(texts(&summary, "W"), vec!["Cooldown: 14 → 10"]);
    assert_eq!(summary.groups[0].changes[0].trend, Trend::Up);
}

#[test]
fn five_incremental_edits_become_one_line() {
    let history: Vec<HistoryEntry> = (0..5)
        .map(|i| {
            let line = format!("Damage: {} -> {}", 100 + i * 10, 110 + i * 10);
            entry(&format!("14.{}", i + 1), vec![block("R", &[line.as_str()])])
        })
        .collect();
    assert_eq!(texts(&aggregate(&history), "R"), vec!["Damage: 100 → 150"]);
}

#[test]
fn passthrough_lines_dedup_across_releases() {
    let history = vec![
        entry("14.1", vec![block("E", &["Now also slows"])]),
        entry("14.2", vec![block("E", &["Now also slows", "Bug fixed"])]),
    ];
    assert_eq!(
        texts(&aggregate(&history), "E"),
        vec!["Now also slows", "Bug fixed"]
    );
}

#[test]
fn group_without_lines_is_dropped() {
    let history = vec![
        entry("14.1", vec![block("Passive", &[]), block("Q", &["X: 1 → 2"])]),
        entry("14.2", vec![block("Passive", &["", "   "])]),
    ];
    let summary = aggregate(&history);
    assert!(summary.group("Passive").is_none());
    assert_eq!(summary.groups.len(), 1);
}

#[test]
fn groups_keep_first_encounter_order() {
    let history = vec![
        entry("14.3", vec![block("R", &["Damage: 1 → 2"]), block("Q", &["Damage: 3 → 4"])]),
        entry("14.1", vec![block("Q", &["Damage: 1 → 3"])]),
        entry("14.2", vec![block("W", &["Range: 500 → 550"])]),
    ];
    let summary = aggregate(&history);
    let titles: Vec<&str> = summary
        .groups
        .iter()
        .map(|g| g.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Q", "W", "R"]);
}

#[test]
fn chains_are_scoped_per_group() {
    let history = vec![
        entry("14.1", vec![block("Q", &["Damage: 10 → 20"]), block("E", &["Damage: 50 → 40"])]),
        entry("14.2", vec![block("Q", &["Damage: 20 → 30"])]),
    ];
    let summary = aggregate(&history);
    assert_eq!(texts(&summary, "Q"), vec!["Damage: 10 → 30"]);
    assert_eq!(texts(&summary, "E"), vec!["Damage: 50 → 40"]);
    assert_eq!(summary.group("E").unwrap().changes[0].trend, Trend::Down);
}

#[test]
fn malformed_releases_sort_first() {
    let history = vec![
        entry("14.1", vec![block("Q", &["Damage: 20 → 30"])]),
        entry("unknown", vec![block("Q", &["Damage: 10 → 20"])]),
    ];
    assert_eq!(texts(&aggregate(&history), "Q"), vec!["Damage: 10 → 30"]);
}

#[test]
fn season_style_releases_keep_numeric_order() {
    let history = vec![
        entry("25.S1.2", vec![block("Q", &["Damage: 2 → 3"])]),
        entry("25.S1.1", vec![block("Q", &["Damage: 1 → 2"])]),
        entry("14.24", vec![block("Q", &["Damage: 0 → 1"])]),
    ];
    let summary = aggregate(&history);
    assert_eq!(texts(&summary, "Q"), vec!["Damage: 0 → 3"]);
    assert_eq!(summary.groups[0].changes[0].trend, Trend::Up);
}

#[test]
fn mixed_language_lines_are_classified() {
    let history = vec![entry(
        "14.1",
        vec![block(
            "Q",
            &[
                "Урон увеличен",
                "Стоимость маны: 50 → 40",
                "Эффект замедления удалено",
            ],
        )],
    )];
    let summary = aggregate(&history);
    let trends: Vec<(String, Trend)> = summary.groups[0]
        .changes
        .iter()
        .map(|c| (c.text.clone(), c.trend))
        .collect();
    assert_eq!(
        trends,
        vec![
            ("Стоимость маны: 50 → 40".to_string(), Trend::Up),
            ("Урон увеличен".to_string(), Trend::Up),
            ("Эффект замедления удалено".to_string(), Trend::Down),
        ]
    );
}

#[test]
fn summary_tally_and_json_shape() {
    let history = vec![entry(
        "14.1",
        vec![
            block("Q", &["Damage: 10 → 20", "Cooldown: 8 → 9"]),
            ChangeBlock::new(None, &["Now grants vision"]).with_icon("ahri.png"),
        ],
    )];
    let summary = aggregate_with(&history, &AggregateOptions::default());
    let tally = summary.tally();
    assert_eq!((tally.up, tally.down, tally.neutral), (1, 1, 1));

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["groups"][0]["changes"][1]["trend"], "down");
    assert_eq!(json["groups"][1]["title"], "General");
    assert_eq!(json["groups"][1]["icon"], "ahri.png");
}
