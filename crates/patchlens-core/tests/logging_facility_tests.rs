#![allow(clippy::unwrap_used, clippy::expect_used)]

use patchlens_core::aggregate::aggregate;
use patchlens_core::errors::PatchLensError;
use patchlens_core::history::{HistorySource, MemoryHistorySource};
use patchlens_core::logging_facility::test_capture::init_test_capture;
use patchlens_core::model::{ChangeBlock, EntityKind, HistoryEntry};
use patchlens_core::{log_op_end, log_op_error, log_op_start};
use patchlens_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE, FIELD_GROUP_COUNT,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert!(starts >= 1, "Should have captured at least one start event");
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, PatchLensError::EmptyEntityName, duration_ms = 10);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one error event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(
        events[0].fields.get(FIELD_ERR_CODE),
        Some(&"ERR_INVALID_INPUT".to_string())
    );
}

#[test]
fn test_aggregate_logs_boundaries() {
    let capture = init_test_capture();
    let history = vec![HistoryEntry::new(
        "14.1",
        vec![ChangeBlock::new(Some("Q"), &["Damage: 1 → 2"])],
    )];

    aggregate(&history);

    capture.assert_event_exists("aggregate", EVENT_START);
    capture.assert_event_exists("aggregate", EVENT_END);
    let ends_with_groups = capture.count_events(|e| {
        e.op.as_deref() == Some("aggregate")
            && e.event.as_deref() == Some(EVENT_END)
            && e.fields.contains_key(FIELD_GROUP_COUNT)
    });
    assert!(ends_with_groups >= 1);
}

#[test]
fn test_history_error_is_logged() {
    let capture = init_test_capture();
    let source = MemoryHistorySource::default();

    let result = source.history(EntityKind::Champion, "");
    assert!(result.is_err());

    capture.assert_event_exists("history", EVENT_END_ERROR);
}
