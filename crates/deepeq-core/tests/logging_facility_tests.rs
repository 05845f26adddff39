#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::rc::Rc;

use deepeq_core::logging_facility::test_capture::init_test_capture;
use deepeq_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
    FIELD_MEMBER_ORDER, FIELD_PATH, FIELD_VISITED, OP_COMPARE,
};
use deepeq_core::{compare, log_op_end, log_op_error, log_op_start, Comparer, MemberOrder};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let events = capture.events();
    let start_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = compare(&2_i32, &3_i32).unwrap_err();
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_VALUE_INEQUALITY"));
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("ValueInequality"));
}

#[test]
fn test_successful_compare_emits_start_and_end() {
    // GIVEN a labelled comparer
    let capture = init_test_capture();
    let label = "test_successful_compare_unique_4";

    // WHEN two equal values are compared
    Comparer::new()
        .with_label(label)
        .compare(&vec![1, 2], &vec![1, 2])
        .unwrap();

    // THEN exactly one start and one end event carry the label
    let events = capture.events_with_label(label);
    let kinds: Vec<_> = events.iter().map(|e| e.event.as_deref()).collect();
    assert_eq!(kinds, vec![Some(EVENT_START), Some(EVENT_END)]);
    assert!(events.iter().all(|e| e.op.as_deref() == Some(OP_COMPARE)));
    assert!(events[1].field(FIELD_DURATION_MS).is_some());
}

#[test]
fn test_failed_compare_emits_end_error_with_path() {
    let capture = init_test_capture();
    let label = "test_failed_compare_unique_5";

    let err = Comparer::new()
        .with_label(label)
        .compare(&vec![1, 2, 3], &vec![1, 2])
        .unwrap_err();

    let events = capture.events_with_label(label);
    assert_eq!(events.len(), 2);

    let end = &events[1];
    assert_eq!(end.event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(end.field(FIELD_ERR_CODE), Some(err.code()));
    assert_eq!(end.field(FIELD_ERR_KIND), Some("CountMismatch"));
    assert_eq!(end.field(FIELD_PATH), Some("Vec<i32>"));
}

#[test]
fn test_start_event_records_member_order() {
    let capture = init_test_capture();
    let label = "test_member_order_unique_6";

    Comparer::new()
        .with_label(label)
        .with_member_order(MemberOrder::Alphabetical)
        .compare(&1_u8, &1_u8)
        .unwrap();

    let start = capture
        .events_with_label(label)
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_START))
        .expect("start event");
    assert_eq!(start.field(FIELD_MEMBER_ORDER), Some("Alphabetical"));
}

#[test]
fn test_end_event_counts_visited_shared_values() {
    let capture = init_test_capture();
    let label = "test_visited_unique_7";

    // Only shared composites are tracked
    let first = vec![Rc::new(vec![1]), Rc::new(vec![2])];
    let second = vec![Rc::new(vec![1]), Rc::new(vec![2])];
    Comparer::new()
        .with_label(label)
        .compare(&first, &second)
        .unwrap();

    let end = capture
        .events_with_label(label)
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .expect("end event");
    assert_eq!(end.field(FIELD_VISITED), Some("2"));
}

#[test]
fn test_each_compare_emits_one_start_event() {
    let capture = init_test_capture();
    let label = "test_start_count_unique_8";
    let comparer = Comparer::new().with_label(label);

    comparer.compare(&1_i32, &1_i32).unwrap();
    comparer.compare(&1_i32, &2_i32).unwrap_err();

    let starts = capture.count_events(|e| {
        e.label() == Some(label) && e.event.as_deref() == Some(EVENT_START)
    });
    let failures = capture.count_events(|e| {
        e.label() == Some(label) && e.event.as_deref() == Some(EVENT_END_ERROR)
    });
    assert_eq!(starts, 2);
    assert_eq!(failures, 1);
}
