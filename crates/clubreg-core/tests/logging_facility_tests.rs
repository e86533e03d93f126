#![allow(clippy::unwrap_used, clippy::expect_used)]

use clubreg_core::errors::{ClubRegError, ExError, ExErrorKind};
use clubreg_core::logging_facility::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CLUB_NAME, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_STORE_KEY,
};
use clubreg_core::logging_facility::test_capture::init_test_capture;
use clubreg_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, club_name = "Alpha");

    let start_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert_eq!(start_events.len(), 1);
    assert_eq!(
        start_events[0].fields.get(FIELD_CLUB_NAME),
        Some(&"Alpha".to_string())
    );
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].fields.get(FIELD_DURATION_MS), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ClubRegError::EventNotFound {
        event_name: "Camp".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    let error_event = &error_events[0];
    assert_eq!(error_event.level, tracing::Level::ERROR);
    assert_eq!(
        error_event.fields.get(FIELD_ERR_CODE),
        Some(&"ERR_NOT_FOUND".to_string())
    );
    assert_eq!(
        error_event.fields.get(FIELD_ERR_KIND),
        Some(&"NotFound".to_string())
    );
}

#[test]
fn test_log_op_error_accepts_ex_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = ExError::new(ExErrorKind::Persistence).with_message("disk full");
    log_op_error!(op_name, err, duration_ms = 1, store_key = "clubs");

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].fields.get(FIELD_ERR_CODE),
        Some(&"ERR_PERSISTENCE".to_string())
    );
    assert_eq!(events[0].fields.get(FIELD_STORE_KEY), Some(&"clubs".to_string()));
}

#[test]
fn test_boundary_pair_for_one_operation() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_5";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 0);

    let count = capture.count_events(|e| e.op.as_deref() == Some(op_name));
    assert_eq!(count, 2);
    capture.assert_event_exists(op_name, EVENT_START);
    capture.assert_event_exists(op_name, EVENT_END);
}
