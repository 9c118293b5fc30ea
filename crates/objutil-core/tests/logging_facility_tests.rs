#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{obj, rich};
use objutil_core::errors::ObjUtilError;
use objutil_core::logging_facility::test_capture::init_test_capture;
use objutil_core::{log_op_end, log_op_error, log_op_start, HashKeySetFactory, ObjUtil};
use objutil_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CHANGED_COUNT, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_KEY_COUNT, FIELD_MAPPING_KIND, FIELD_NAME_COUNT,
};
use serde_json::json;
use tracing::Level;

#[test]
fn test_start_and_end_share_op_and_component() {
    let capture = init_test_capture();
    let op = "macro_boundary_pair";

    log_op_start!(op, key_count = 3);
    log_op_end!(op, duration_ms = 42);

    let start = &capture.events_for(op, Some(EVENT_START))[0];
    let end = &capture.events_for(op, Some(EVENT_END))[0];

    // GIVEN both boundaries logged from this test module
    // THEN they carry the same component and their own payload fields
    assert_eq!(start.component(), end.component());
    assert!(start.component().unwrap().contains("logging_facility_tests"));
    assert_eq!(start.field(FIELD_KEY_COUNT), Some("3"));
    assert_eq!(end.field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_error_event_carries_kind_and_code() {
    let capture = init_test_capture();
    let op = "macro_error_event";

    let err = ObjUtilError::CollaboratorNotRegistered { op: op.to_string() };
    log_op_error!(op, err, duration_ms = 10);

    let events = capture.events_for(op, Some(EVENT_END_ERROR));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].field(FIELD_ERR_CODE), Some("ERR_CONFIGURATION"));
    assert_eq!(events[0].field(FIELD_ERR_KIND), Some("Configuration"));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_assert_event_exists_panics_when_missing() {
    let capture = init_test_capture();
    capture.assert_event_exists("never_logged_anywhere", EVENT_START);
}

// `pick` is the only operation that owns a start/end boundary, so the
// remaining tests drive it through the component. They share the "pick" op
// name, hence the unique key counts used to tell their events apart.

#[test]
fn test_pick_logs_start_and_end() {
    let capture = init_test_capture();
    let util = ObjUtil::new();
    let m = obj(json!({"a": 1}));

    util.pick(Some(&m), &["a", "b", "c", "d", "e"]).unwrap();

    let starts = capture.count_events(|e| {
        e.op() == Some("pick")
            && e.event() == Some(EVENT_START)
            && e.field(FIELD_KEY_COUNT) == Some("5")
    });
    assert_eq!(starts, 1);
    let start = capture
        .events_for("pick", Some(EVENT_START))
        .into_iter()
        .find(|e| e.field(FIELD_KEY_COUNT) == Some("5"))
        .expect("start event");
    assert_eq!(start.field(FIELD_MAPPING_KIND), Some("plain"));
    capture.assert_event_exists("pick", EVENT_END);
}

#[test]
fn test_pick_configuration_error_is_logged() {
    let capture = init_test_capture();
    let util = ObjUtil::new();
    let m = rich(json!({"a": 1}));

    let result = util.pick(Some(&m), &["a", "b", "c", "d", "e", "f", "g"]);
    assert!(result.is_err());

    let error_events = capture.count_events(|e| {
        e.op() == Some("pick")
            && e.event() == Some(EVENT_END_ERROR)
            && e.field(FIELD_ERR_CODE) == Some("ERR_CONFIGURATION")
    });
    assert!(error_events >= 1);
}

#[test]
fn test_pick_rich_logs_mapping_kind() {
    let capture = init_test_capture();
    let util = ObjUtil::new().with_key_set_factory(HashKeySetFactory);
    let m = rich(json!({"a": 1}));

    util.pick(Some(&m), &["a", "b", "c", "d", "e", "f", "g", "h", "i"])
        .unwrap();

    let found = capture.count_events(|e| {
        e.op() == Some("pick")
            && e.event() == Some(EVENT_START)
            && e.field(FIELD_KEY_COUNT) == Some("9")
            && e.field(FIELD_MAPPING_KIND) == Some("rich")
    });
    assert_eq!(found, 1);
}

#[test]
fn test_diff_reports_counts_at_debug() {
    let capture = init_test_capture();
    let a = obj(json!({"p1": 1, "p2": 2, "p3": 3, "p4": 4, "p5": 5, "p6": 6}));
    let b = obj(json!({"p1": 0, "p2": 2, "p3": 0, "p4": 4, "p5": 5, "p6": 6}));

    objutil_core::diff(Some(&a), Some(&b), None);

    let found = capture.count_events(|e| {
        e.op() == Some("diff")
            && e.level == Level::DEBUG
            && e.field(FIELD_NAME_COUNT) == Some("6")
            && e.field(FIELD_CHANGED_COUNT) == Some("2")
    });
    assert_eq!(found, 1);
}
