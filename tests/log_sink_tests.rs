use std::sync::Arc;

use tempfile::TempDir;

use freelancehub_backend::constants::APP_LOGS_KEY;
use freelancehub_backend::db::json_store::JsonStore;
use freelancehub_backend::observability::log_sink::{LogContext, LogEntry, LogLevel, LogSink};

fn sink_with_capacity(capacity: usize) -> (LogSink, Arc<JsonStore>, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonStore::open(dir.path()).unwrap());
    let sink = LogSink::new(capacity, "FreelanceHub Test", store.clone());
    (sink, store, dir)
}

#[test]
fn overflow_drops_the_oldest_entries() {
    let (sink, _store, _dir) = sink_with_capacity(3);

    for i in 0..5 {
        sink.info(&format!("event {i}"), serde_json::json!({}), LogContext::default());
    }

    let entries = sink.snapshot();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].message, "event 2");
    assert_eq!(entries[2].message, "event 4");
}

#[test]
fn entries_are_mirrored_to_the_store() {
    let (sink, store, _dir) = sink_with_capacity(10);

    sink.warn(
        "No freelancers found for criteria",
        serde_json::json!({ "jobRole": "3d-modeling" }),
        LogContext::operation("find_match"),
    );

    let persisted: Vec<LogEntry> = store.get(APP_LOGS_KEY);
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].level, LogLevel::Warn);
    assert_eq!(persisted[0].message, "No freelancers found for criteria");
    assert_eq!(persisted[0].context.operation.as_deref(), Some("find_match"));
    assert_eq!(persisted, sink.snapshot());
}

#[test]
fn a_new_session_clears_the_persisted_logs() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonStore::open(dir.path()).unwrap());

    {
        let sink = LogSink::new(10, "FreelanceHub Test", store.clone());
        sink.info("from the first session", serde_json::json!({}), LogContext::default());
    }
    assert_eq!(store.get::<Vec<LogEntry>>(APP_LOGS_KEY).len(), 1);

    // A fresh sink over the same directory starts a new session.
    let _sink = LogSink::new(10, "FreelanceHub Test", store.clone());
    assert!(store.get::<Vec<LogEntry>>(APP_LOGS_KEY).is_empty());
}

#[test]
fn clear_empties_both_the_ring_and_the_store() {
    let (sink, store, _dir) = sink_with_capacity(10);

    sink.error("boom", serde_json::json!({"detail": "store offline"}), LogContext::operation("submit_hire_request"));
    sink.clear();

    assert!(sink.snapshot().is_empty());
    assert!(store.get::<Vec<LogEntry>>(APP_LOGS_KEY).is_empty());
}
