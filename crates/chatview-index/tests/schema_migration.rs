//! Integration tests for schema migration
//!
//! These tests verify that Database::open correctly handles schema version mismatches
//! by dropping and recreating the events table.

use chatview_index::{Database, SCHEMA_VERSION};
use chatview_types::{InputMessage, NewChatEvent};
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;

/// Create a database with the pre-versioning layout (no trace id, no user_version)
fn create_legacy_db(path: &Path) {
    let conn = Connection::open(path).unwrap();

    conn.execute_batch(
        r#"
        CREATE TABLE events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id UUID NOT NULL,
            messages TEXT NOT NULL,
            response TEXT NOT NULL,
            model TEXT NOT NULL,
            stop_reason TEXT NOT NULL,
            content TEXT NOT NULL,
            type TEXT NOT NULL,
            role TEXT NOT NULL,
            cache_read_input_tokens INTEGER NOT NULL,
            input_tokens INTEGER NOT NULL,
            output_tokens INTEGER NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
    .unwrap();

    conn.execute(
        r#"INSERT INTO events (session_id, messages, response, model, stop_reason, content, type, role,
                               cache_read_input_tokens, input_tokens, output_tokens)
           VALUES ('s', '[]', '[]', 'legacy', 'end_turn', '', 'message', 'assistant', 0, 1, 1)"#,
        [],
    )
    .unwrap();
}

fn payload() -> NewChatEvent {
    serde_json::from_value(serde_json::json!({
        "dagger_trace_id": "abc123",
        "messages": [InputMessage::user("hi")],
        "model": "claude-3-opus-20240229",
        "stop_reason": "end_turn"
    }))
    .unwrap()
}

#[test]
fn test_legacy_schema_is_recreated() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("events.db");
    create_legacy_db(&db_path);

    let db = Database::open(&db_path).unwrap();
    assert_eq!(db.count_events().unwrap(), 0);

    let stored = db.insert_event(payload()).unwrap();
    assert_eq!(stored.trace_id, "abc123");

    let conn = Connection::open(&db_path).unwrap();
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, SCHEMA_VERSION);
}

#[test]
fn test_reopen_keeps_events() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("events.db");

    {
        let db = Database::open(&db_path).unwrap();
        db.insert_event(payload()).unwrap();
        db.insert_event(payload()).unwrap();
    }

    let db = Database::open(&db_path).unwrap();
    let events = db.list_events().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.model == "claude-3-opus-20240229"));
}
