use chatview_types::{ChatEvent, NewChatEvent};
use rusqlite::{Connection, Row, params};

use crate::{Error, Result, records::EventRecord};

const SELECT_COLUMNS: &str = r#"
    SELECT id, dagger_trace_id, session_id, messages, response, model, stop_reason,
           content, type, role, cache_read_input_tokens, input_tokens, output_tokens,
           created_at
    FROM events
"#;

pub fn insert(conn: &Connection, event: &NewChatEvent, created_at: &str) -> Result<i64> {
    let messages = serde_json::to_string(&event.messages)?;
    let response = serde_json::to_string(&event.response)?;
    let cache_read = column_counter("cache_read_input_tokens", event.cache_read_input_tokens)?;
    let input = column_counter("input_tokens", event.input_tokens)?;
    let output = column_counter("output_tokens", event.output_tokens)?;

    conn.execute(
        r#"
        INSERT INTO events (dagger_trace_id, session_id, messages, response, model, stop_reason,
                            content, type, role, cache_read_input_tokens, input_tokens,
                            output_tokens, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
        "#,
        params![
            &event.trace_id,
            event.session_id.as_deref().unwrap_or_default(),
            messages,
            response,
            &event.model,
            &event.stop_reason,
            &event.content,
            &event.kind,
            &event.role,
            cache_read,
            input,
            output,
            created_at
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Newest first. Rows whose JSON columns fail to decode are skipped.
pub fn list(conn: &Connection) -> Result<Vec<ChatEvent>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"))?;

    let records = stmt
        .query_map([], map_record)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut events = Vec::with_capacity(records.len());
    for record in records {
        let id = record.id;
        match record.into_event() {
            Ok(event) => events.push(event),
            Err(err) => {
                tracing::warn!(id, error = %err, "skipping event with undecodable columns");
            }
        }
    }

    tracing::debug!(count = events.len(), "listed events");
    Ok(events)
}

pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<ChatEvent>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;

    let mut rows = stmt.query([id])?;
    match rows.next()? {
        Some(row) => Ok(Some(map_record(row)?.into_event()?)),
        None => Ok(None),
    }
}

/// SQLite INTEGER is signed; refuse counts that would wrap.
fn column_counter(field: &'static str, value: u64) -> Result<i64> {
    i64::try_from(value).map_err(|_| Error::CounterOutOfRange {
        field,
        value: value.to_string(),
    })
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    Ok(count as usize)
}

fn map_record(row: &Row<'_>) -> rusqlite::Result<EventRecord> {
    Ok(EventRecord {
        id: row.get(0)?,
        trace_id: row.get(1)?,
        session_id: row.get(2)?,
        messages: row.get(3)?,
        response: row.get(4)?,
        model: row.get(5)?,
        stop_reason: row.get(6)?,
        content: row.get(7)?,
        kind: row.get(8)?,
        role: row.get(9)?,
        cache_read_input_tokens: row.get(10)?,
        input_tokens: row.get(11)?,
        output_tokens: row.get(12)?,
        created_at: row.get(13)?,
    })
}
