use chatview_types::{ChatEvent, NewChatEvent};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Connection;
use std::path::Path;

use crate::{Result, queries, schema};

// NOTE: Storage Layout
//
// One table, one row per exchange. Conversation and response arrays are stored
// as JSON text so the payload shape can grow without a migration. Timestamps are
// RFC 3339 in UTC with millisecond precision, which keeps lexical ordering equal
// to chronological ordering.

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        schema::init_schema(&self.conn)
    }

    /// Store an event stamped with the current time and return it as stored.
    pub fn insert_event(&self, event: NewChatEvent) -> Result<ChatEvent> {
        self.insert_event_at(event, Utc::now())
    }

    pub fn insert_event_at(
        &self,
        event: NewChatEvent,
        created_at: DateTime<Utc>,
    ) -> Result<ChatEvent> {
        let created_at = created_at.to_rfc3339_opts(SecondsFormat::Millis, true);
        let id = queries::event::insert(&self.conn, &event, &created_at)?;
        Ok(event.into_event(id, created_at))
    }

    pub fn list_events(&self) -> Result<Vec<ChatEvent>> {
        queries::event::list(&self.conn)
    }

    pub fn get_event(&self, id: i64) -> Result<Option<ChatEvent>> {
        queries::event::get_by_id(&self.conn, id)
    }

    pub fn count_events(&self) -> Result<usize> {
        queries::event::count(&self.conn)
    }

    #[cfg(test)]
    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}
