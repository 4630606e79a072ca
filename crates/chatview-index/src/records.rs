use chatview_types::{ChatEvent, InputMessage, ResponseSegment};

use crate::{Error, Result};

/// Raw row from the `events` table.
///
/// `messages` and `response` hold JSON text; they are decoded by
/// [`EventRecord::into_event`].
#[derive(Debug, Clone)]
pub struct EventRecord {
    pub id: i64,
    pub trace_id: String,
    pub session_id: String,
    pub messages: String,
    pub response: String,
    pub model: String,
    pub stop_reason: String,
    pub content: String,
    pub kind: String,
    pub role: String,
    pub cache_read_input_tokens: i64,
    pub input_tokens: i64,
    pub output_tokens: i64,
    /// RFC 3339 (UTC, millisecond precision).
    pub created_at: String,
}

impl EventRecord {
    pub fn into_event(self) -> Result<ChatEvent> {
        let messages: Vec<InputMessage> = serde_json::from_str(&self.messages)?;
        let response: Vec<ResponseSegment> = serde_json::from_str(&self.response)?;

        Ok(ChatEvent {
            id: self.id,
            trace_id: self.trace_id,
            session_id: self.session_id,
            messages,
            response,
            model: self.model,
            stop_reason: self.stop_reason,
            content: self.content,
            kind: self.kind,
            role: self.role,
            cache_read_input_tokens: counter(
                "cache_read_input_tokens",
                self.cache_read_input_tokens,
            )?,
            input_tokens: counter("input_tokens", self.input_tokens)?,
            output_tokens: counter("output_tokens", self.output_tokens)?,
            created_at: self.created_at,
        })
    }
}

fn counter(field: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| Error::CounterOutOfRange {
        field,
        value: value.to_string(),
    })
}
