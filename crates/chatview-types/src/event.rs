use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::parse_timestamp;

// NOTE: Wire Compatibility
//
// The events API has shipped responses without `dagger_trace_id` or `created_at`,
// so those (and the provider envelope fields) default to empty strings instead of
// failing the whole list. Fields the viewer cannot do without stay required.

/// One recorded LLM request/response exchange.
///
/// Read-only from the viewer's perspective: it is rendered as received and never
/// validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEvent {
    pub id: i64,
    /// Opaque identifier linking the event to the external trace viewer.
    #[serde(rename = "dagger_trace_id", default)]
    pub trace_id: String,
    #[serde(default)]
    pub session_id: String,
    /// Conversation sent to the model, in order.
    pub messages: Vec<InputMessage>,
    /// Segments the model produced, in order.
    pub response: Vec<ResponseSegment>,
    pub model: String,
    pub stop_reason: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub role: String,
    pub cache_read_input_tokens: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    /// Creation time as sent by the API (RFC 3339 or SQLite `YYYY-MM-DD HH:MM:SS`).
    #[serde(default)]
    pub created_at: String,
}

impl ChatEvent {
    /// Creation time, if `created_at` parses.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    pub fn usage(&self) -> TokenUsage {
        TokenUsage {
            input: self.input_tokens,
            output: self.output_tokens,
            cache_read: self.cache_read_input_tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMessage {
    pub content: String,
    pub role: String,
}

impl InputMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: "user".to_string(),
        }
    }
}

/// One block of model output (`text`, `tool_use`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSegment {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ResponseSegment {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
            image: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input: u64,
    pub output: u64,
    pub cache_read: u64,
}

/// Ingest payload accepted by the events API.
///
/// The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChatEvent {
    #[serde(rename = "dagger_trace_id", default)]
    pub trace_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub messages: Vec<InputMessage>,
    #[serde(default)]
    pub response: Vec<ResponseSegment>,
    pub model: String,
    #[serde(default)]
    pub stop_reason: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub cache_read_input_tokens: u64,
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

impl NewChatEvent {
    /// Fill a missing session id with a fresh UUID v4.
    pub fn ensure_session_id(&mut self) -> &str {
        self.session_id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .as_str()
    }

    /// Materialize the stored form of this payload.
    pub fn into_event(self, id: i64, created_at: String) -> ChatEvent {
        ChatEvent {
            id,
            trace_id: self.trace_id,
            session_id: self.session_id.unwrap_or_default(),
            messages: self.messages,
            response: self.response,
            model: self.model,
            stop_reason: self.stop_reason,
            content: self.content,
            kind: self.kind,
            role: self.role,
            cache_read_input_tokens: self.cache_read_input_tokens,
            input_tokens: self.input_tokens,
            output_tokens: self.output_tokens,
            created_at,
        }
    }
}

/// Parse either a single ingest payload or an array of them.
pub fn parse_new_events(json: &str) -> crate::Result<Vec<NewChatEvent>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}
