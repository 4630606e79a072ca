use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct EventListViewModel {
    /// Reference point for relative times in this snapshot.
    pub rendered_at: DateTime<Utc>,
    pub total_count: usize,
    pub events: Vec<EventCardViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCardViewModel {
    pub id: i64,
    pub model: String,
    pub trace_id: String,
    pub trace_link: String,
    pub session_id: String,
    /// Timestamp exactly as the API returned it.
    pub created_at: String,
    /// `None` when `created_at` does not parse.
    pub created_at_utc: Option<DateTime<Utc>>,
    /// Seconds between `created_at` and the snapshot time (negative for the future).
    pub age_secs: Option<i64>,
    pub conversation: Vec<ConversationBlockViewModel>,
    pub stop_reason: String,
    pub metrics: MetricsViewModel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockSource {
    Message,
    Response,
}

/// One plain-text block of the conversation. Messages come first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationBlockViewModel {
    pub source: BlockSource,
    /// Role for messages, segment kind for responses.
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsViewModel {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cache_read_input_tokens: u64,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for EventListViewModel {
    fn create_view<'a>(
        &'a self,
        mode: ViewMode,
        options: DisplayOptions,
    ) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::event::EventListView;
        Box::new(EventListView::new(self, mode, options))
    }
}

