use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct PostResultViewModel {
    pub endpoint: String,
    pub posted: Vec<PostedEventViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostedEventViewModel {
    /// Absent when the server acknowledged without echoing the stored row.
    pub id: Option<i64>,
    pub model: String,
    pub session_id: String,
    pub created_at: Option<String>,
}

impl CreateView for PostResultViewModel {
    fn create_view<'a>(
        &'a self,
        mode: ViewMode,
        _options: DisplayOptions,
    ) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::post::PostResultView;
        Box::new(PostResultView::new(self, mode))
    }
}
