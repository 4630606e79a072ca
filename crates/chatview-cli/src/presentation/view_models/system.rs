use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions, ViewMode};

/// What `chatview` with no subcommand shows.
#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub config_path: String,
    pub config_exists: bool,
    pub api_url: String,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(
        &'a self,
        _mode: ViewMode,
        _options: DisplayOptions,
    ) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::GuidanceView;
        Box::new(GuidanceView::new(self))
    }
}
