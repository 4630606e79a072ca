use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub config_path: String,
    pub exists: bool,
    pub api_url: String,
    pub trace_url: String,
    pub server: ServerConfigViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerConfigViewModel {
    pub host: String,
    pub port: u16,
    pub db_path: String,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(
        &'a self,
        mode: ViewMode,
        _options: DisplayOptions,
    ) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigView;
        Box::new(ConfigView::new(self, mode))
    }
}
