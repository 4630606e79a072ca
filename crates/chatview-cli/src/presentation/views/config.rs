use std::fmt;

use crate::presentation::view_models::{ConfigViewModel, ViewMode};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    mode: ViewMode,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.config_path);
        }

        let status = if self.data.exists { "" } else { " (not created, using defaults)" };
        writeln!(f, "Config:    {}{}", self.data.config_path, status)?;
        writeln!(f, "api_url:   {}", self.data.api_url)?;
        writeln!(f, "trace_url: {}", self.data.trace_url)?;
        writeln!(f)?;
        writeln!(f, "[server]")?;
        writeln!(f, "host:      {}", self.data.server.host)?;
        writeln!(f, "port:      {}", self.data.server.port)?;
        writeln!(f, "db_path:   {}", self.data.server.db_path)
    }
}
