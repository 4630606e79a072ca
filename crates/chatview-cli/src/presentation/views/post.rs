use std::fmt;

use crate::presentation::view_models::{PostResultViewModel, ViewMode};

pub struct PostResultView<'a> {
    data: &'a PostResultViewModel,
    mode: ViewMode,
}

impl<'a> PostResultView<'a> {
    pub fn new(data: &'a PostResultViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for PostResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for posted in &self.data.posted {
                if let Some(id) = posted.id {
                    writeln!(f, "{}", id)?;
                }
            }
            return Ok(());
        }

        writeln!(f, "Endpoint: {}", self.data.endpoint)?;
        for posted in &self.data.posted {
            let id = posted
                .id
                .map(|id| format!("#{}", id))
                .unwrap_or_else(|| "#?".to_string());
            writeln!(
                f,
                "  {:<6} {}  session {}",
                id, posted.model, posted.session_id
            )?;
        }
        Ok(())
    }
}
