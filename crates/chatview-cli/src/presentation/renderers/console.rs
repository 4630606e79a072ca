use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::formatters::DisplayOptions;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, OutputFormat, ViewMode};

/// Prints a result envelope to stdout as JSON or as its text view.
pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self {
            format,
            mode,
            options: DisplayOptions::detect(),
        }
    }

    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    /// Render into any writer; `render` targets stdout.
    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if self.mode != ViewMode::Minimal
            && let Some(badge) = &result.badge
        {
            if self.options.enable_color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.mode, self.options))?;

        if self.mode != ViewMode::Minimal && !result.suggestions.is_empty() {
            let header = "💡 Tips:";
            if self.options.enable_color {
                writeln!(out, "\n{}", header.yellow().bold())?;
            } else {
                writeln!(out, "\n{}", header)?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.options.enable_color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}
