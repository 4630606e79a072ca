use chrono::{DateTime, Utc};
use owo_colors::{OwoColorize, Style};
use std::fmt;

use crate::presentation::formatters::number::format_compact;
use crate::presentation::formatters::text::{indent_lines, rule};
use crate::presentation::formatters::time::{format_absolute, format_age};
use crate::presentation::formatters::DisplayOptions;
use crate::presentation::view_models::{
    BlockSource, ConversationBlockViewModel, EventCardViewModel, EventListViewModel,
    MetricsViewModel, ViewMode,
};

pub const LIST_TITLE: &str = "Chat History";

// --------------------------------------------------------
// Event List View
// --------------------------------------------------------

pub struct EventListView<'a> {
    data: &'a EventListViewModel,
    mode: ViewMode,
    options: DisplayOptions,
}

impl<'a> EventListView<'a> {
    pub fn new(data: &'a EventListViewModel, mode: ViewMode, options: DisplayOptions) -> Self {
        Self {
            data,
            mode,
            options,
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for event in &self.data.events {
            writeln!(f, "{}", event.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for event in &self.data.events {
            let metrics = &event.metrics;
            writeln!(
                f,
                "#{:<5} {:<28} {:<16} in {} / out {} / cache {}  {}",
                event.id,
                event.model,
                format_age(event.created_at_utc, self.data.rendered_at),
                format_compact(metrics.input_tokens),
                format_compact(metrics.output_tokens),
                format_compact(metrics.cache_read_input_tokens),
                event.stop_reason
            )?;
        }
        Ok(())
    }

    fn render_cards(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, event) in self.data.events.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let card = EventCardView::new(event, self.data.rendered_at, self.mode, self.options);
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for EventListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return self.render_minimal(f);
        }

        let title = if self.options.enable_color {
            LIST_TITLE.bold().to_string()
        } else {
            LIST_TITLE.to_string()
        };
        writeln!(f, "{}", title)?;
        writeln!(f)?;

        if self.data.events.is_empty() {
            return writeln!(f, "No events.");
        }

        match self.mode {
            ViewMode::Compact => self.render_compact(f),
            _ => self.render_cards(f),
        }
    }
}

// --------------------------------------------------------
// Event Card View
// --------------------------------------------------------

/// One card: header, timestamps, conversation, stop reason, rule, metrics.
pub struct EventCardView<'a> {
    data: &'a EventCardViewModel,
    now: DateTime<Utc>,
    mode: ViewMode,
    options: DisplayOptions,
}

impl<'a> EventCardView<'a> {
    pub fn new(
        data: &'a EventCardViewModel,
        now: DateTime<Utc>,
        mode: ViewMode,
        options: DisplayOptions,
    ) -> Self {
        Self {
            data,
            now,
            mode,
            options,
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.options.enable_color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let badge = self.paint(
            &format!("[{}]", self.data.model),
            Style::new().bold().magenta(),
        );
        let link = self.paint(&self.data.trace_link, Style::new().cyan().underline());
        writeln!(f, "{} {}", badge, link)?;

        let absolute = format_absolute(self.data.created_at_utc, self.options.utc);
        let relative = format_age(self.data.created_at_utc, self.now);
        writeln!(
            f,
            "{} {}",
            absolute,
            self.paint(&format!("({})", relative), Style::new().dimmed())
        )?;

        if self.mode == ViewMode::Verbose {
            writeln!(
                f,
                "{}",
                self.paint(
                    &format!(
                        "id: {}  session: {}  created_at: {}",
                        self.data.id, self.data.session_id, self.data.created_at
                    ),
                    Style::new().dimmed(),
                )
            )?;
        }
        Ok(())
    }

    fn render_block(
        &self,
        f: &mut fmt::Formatter,
        block: &ConversationBlockViewModel,
    ) -> fmt::Result {
        if self.mode == ViewMode::Verbose {
            writeln!(f, "  {}", self.paint(&format!("[{}]", block.label), Style::new().dimmed()))?;
        }

        let style = match block.source {
            BlockSource::Message => Style::new().white(),
            BlockSource::Response => Style::new().bright_black(),
        };
        for line in indent_lines(&block.text, "  ").lines() {
            writeln!(f, "{}", self.paint(line, style))?;
        }
        Ok(())
    }

    fn render_metrics(&self, f: &mut fmt::Formatter, metrics: &MetricsViewModel) -> fmt::Result {
        writeln!(f, "Input Tokens: {}", metrics.input_tokens)?;
        writeln!(f, "Output Tokens: {}", metrics.output_tokens)?;
        writeln!(
            f,
            "Cache Read Input Tokens: {}",
            metrics.cache_read_input_tokens
        )
    }
}

impl<'a> fmt::Display for EventCardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;

        for block in &self.data.conversation {
            writeln!(f)?;
            self.render_block(f, block)?;
        }

        writeln!(f)?;
        writeln!(f, "Stop Reason: {}", self.data.stop_reason)?;
        writeln!(
            f,
            "{}",
            self.paint(&rule(self.options.rule_width), Style::new().bright_black())
        )?;
        self.render_metrics(f, &self.data.metrics)
    }
}
