use chatview_runtime::RelativeTimeDisplay;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use std::cell::Cell;
use std::collections::HashMap;

use crate::presentation::formatters::text::rule;
use crate::presentation::formatters::time::format_absolute;
use crate::presentation::renderers::tui::app::Action;
use crate::presentation::view_models::{BlockSource, EventCardViewModel};

/// A card on screen: its data plus the live relative-time display it owns.
pub(crate) struct MountedCard {
    pub card: EventCardViewModel,
    pub time: RelativeTimeDisplay,
}

/// Keyed list of mounted cards, scrolled by line.
///
/// Cards are keyed by event id. A card that survives a refetch keeps its
/// display, so its ticker is never restarted; a card that disappears is
/// dropped, which cancels its ticker.
#[derive(Default)]
pub(crate) struct CardListComponent {
    cards: Vec<MountedCard>,
    scroll: Cell<u16>,
    // Measured by the last render; keys clamp against them.
    max_scroll: Cell<u16>,
    viewport: Cell<u16>,
}

impl CardListComponent {
    pub fn reconcile<F>(&mut self, next: Vec<EventCardViewModel>, mut mount: F)
    where
        F: FnMut(&EventCardViewModel) -> RelativeTimeDisplay,
    {
        let mut previous: HashMap<i64, MountedCard> = self
            .cards
            .drain(..)
            .map(|mounted| (mounted.card.id, mounted))
            .collect();

        self.cards = next
            .into_iter()
            .map(|card| match previous.remove(&card.id) {
                Some(mut mounted) => {
                    if mounted.time.raw() != card.created_at {
                        mounted.time = mount(&card);
                    }
                    mounted.card = card;
                    mounted
                }
                None => {
                    let time = mount(&card);
                    MountedCard { card, time }
                }
            })
            .collect();

        // Whatever is left in `previous` is unmounted here.
        drop(previous);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.scroll.set(0);
        self.max_scroll.set(0);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[cfg(test)]
    pub fn ids(&self) -> Vec<i64> {
        self.cards.iter().map(|mounted| mounted.card.id).collect()
    }

    #[cfg(test)]
    pub fn get(&self, id: i64) -> Option<&MountedCard> {
        self.cards.iter().find(|mounted| mounted.card.id == id)
    }

    #[cfg(test)]
    pub fn scroll(&self) -> u16 {
        self.scroll.get()
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        let scroll = self.scroll.get();
        let page = self.viewport.get().max(1);
        let next = match key.code {
            KeyCode::Down | KeyCode::Char('j') => scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => scroll.saturating_sub(1),
            KeyCode::PageDown | KeyCode::Char(' ') => scroll.saturating_add(page),
            KeyCode::PageUp => scroll.saturating_sub(page),
            KeyCode::Home | KeyCode::Char('g') => 0,
            KeyCode::End | KeyCode::Char('G') => self.max_scroll.get(),
            _ => return None,
        };
        self.scroll.set(next.min(self.max_scroll.get()));
        None
    }

    /// Stack wrapped cards top to bottom and show the rows under the scroll window.
    pub fn render(&self, f: &mut Frame, area: Rect, utc: bool) {
        if area.width < 3 || area.height == 0 {
            return;
        }

        let inner_width = area.width - 2;
        let cards: Vec<(Paragraph<'static>, u16)> = self
            .cards
            .iter()
            .map(|mounted| {
                let body = Paragraph::new(card_lines(mounted, inner_width as usize, utc))
                    .wrap(Wrap { trim: false });
                let height = body.line_count(inner_width).saturating_add(2);
                let height = u16::try_from(height).unwrap_or(u16::MAX);
                (body.block(card_block(&mounted.card)), height)
            })
            .collect();

        let total = cards
            .iter()
            .fold(0u16, |sum, (_, height)| sum.saturating_add(*height));
        let max_scroll = total.saturating_sub(area.height);
        let scroll = self.scroll.get().min(max_scroll);
        self.scroll.set(scroll);
        self.max_scroll.set(max_scroll);
        self.viewport.set(area.height);

        let window_end = scroll.saturating_add(area.height);
        let frame = f.buffer_mut();
        let mut top = 0u16;
        for (paragraph, height) in cards {
            let bottom = top.saturating_add(height);
            if bottom > scroll && top < window_end {
                let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, height));
                paragraph.render(canvas.area, &mut canvas);

                for row in top.max(scroll)..bottom.min(window_end) {
                    for col in 0..area.width {
                        frame[(area.x + col, area.y + row - scroll)] =
                            canvas[(col, row - top)].clone();
                    }
                }
            }
            top = bottom;
        }
    }
}

fn card_block(card: &EventCardViewModel) -> Block<'static> {
    let badge = Span::styled(
        format!(" {} ", card.model),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    );
    let link = Span::styled(
        format!(" {} ", card.trace_link),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
    );

    Block::bordered()
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Line::from(badge))
        .title_top(Line::from(link).right_aligned())
}

pub(crate) fn card_lines(
    mounted: &MountedCard,
    width: usize,
    utc: bool,
) -> Vec<Line<'static>> {
    let card = &mounted.card;
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::raw(format_absolute(card.created_at_utc, utc)),
        Span::styled(
            format!("  ({})", mounted.time.text()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    for block in &card.conversation {
        lines.push(Line::default());
        let style = match block.source {
            BlockSource::Message => Style::default().fg(Color::White),
            BlockSource::Response => Style::default().fg(Color::Gray),
        };
        for text in block.text.lines() {
            lines.push(Line::styled(text.to_string(), style));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(format!("Stop Reason: {}", card.stop_reason)));
    lines.push(Line::styled(rule(width), Style::default().fg(Color::DarkGray)));
    let metrics = &card.metrics;
    lines.push(Line::from(format!(
        "Input Tokens: {}   Output Tokens: {}   Cache Read Input Tokens: {}",
        metrics.input_tokens, metrics.output_tokens, metrics.cache_read_input_tokens
    )));

    lines
}
