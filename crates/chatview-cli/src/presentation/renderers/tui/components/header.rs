use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use super::Component;
use crate::presentation::renderers::tui::app::{AppState, FetchStatus};
use crate::presentation::views::LIST_TITLE;

pub(crate) struct HeaderComponent;

impl HeaderComponent {
    fn status_line(state: &AppState) -> Line<'static> {
        if state.status != FetchStatus::Loaded {
            return Line::default();
        }

        let mut spans = vec![Span::raw(format!("{} events", state.cards.len()))];
        if let Some(at) = state.last_fetched {
            spans.push(Span::raw(format!(" · updated {}", at.format("%H:%M:%S"))));
        }
        if state.fetching {
            spans.push(Span::styled(
                " · refreshing",
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans).style(Style::default().fg(Color::DarkGray))
    }
}

impl Component for HeaderComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let title = Line::from(Span::styled(
            LIST_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        let text = Text::from(vec![title, Self::status_line(state)]);
        f.render_widget(Paragraph::new(text), area);
    }
}
