use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::app::{AppState, FetchStatus};
use super::components::{Component, FooterComponent, HeaderComponent};

pub(crate) fn draw(f: &mut Frame, state: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    HeaderComponent.render(f, main_chunks[0], state);
    render_body(f, main_chunks[1], state);
    FooterComponent.render(f, main_chunks[2], state);
}

fn render_body(f: &mut Frame, area: Rect, state: &AppState) {
    match &state.status {
        FetchStatus::Pending => {}
        FetchStatus::Failed(message) => {
            let line = Line::styled(
                format!("Error: {}", message),
                Style::default().fg(Color::Red),
            );
            f.render_widget(Paragraph::new(line), area);
        }
        FetchStatus::Loaded if state.cards.is_empty() => {
            f.render_widget(Paragraph::new("No events."), area);
        }
        FetchStatus::Loaded => state.cards.render(f, area, state.utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{EventCardViewModel, MetricsViewModel};
    use chatview_runtime::RelativeTimeDisplay;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn screen(state: &AppState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn card(id: i64) -> EventCardViewModel {
        EventCardViewModel {
            id,
            model: format!("model-{}", id),
            trace_id: "abc123".to_string(),
            trace_link: "https://trace.example/wachines/traces/abc123".to_string(),
            session_id: "s".to_string(),
            created_at: "not a date".to_string(),
            created_at_utc: None,
            age_secs: None,
            conversation: Vec::new(),
            stop_reason: "end_turn".to_string(),
            metrics: MetricsViewModel {
                input_tokens: 14,
                output_tokens: 19,
                cache_read_input_tokens: 0,
            },
        }
    }

    fn mount(card: &EventCardViewModel) -> RelativeTimeDisplay {
        RelativeTimeDisplay::new(card.created_at.clone(), None)
    }

    #[test]
    fn test_pending_shows_only_title() {
        let lines = screen(&AppState::new(true));
        assert!(lines[0].starts_with("Chat History"));
        assert!(lines.iter().all(|l| !l.contains("Stop Reason") && !l.contains("Error")));
    }

    #[tokio::test]
    async fn test_error_is_one_line_and_no_cards() {
        let mut state = AppState::new(true);
        state.apply_fetch(Ok(vec![card(1)]), mount);
        state.apply_fetch(
            Err("Request failed with status 500 Internal Server Error".to_string()),
            mount,
        );

        let lines = screen(&state);
        assert_eq!(lines.iter().filter(|l| l.contains("Error:")).count(), 1);
        assert!(lines.iter().all(|l| !l.contains("Stop Reason")));
    }

    #[tokio::test]
    async fn test_cards_render_in_order() {
        let mut state = AppState::new(true);
        state.apply_fetch(Ok(vec![card(2), card(1)]), mount);

        let lines = screen(&state);
        assert_eq!(lines.iter().filter(|l| l.contains("Stop Reason: end_turn")).count(), 2);

        let row_of = |needle: &str| lines.iter().position(|l| l.contains(needle)).unwrap();
        assert!(row_of("model-2") < row_of("model-1"));
        assert!(lines.iter().any(|l| l.contains("wachines/traces/abc123")));
        assert!(lines[1].contains("2 events"));
    }
}
