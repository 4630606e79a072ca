use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct FooterComponent;

const KEY_HINTS: &str = "q quit · r refetch · j/k scroll · PgUp/PgDn page";

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, _state: &AppState) {
        let footer_widget = Paragraph::new(Line::from(KEY_HINTS)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(footer_widget, area);
    }
}
