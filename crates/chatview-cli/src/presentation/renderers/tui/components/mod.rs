use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState);
}

pub(crate) mod card_list;
pub(crate) mod footer;
pub(crate) mod header;

pub(crate) use card_list::CardListComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use header::HeaderComponent;
