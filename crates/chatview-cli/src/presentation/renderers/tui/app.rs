use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::components::CardListComponent;
use crate::presentation::view_models::EventCardViewModel;
use chatview_runtime::RelativeTimeDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Quit,
    Refetch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FetchStatus {
    /// First fetch still in flight; only the title is shown.
    Pending,
    Loaded,
    Failed(String),
}

pub(crate) struct AppState {
    pub status: FetchStatus,
    pub cards: CardListComponent,
    pub fetching: bool,
    pub last_fetched: Option<DateTime<Local>>,
    pub utc: bool,
}

impl AppState {
    pub fn new(utc: bool) -> Self {
        Self {
            status: FetchStatus::Pending,
            cards: CardListComponent::default(),
            fetching: false,
            last_fetched: None,
            utc,
        }
    }

    /// Global keys first, everything else goes to the card list.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('r') => Some(Action::Refetch),
            _ => self.cards.handle_input(key),
        }
    }

    /// Apply a finished fetch. An error replaces the cards with one error line.
    pub fn apply_fetch<F>(&mut self, result: Result<Vec<EventCardViewModel>, String>, mount: F)
    where
        F: FnMut(&EventCardViewModel) -> RelativeTimeDisplay,
    {
        self.fetching = false;
        match result {
            Ok(cards) => {
                self.cards.reconcile(cards, mount);
                self.status = FetchStatus::Loaded;
                self.last_fetched = Some(Local::now());
            }
            Err(message) => {
                self.cards.clear();
                self.status = FetchStatus::Failed(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_global_keys() {
        let mut state = AppState::new(false);
        assert_eq!(state.handle_input(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(state.handle_input(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(state.handle_input(key(KeyCode::Char('r'))), Some(Action::Refetch));
        assert_eq!(
            state.handle_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(state.handle_input(key(KeyCode::Char('j'))), None);
    }

    #[tokio::test]
    async fn test_fetch_error_clears_cards() {
        let mut state = AppState::new(false);
        state.fetching = true;
        state.apply_fetch(Err("Request failed with status 500".to_string()), |card| {
            RelativeTimeDisplay::new(card.created_at.clone(), None)
        });

        assert!(!state.fetching);
        assert_eq!(
            state.status,
            FetchStatus::Failed("Request failed with status 500".to_string())
        );
        assert!(state.cards.is_empty());
        assert!(state.last_fetched.is_none());
    }
}
