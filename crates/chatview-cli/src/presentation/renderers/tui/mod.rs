mod app;
mod components;
mod tui_event;
mod ui;

use anyhow::Result;
use chatview_runtime::{
    CachedEventSource, EVENTS_KEY, EventSource, RelativeTimeDisplay, TickHook,
};
use chrono::Utc;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::time::{Interval, MissedTickBehavior};

use crate::presentation::presenters;
use app::{Action, AppState};
pub use tui_event::TuiEvent;

/// Settings for one `watch` session.
pub struct WatchOptions {
    pub trace_url: String,
    pub refetch_every: Option<Duration>,
    pub utc: bool,
}

/// Interactive card list. Each card owns a ticking relative time; the loop
/// redraws whenever one of them ticks, a key arrives or a fetch completes.
pub struct TuiRenderer<S> {
    source: Arc<CachedEventSource<S>>,
    options: WatchOptions,
}

impl<S> TuiRenderer<S>
where
    S: EventSource + 'static,
{
    pub fn new(source: Arc<CachedEventSource<S>>, options: WatchOptions) -> Self {
        Self { source, options }
    }

    pub async fn run(self) -> Result<()> {
        let mut terminal = TerminalGuard::enter()?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let (tx, mut rx) = mpsc::unbounded_channel::<TuiEvent>();
        let redraw = Arc::new(Notify::new());
        let on_tick = redraw_hook(Arc::clone(&redraw));
        let mount = |card: &crate::presentation::view_models::EventCardViewModel| {
            RelativeTimeDisplay::new(card.created_at.clone(), Some(on_tick.clone()))
        };

        let mut app_state = AppState::new(self.options.utc);
        let mut input = EventStream::new();
        let mut refetch_timer = self.options.refetch_every.map(|period| {
            let mut timer = tokio::time::interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            timer.reset();
            timer
        });

        self.spawn_fetch(&mut app_state, &tx);

        loop {
            terminal.inner.draw(|f| ui::draw(f, &app_state))?;

            tokio::select! {
                maybe_event = input.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        match app_state.handle_input(key) {
                            Some(Action::Quit) => break,
                            Some(Action::Refetch) => {
                                self.source.invalidate(EVENTS_KEY);
                                self.spawn_fetch(&mut app_state, &tx);
                            }
                            None => {}
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
                Some(event) = rx.recv() => match event {
                    TuiEvent::Fetched(result) => {
                        let trace_url = &self.options.trace_url;
                        let cards = result.map(|events| {
                            presenters::present_event_cards(events, trace_url, Utc::now())
                        });
                        if let Err(message) = &cards {
                            tracing::debug!(%message, "event fetch failed");
                        }
                        app_state.apply_fetch(cards, &mount);
                    }
                },
                _ = redraw.notified() => {}
                _ = next_refetch(&mut refetch_timer) => {
                    self.spawn_fetch(&mut app_state, &tx);
                }
            }
        }

        // Unmount every card before the terminal is restored.
        app_state.cards.clear();
        Ok(())
    }

    /// Start a fetch unless one is already in flight.
    fn spawn_fetch(&self, app_state: &mut AppState, tx: &UnboundedSender<TuiEvent>) {
        if app_state.fetching {
            return;
        }
        app_state.fetching = true;

        let source = Arc::clone(&self.source);
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = source.fetch(EVENTS_KEY).await.map_err(|err| err.to_string());
            let _ = tx.send(TuiEvent::Fetched(result));
        });
    }
}

/// Ticks from every card share one stored permit, so a burst of ticks
/// between two frames costs a single redraw.
fn redraw_hook(redraw: Arc<Notify>) -> TickHook {
    Arc::new(move || redraw.notify_one())
}

async fn next_refetch(timer: &mut Option<Interval>) {
    match timer {
        Some(timer) => {
            timer.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

/// Raw mode plus alternate screen, undone on drop.
struct TerminalGuard {
    inner: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let inner = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { inner })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.inner.backend_mut(), LeaveAlternateScreen);
        let _ = self.inner.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tick_burst_coalesces_into_one_redraw() {
        let redraw = Arc::new(Notify::new());
        let hook = redraw_hook(Arc::clone(&redraw));
        for _ in 0..5 {
            hook();
        }

        tokio::time::timeout(Duration::from_millis(10), redraw.notified())
            .await
            .unwrap();
        let second = tokio::time::timeout(Duration::from_secs(1), redraw.notified()).await;
        assert!(second.is_err());
    }
}
