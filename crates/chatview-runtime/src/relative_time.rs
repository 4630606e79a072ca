//! Live "time ago" phrases.
//!
//! A [`RelativeTimeDisplay`] is the view object for one timestamp. Mounting it
//! spawns a ticker task that recomputes the phrase every [`REFRESH_INTERVAL`];
//! dropping it tears the task down. Each display owns its ticker, so cards never
//! share timers.
//!
//! ```text
//! mount ──> [ticker task] ──tick──> watch::Sender<String> ──> text()
//!   │              ▲                       │
//!   │              └── cancelled on drop   └──> on_tick hook (redraw)
//!   └── unparseable timestamp: "Invalid Date", no task
//! ```

use chatview_types::{INVALID_DATE, parse_timestamp};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// How often a mounted display recomputes its phrase.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Source of "now" for phrase computation.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Called after every refresh. Must not drop the display that invokes it.
pub type TickHook = Arc<dyn Fn() + Send + Sync>;

/// Format the distance between `then` and `now` as a phrase.
///
/// `just now` within 5 seconds either way, otherwise `N <unit> ago` for the
/// past and `in N <unit>` for the future.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds();
    let magnitude = seconds.unsigned_abs();

    if magnitude < 5 {
        return "just now".to_string();
    }

    let (value, unit) = if magnitude < 60 {
        (magnitude, "second")
    } else if magnitude < 3_600 {
        (magnitude / 60, "minute")
    } else if magnitude < 86_400 {
        (magnitude / 3_600, "hour")
    } else if magnitude < 30 * 86_400 {
        (magnitude / 86_400, "day")
    } else if magnitude < 365 * 86_400 {
        (magnitude / (30 * 86_400), "month")
    } else {
        (magnitude / (365 * 86_400), "year")
    };

    let plural = if value == 1 { "" } else { "s" };
    if seconds < 0 {
        format!("in {} {}{}", value, unit, plural)
    } else {
        format!("{} {}{} ago", value, unit, plural)
    }
}

/// Continuously refreshed relative-time phrase for one timestamp.
///
/// Must be mounted inside a tokio runtime.
pub struct RelativeTimeDisplay {
    raw: String,
    rx: watch::Receiver<String>,
    cancel: CancellationToken,
    // Held by the ticker while it publishes; taken by Drop before cancelling.
    gate: Arc<Mutex<()>>,
    task: Option<JoinHandle<()>>,
}

impl RelativeTimeDisplay {
    /// Mount with the system clock and the standard one-second refresh.
    pub fn new(raw: impl Into<String>, on_tick: Option<TickHook>) -> Self {
        Self::mount(raw, Arc::new(SystemClock), REFRESH_INTERVAL, on_tick)
    }

    pub fn mount(
        raw: impl Into<String>,
        clock: Arc<dyn Clock>,
        interval: Duration,
        on_tick: Option<TickHook>,
    ) -> Self {
        let raw = raw.into();
        let cancel = CancellationToken::new();
        let gate = Arc::new(Mutex::new(()));

        let Some(at) = parse_timestamp(&raw) else {
            let (_tx, rx) = watch::channel(INVALID_DATE.to_string());
            return Self {
                raw,
                rx,
                cancel,
                gate,
                task: None,
            };
        };

        let (tx, rx) = watch::channel(format_relative(at, clock.now()));
        let task = tokio::spawn(run_ticker(
            at,
            clock,
            interval,
            tx,
            cancel.clone(),
            gate.clone(),
            on_tick,
        ));

        Self {
            raw,
            rx,
            cancel,
            gate,
            task: Some(task),
        }
    }

    /// Current phrase.
    pub fn text(&self) -> String {
        self.rx.borrow().clone()
    }

    /// The timestamp exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether a ticker is scheduled (false for unparseable timestamps).
    pub fn is_live(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Receiver that observes every refresh.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.rx.clone()
    }
}

impl std::fmt::Debug for RelativeTimeDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelativeTimeDisplay")
            .field("raw", &self.raw)
            .field("text", &*self.rx.borrow())
            .field("live", &self.is_live())
            .finish()
    }
}

impl Drop for RelativeTimeDisplay {
    fn drop(&mut self) {
        // Once the gate is held no tick is mid-publish, and the cancelled token
        // stops any later one before it runs its hook.
        let _guard = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run_ticker(
    at: DateTime<Utc>,
    clock: Arc<dyn Clock>,
    interval: Duration,
    tx: watch::Sender<String>,
    cancel: CancellationToken,
    gate: Arc<Mutex<()>>,
    on_tick: Option<TickHook>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; mount already computed that phrase.
    ticker.tick().await;

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                if !publish(at, clock.as_ref(), &tx, &cancel, &gate, on_tick.as_ref()) {
                    break;
                }
            }
        }
    }
}

/// Recompute and publish the phrase under the gate. Returns false once cancelled.
fn publish(
    at: DateTime<Utc>,
    clock: &dyn Clock,
    tx: &watch::Sender<String>,
    cancel: &CancellationToken,
    gate: &Mutex<()>,
    on_tick: Option<&TickHook>,
) -> bool {
    let _guard = gate.lock().unwrap_or_else(PoisonError::into_inner);
    if cancel.is_cancelled() {
        return false;
    }
    tx.send_replace(format_relative(at, clock.now()));
    if let Some(hook) = on_tick {
        hook();
    }
    true
}
