use chatview_types::ChatEvent;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

use crate::{Result, source::EventSource};

struct CacheEntry {
    fetched_at: Instant,
    events: Vec<ChatEvent>,
}

/// Per-key result cache in front of another [`EventSource`].
///
/// A hit younger than `stale_time` is served without touching the inner source.
/// Failures are never cached. With a zero stale time every fetch goes through,
/// but the last good result stays available through [`CachedEventSource::cached`].
pub struct CachedEventSource<S> {
    inner: S,
    stale_time: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl<S: EventSource> CachedEventSource<S> {
    pub fn new(inner: S, stale_time: Duration) -> Self {
        Self {
            inner,
            stale_time,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Last good result for `key`, fresh or not.
    pub fn cached(&self, key: &str) -> Option<Vec<ChatEvent>> {
        self.lock().get(key).map(|entry| entry.events.clone())
    }

    /// Force the next fetch of `key` to hit the inner source.
    pub fn invalidate(&self, key: &str) {
        self.lock().remove(key);
    }

    fn fresh(&self, key: &str) -> Option<Vec<ChatEvent>> {
        if self.stale_time.is_zero() {
            return None;
        }
        self.lock()
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < self.stale_time)
            .map(|entry| entry.events.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: EventSource> EventSource for CachedEventSource<S> {
    async fn fetch(&self, key: &str) -> Result<Vec<ChatEvent>> {
        if let Some(events) = self.fresh(key) {
            tracing::trace!(key, "cache hit");
            return Ok(events);
        }

        let events = self.inner.fetch(key).await?;
        self.lock().insert(
            key.to_string(),
            CacheEntry {
                fetched_at: Instant::now(),
                events: events.clone(),
            },
        );
        Ok(events)
    }
}
