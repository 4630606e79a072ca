//! Shared application state.
//!
//! `AppState` is injected into handlers via the `State` extractor. rusqlite
//! connections are not `Sync`, so the database sits behind a mutex; every query
//! is short and runs without awaiting while the lock is held.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chatview_index::Database;

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Database>>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    pub fn db(&self) -> MutexGuard<'_, Database> {
        self.db.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
