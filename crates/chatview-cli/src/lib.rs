// NOTE: chatview Architecture Rationale
//
// Why a pull-based viewer (not a push stream)?
// - The events API is a plain list endpoint; there is nothing to subscribe to
// - One GET per refresh keeps the server stateless and trivially cacheable
// - Trade-off: new events show up on the next refetch, not instantly
//
// Why one timer per card (not one global clock)?
// - Each card owns its relative-time display and its teardown
// - Removing a card cancels exactly one ticker, nothing else needs bookkeeping
// - Trade-off: N cards means N tiny tasks, which tokio handles without noticing
//
// Why ship the API server in the same binary?
// - `chatview serve` gives a local store to point the viewer at
// - Producers POST events; the viewer never writes

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
