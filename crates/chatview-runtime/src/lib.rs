pub mod cache;
pub mod config;
pub mod error;
pub mod links;
pub mod relative_time;
pub mod source;

pub use cache::CachedEventSource;
pub use config::{Config, ServerConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use links::trace_link;
pub use relative_time::{
    Clock, REFRESH_INTERVAL, RelativeTimeDisplay, SystemClock, TickHook, format_relative,
};
pub use source::{EVENTS_KEY, EventSource, HttpEventSource};
