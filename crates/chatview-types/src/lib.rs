pub mod error;
pub mod event;
pub mod time;

pub use error::{Error, Result};
pub use event::*;
pub use time::{parse_timestamp, INVALID_DATE};
