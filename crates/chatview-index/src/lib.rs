// SQLite event store
// messages/response are kept as JSON text and decoded on read

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use records::EventRecord;
pub use schema::SCHEMA_VERSION;
