use crate::context::ExecutionContext;
use anyhow::{Context, Result};
use chatview_index::Database;
use std::net::SocketAddr;
use std::path::PathBuf;

pub fn handle(
    ctx: &ExecutionContext,
    db: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let config = ctx.config()?;
    let db_path = ctx.db_path(&config, db.as_deref());
    let host = host.unwrap_or(config.server.host);
    let port = port.unwrap_or(config.server.port);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", host, port))?;

    let database = Database::open(&db_path)?;
    let events = database.count_events()?;
    tracing::info!(db = %db_path.display(), events, "opened event store");

    super::runtime()?.block_on(chatview_server::serve(addr, database))?;
    Ok(())
}
