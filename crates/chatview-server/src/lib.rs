//! Events API.
//!
//! ```text
//! POST /api/v1          ─┐
//! POST /api/v1/events   ─┼─> [ routes ] ──> Mutex<Database> (SQLite)
//! GET  /api/v1/events   ─┘
//! ```
//!
//! Stored events come back newest first. CORS is wide open so browser-based
//! viewers on any origin can read the list.

pub mod routes;
pub mod state;

pub use routes::app;
pub use state::AppState;

use chatview_index::Database;
use std::net::SocketAddr;

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(addr: SocketAddr, db: Database) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(%local, "events API listening");

    axum::serve(listener, app(AppState::new(db)))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down events API");
}
