pub mod config;
pub mod events;
pub mod guidance;
pub mod post;
pub mod serve;
pub mod watch;

use anyhow::Result;

/// Runtime for handlers that talk to the network.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}
