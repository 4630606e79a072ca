use crate::context::ExecutionContext;
use crate::presentation::{TuiRenderer, WatchOptions};
use anyhow::{Result, bail};
use chatview_runtime::{CachedEventSource, HttpEventSource};
use is_terminal::IsTerminal;
use std::sync::Arc;
use std::time::Duration;

pub fn handle(ctx: &ExecutionContext, refetch_secs: u64, utc: bool) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("watch needs an interactive terminal; use `chatview events` instead");
    }

    let config = ctx.config()?;
    let source = HttpEventSource::new(config.api_url.clone())?;
    let cached = Arc::new(CachedEventSource::new(source, Duration::ZERO));

    let options = WatchOptions {
        trace_url: config.trace_url,
        refetch_every: (refetch_secs > 0).then(|| Duration::from_secs(refetch_secs)),
        utc,
    };

    super::runtime()?.block_on(TuiRenderer::new(cached, options).run())
}
