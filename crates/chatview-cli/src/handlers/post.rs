use crate::context::ExecutionContext;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode, presenters};
use anyhow::{Context, Result, bail};
use chatview_runtime::HttpEventSource;
use chatview_types::parse_new_events;
use std::io::Read;

pub fn handle(ctx: &ExecutionContext, file: &str) -> Result<()> {
    let input = read_input(file)?;
    let mut events =
        parse_new_events(&input).with_context(|| format!("invalid event JSON in {}", file))?;
    if events.is_empty() {
        bail!("no events in {}", file);
    }
    for event in &mut events {
        event.ensure_session_id();
    }

    let config = ctx.config()?;
    let source = HttpEventSource::new(config.api_url.clone())?;

    let sent = super::runtime()?.block_on(async {
        let mut sent = Vec::with_capacity(events.len());
        for event in events {
            let stored = source.post_event(&event).await?;
            tracing::debug!(id = ?stored.as_ref().map(|e| e.id), "posted event");
            sent.push((event, stored));
        }
        Ok::<_, chatview_runtime::Error>(sent)
    })?;

    let result = presenters::present_post_result(source.base_url(), sent);
    ConsoleRenderer::new(ctx.format.into(), ViewMode::Standard).render(result)
}

fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file))
}
