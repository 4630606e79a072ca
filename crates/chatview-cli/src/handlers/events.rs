use crate::context::ExecutionContext;
use crate::presentation::{ConsoleRenderer, DisplayOptions, Renderer, ViewMode, presenters};
use anyhow::{Result, anyhow};
use chatview_runtime::{EVENTS_KEY, EventSource, HttpEventSource};
use chrono::Utc;

pub fn handle(ctx: &ExecutionContext, view_mode: ViewMode, utc: bool) -> Result<()> {
    let config = ctx.config()?;
    let source = HttpEventSource::new(config.api_url.clone())?;

    let events = super::runtime()?
        .block_on(source.fetch(EVENTS_KEY))
        .map_err(|err| anyhow!("An error has occurred: {}", err))?;

    let result = presenters::present_event_list(events, &config.trace_url, Utc::now());
    let renderer = ConsoleRenderer::new(ctx.format.into(), view_mode)
        .with_options(DisplayOptions::detect().with_utc(utc));
    renderer.render(result)
}
