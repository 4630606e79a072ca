use crate::context::ExecutionContext;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode, presenters};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let api_url = ctx.config().map(|config| config.api_url).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring unreadable config");
        chatview_runtime::config::DEFAULT_API_URL.to_string()
    });

    let result = presenters::present_guidance(ctx.config_path(), &api_url);
    ConsoleRenderer::new(ctx.format.into(), ViewMode::Standard).render(result)
}
