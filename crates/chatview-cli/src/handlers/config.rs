use crate::context::ExecutionContext;
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode, presenters};
use anyhow::{Result, bail};
use chatview_runtime::Config;

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config()?;
    let db_path = ctx.db_path(&config, None);

    let result = presenters::present_config(ctx.config_path(), &config, &db_path);
    ConsoleRenderer::new(ctx.format.into(), ViewMode::Standard).render(result)
}

pub fn init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    let existed = path.exists();
    if existed && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let config = Config::default();
    config.save_to(path)?;
    tracing::info!(path = %path.display(), "wrote config");

    let db_path = ctx.db_path(&config, None);
    let result = presenters::present_config_init(path, &config, &db_path, existed);
    ConsoleRenderer::new(ctx.format.into(), ViewMode::Standard).render(result)
}
