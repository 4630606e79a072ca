use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Watch { .. }) => logging::init_for_tui(),
        _ => logging::init(cli.log_level),
    }

    let ctx = ExecutionContext::new(
        cli.config.as_deref(),
        cli.api_url,
        cli.trace_url,
        cli.format,
    )?;

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx);
    };

    match command {
        Commands::Events { view_mode, time } => {
            handlers::events::handle(&ctx, view_mode.resolve(), time.utc)
        }

        Commands::Watch { refetch_secs, time } => {
            handlers::watch::handle(&ctx, refetch_secs, time.utc)
        }

        Commands::Serve { db, host, port } => handlers::serve::handle(&ctx, db, host, port),

        Commands::Post { file } => handlers::post::handle(&ctx, &file),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
        },
    }
}
