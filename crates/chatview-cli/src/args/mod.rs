// NOTE: Command Organization Rationale
//
// Why flat top-level commands?
// - There are only a handful of verbs (events, watch, serve, post, config)
// - `config` is the one namespace because it has more than one action
// - Connection flags are global so every command talks to the same API

mod commands;
mod common;

pub use crate::types::{LogLevel, OutputFormat};
pub use commands::*;
pub use common::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "chatview")]
#[command(about = "View recorded LLM chat events", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file; its directory also holds the events database
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Events API base URL (overrides config and CHATVIEW_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Trace viewer base URL (overrides config and CHATVIEW_TRACE_URL)
    #[arg(long, global = true)]
    pub trace_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
