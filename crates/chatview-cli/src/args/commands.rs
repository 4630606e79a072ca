use super::common::{TimeArgs, ViewModeArgs};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Fetch the event list once and print it")]
    Events {
        #[command(flatten)]
        view_mode: ViewModeArgs,

        #[command(flatten)]
        time: TimeArgs,
    },

    #[command(about = "Live view: event cards with self-updating relative times")]
    Watch {
        /// Refetch the event list every N seconds (0 = only on 'r')
        #[arg(long, default_value = "0")]
        refetch_secs: u64,

        #[command(flatten)]
        time: TimeArgs,
    },

    #[command(about = "Run the events API backed by a local SQLite store")]
    Serve {
        /// Database file (defaults to [server].db_path, then events.db next to the config)
        #[arg(long)]
        db: Option<PathBuf>,

        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    #[command(about = "Send events from a JSON file (or '-' for stdin) to the API")]
    Post {
        /// JSON object or array of objects
        file: String,
    },

    #[command(about = "Inspect or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective configuration")]
    Show,

    #[command(about = "Write a config file with default values")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
