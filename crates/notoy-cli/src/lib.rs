//! Notoy CLI Library
//!
//! Command layer, turns command line requests into Core library calls.

use std::io::Write;

use notoy_core::NotoyConfig;

mod cli;
mod handlers;

pub use cli::{BookmarkAction, BookmarksArgs, Cli, Commands, FormatArg, NoteArgs, PlatformArg, PreviewArgs};
pub use handlers::*;

/// Initialise `env_logger`; `RUST_LOG` takes precedence over the config.
pub fn init_logging(config: &NotoyConfig) {
    let env = env_logger::Env::default().default_filter_or(config.logging.level.as_str());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli, config: &NotoyConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    match cli.command {
        Commands::Bookmarks(args) => handle_bookmarks(config, args, out).await,
        Commands::Note(args) => handle_note(config, args, out),
        Commands::Preview(args) => handle_preview(config, args, out),
    }
}
