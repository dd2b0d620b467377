//! CLI command-name contract used in log events.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "generate", "session").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Session { .. } => "session",
        Commands::Health { .. } => "health",
        Commands::List { .. } => "list",
        Commands::Config { .. } => "config",
    }
}
