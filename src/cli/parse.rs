//! CLI parse: clap types for mcp-builder. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mcp-builder CLI - describe a service integration and generate it
#[derive(Parser)]
#[command(name = "mcp-builder")]
#[command(about = "Describe a service integration in plain language and generate it")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (workspace config is read from <workspace>/config)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Generation backend base URL (overrides configuration)
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, default_value = "false")]
    pub no_color: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a requirement once and print the generated artifact summary
    Generate {
        /// Requirement text (natural language)
        requirement: Option<String>,
        /// Read the requirement text from a file instead
        #[arg(long, conflicts_with = "requirement")]
        file: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Interactive session: enter requirements line by line, `:quit` to leave
    Session {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Check that the generation backend is reachable
    Health {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List services the backend has generated
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration
    Config {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml")]
        format: String,
    },
}
