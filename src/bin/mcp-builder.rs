//! mcp-builder CLI Binary
//!
//! Command-line front end for the generation workflow.

use clap::Parser;
use mcp_builder::cli::{Cli, RunContext};
use mcp_builder::config::ConfigLoader;
use mcp_builder::logging::{init_logging, LoggingConfig};
use std::io::IsTerminal;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("mcp-builder starting");

    let color = use_color(&cli);
    let context = match RunContext::new(
        cli.workspace.clone(),
        cli.config.clone(),
        cli.backend_url.clone(),
        color,
    ) {
        Ok(ctx) => {
            info!(backend = %ctx.config().backend.base_url, "CLI context initialized");
            ctx
        }
        Err(e) => {
            error!("Error initializing configuration: {}", e);
            eprintln!("{}", mcp_builder::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", mcp_builder::cli::map_error(&e));
            process::exit(1);
        }
    }
}

fn use_color(cli: &Cli) -> bool {
    !cli.no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.workspace)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if cli.no_color {
        config.color = false;
    }

    if config.enabled && config.output == "file" {
        if let Ok(path) = mcp_builder::logging::resolve_log_file_path(
            cli.log_file.clone(),
            config.file.clone(),
        ) {
            config.file = Some(path);
        }
    } else if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
