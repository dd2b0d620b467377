//! CLI route: single route table and run context. Dispatches to the workflow controller,
//! the backend client, and presentation.

use crate::backend::{GenerationBackend, HttpGenerationBackend};
use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_config, format_health_json, format_health_text, format_services_json,
    format_services_text,
};
use crate::config::{BuilderConfig, ConfigLoader};
use crate::error::ApiError;
use crate::presentation::{format_view_json, format_view_text, render, SUBMIT_LABEL_PENDING};
use crate::workflow::{Outcome, WorkflowController};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

const SESSION_QUIT: &[&str] = &[":quit", ":q"];

/// Runtime context for CLI execution: effective config and the backend client.
pub struct RunContext {
    config: BuilderConfig,
    backend: Arc<HttpGenerationBackend>,
    color: bool,
}

impl RunContext {
    /// Create run context from workspace root, optional config path, and optional
    /// backend URL override.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        backend_url: Option<String>,
        color: bool,
    ) -> Result<Self, ApiError> {
        let mut config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        if let Some(url) = backend_url {
            config.backend.base_url = url;
            config.backend.validate().map_err(ApiError::ConfigError)?;
        }

        Self::from_config(config, color)
    }

    /// Create run context from an already-loaded configuration.
    pub fn from_config(config: BuilderConfig, color: bool) -> Result<Self, ApiError> {
        let backend = Arc::new(HttpGenerationBackend::new(&config.backend)?);
        Ok(Self {
            config,
            backend,
            color,
        })
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        info!(command = command_name(command), "Executing command");
        let result = self.execute_inner(command);
        debug!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate {
                requirement,
                file,
                format,
            } => {
                let text = read_requirement(requirement.as_deref(), file.as_deref())?;
                self.handle_generate(text, format)
            }
            Commands::Session { format } => self.handle_session(format),
            Commands::Health { format } => {
                let rt = current_thread_runtime()?;
                let report = rt.block_on(self.backend.health())?;
                let url = &self.config.backend.base_url;
                Ok(match format.as_str() {
                    "json" => format_health_json(&report, url),
                    _ => format_health_text(&report, url, self.color),
                })
            }
            Commands::List { format } => {
                let rt = current_thread_runtime()?;
                let services = rt.block_on(self.backend.list_services())?;
                Ok(match format.as_str() {
                    "json" => format_services_json(&services),
                    _ => format_services_text(&services),
                })
            }
            Commands::Config { format } => format_config(&self.config, format),
        }
    }

    fn controller(&self, show_pending: bool) -> WorkflowController {
        let backend: Arc<dyn GenerationBackend> = self.backend.clone();
        let controller = WorkflowController::new(backend);
        if show_pending {
            controller.with_observer(|snapshot| {
                if snapshot.in_flight() {
                    eprintln!("{}", SUBMIT_LABEL_PENDING);
                }
            })
        } else {
            controller
        }
    }

    fn render(&self, controller: &WorkflowController, format: &str) -> String {
        let view = render(&controller.snapshot());
        match format {
            "json" => format_view_json(&view),
            _ => format_view_text(&view, self.color),
        }
    }

    fn handle_generate(&self, requirement: String, format: &str) -> Result<String, ApiError> {
        let (outcome, view) = self.run_generate(requirement, format)?;
        match outcome {
            Outcome::Success => Ok(view),
            Outcome::Failure(failure) => {
                // The failure notice is part of the view; the error itself goes to stderr.
                println!("{}", view);
                Err(ApiError::from(&failure))
            }
        }
    }

    /// One submit → settle cycle, returning the outcome and the view rendered after it.
    fn run_generate(&self, requirement: String, format: &str) -> Result<(Outcome, String), ApiError> {
        let controller = self.controller(format != "json");
        controller.update_requirement(requirement);

        let rt = current_thread_runtime()?;
        let outcome = rt.block_on(controller.submit())?;
        Ok((outcome, self.render(&controller, format)))
    }

    fn handle_session(&self, format: &str) -> Result<String, ApiError> {
        use dialoguer::Input;

        let controller = self.controller(format != "json");
        let rt = current_thread_runtime()?;
        let mut submissions = 0usize;

        loop {
            let line: String = Input::new()
                .with_prompt("Requirement (:quit to exit)")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;

            if SESSION_QUIT.contains(&line.trim()) {
                break;
            }

            controller.update_requirement(line);
            if !controller.can_submit() {
                println!("{}", self.render(&controller, format));
                continue;
            }

            rt.block_on(controller.submit())?;
            submissions += 1;
            println!("{}", self.render(&controller, format));
        }

        Ok(format!("Session ended after {} submission(s)", submissions))
    }
}

/// Single logical thread; the submission's request is the only suspension point.
fn current_thread_runtime() -> Result<tokio::runtime::Runtime, ApiError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ApiError::ConfigError(format!("Failed to create runtime: {}", e)))
}

/// Requirement text from the positional argument or a file, verbatim.
pub(crate) fn read_requirement(
    requirement: Option<&str>,
    file: Option<&Path>,
) -> Result<String, ApiError> {
    match (requirement, file) {
        (Some(text), _) => Ok(text.to_string()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => Err(ApiError::EmptyRequirement),
    }
}
