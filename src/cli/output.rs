//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Transport(_) => format!(
            "{}\nIs the generation backend running? Check --backend-url or [backend].base_url.",
            e
        ),
        ApiError::EmptyRequirement => {
            format!("{}\nPass the requirement as an argument or with --file.", e)
        }
        _ => e.to_string(),
    }
}
