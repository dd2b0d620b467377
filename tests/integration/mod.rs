//! Integration tests for the generation workflow

mod presentation_render;
mod response_validation;
mod test_utils;
mod workflow_cycle;

pub use test_utils::*;
