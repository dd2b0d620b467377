//! mcp-builder: natural-language service generation client
//!
//! Holds one generation session (requirement text, in-flight state, last result), sends
//! the requirement to a generation backend, and renders the returned artifact summary.

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod logging;
pub mod presentation;
pub mod workflow;
