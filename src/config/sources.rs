//! Configuration sources, in precedence order (lowest first).

pub mod environment;
pub mod global_file;
pub mod workspace_file;
