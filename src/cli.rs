//! CLI domain: parse, route, help, output, and presentation only.
//! No workflow logic; the route table drives the workflow controller and formats results.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_config, format_health_json, format_health_text, format_services_json,
    format_services_text,
};
pub use route::RunContext;
