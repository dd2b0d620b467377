//! Environment source: MCP_BUILDER__BACKEND__BASE_URL and friends.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

/// Add the environment override layer; always highest precedence.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("MCP_BUILDER")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
