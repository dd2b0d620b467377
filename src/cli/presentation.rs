//! CLI presentation for the auxiliary commands: health, list, config.
//! The generation view itself lives in `crate::presentation`.

use crate::backend::{HealthReport, ServiceRecord};
use crate::config::BuilderConfig;
use crate::error::ApiError;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn format_health_text(report: &HealthReport, backend_url: &str, color: bool) -> String {
    let status = if color {
        if report.status == "healthy" {
            format!("{}", report.status.green())
        } else {
            format!("{}", report.status.yellow())
        }
    } else {
        report.status.clone()
    };
    let mut output = format!("Backend: {}\nStatus: {}\n", backend_url, status);
    if let Some(service) = &report.service {
        output.push_str(&format!("Service: {}\n", service));
    }
    if let Some(timestamp) = &report.timestamp {
        output.push_str(&format!("Timestamp: {}\n", timestamp));
    }
    if let Some(connections) = report.connections {
        output.push_str(&format!("Connections: {}\n", connections));
    }
    output
}

pub fn format_health_json(report: &HealthReport, backend_url: &str) -> String {
    let out = json!({ "backend": backend_url, "health": report });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_services_text(services: &[ServiceRecord]) -> String {
    if services.is_empty() {
        return "No generated services found.\n\nUse 'mcp-builder generate' to create one."
            .to_string();
    }
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Type", "Endpoint", "Status", "Created"]);
    for service in services {
        table.add_row(vec![
            service.mcp_id.as_deref().unwrap_or("-"),
            service.mcp_name.as_deref().unwrap_or("-"),
            service.mcp_type.as_deref().unwrap_or("-"),
            service.endpoint.as_deref().unwrap_or("-"),
            service.status.as_deref().unwrap_or("-"),
            service.created_at.as_deref().unwrap_or("-"),
        ]);
    }
    format!("{}\n\nTotal: {} service(s)", table, services.len())
}

pub fn format_services_json(services: &[ServiceRecord]) -> String {
    let out = json!({ "services": services, "total": services.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_config(config: &BuilderConfig, format: &str) -> Result<String, ApiError> {
    match format {
        "toml" => toml::to_string_pretty(config)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e))),
        "json" => serde_json::to_string_pretty(config)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e))),
        other => Err(ApiError::ConfigError(format!(
            "Invalid format: {} (must be 'toml' or 'json')",
            other
        ))),
    }
}
