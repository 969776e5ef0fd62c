//! CLI command implementations.

pub mod media;
pub mod ping;
pub mod posts;
pub mod terms;

use std::sync::Arc;

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

use wp_api::{ApiClient, TracingObserver};
use wp_core::config::AppConfig;
use wp_core::error::{WpError, WpResult};

/// Helper to create an API client from config.
///
/// Fails early when no site or account is configured, so commands never
/// send anonymous requests by accident.
pub fn create_api_client(config: &AppConfig) -> WpResult<ApiClient> {
    if !config.is_server_configured() {
        return Err(WpError::MissingConfig(
            "set server.base_url and server.username in the config file, \
             or pass --base-url and --username"
                .into(),
        ));
    }
    Ok(ApiClient::new(&config.server)?.with_observer(Arc::new(TracingObserver)))
}

/// Table with the shared look used by every list command.
pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Pretty-print any serializable value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> WpResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| WpError::Serialization(e.to_string()))?;
    println!("{json}");
    Ok(())
}

/// Format a byte count as a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Truncate a string to a maximum number of characters, appending an
/// ellipsis if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}
