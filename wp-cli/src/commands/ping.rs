//! Ping command - check that the site's REST API answers with these credentials.

use std::path::Path;

use console::style;

use wp_core::config::AppConfig;
use wp_core::error::WpResult;

use crate::OutputFormat;

/// Run the ping command.
///
/// Fetches the REST index and, when `save_to` is given and the call
/// succeeded, writes the effective configuration there.
pub async fn run(config: &AppConfig, save_to: Option<&Path>, format: OutputFormat) -> WpResult<()> {
    let api = super::create_api_client(config)?;

    let start = std::time::Instant::now();
    let info = api.site_info().await?;
    let latency_ms = start.elapsed().as_millis();

    if let Some(path) = save_to {
        config.save_to_file(path)?;
        tracing::info!("saved connection settings to {}", path.display());
    }

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "base_url": api.base_url(),
                "url_style": api.url_style(),
                "latency_ms": latency_ms,
                "site": info,
            });
            super::print_json(&json)?;
        }
        OutputFormat::Text => {
            println!("{}", style("Site").bold().underlined());
            println!("  Address:    {}", api.base_url());
            println!(
                "  Status:     {} ({}ms)",
                style("reachable").green(),
                latency_ms
            );
            if !info.name.is_empty() {
                println!("  Name:       {}", info.name);
            }
            if !info.description.is_empty() {
                println!("  Tagline:    {}", info.description);
            }
            println!("  API root:   {}", api.endpoint_url(""));
            let has_v2 = info.namespaces.iter().any(|ns| ns == "wp/v2");
            println!(
                "  wp/v2:      {}",
                if has_v2 {
                    style("available").green().to_string()
                } else {
                    style("missing").red().to_string()
                }
            );
            if let Some(path) = save_to {
                println!();
                println!("Saved settings to {}", path.display());
            }
        }
    }

    Ok(())
}
