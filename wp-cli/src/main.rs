//! wpc - Command-line interface for the WordPress REST client.
//!
//! Talks to a WordPress site through application-password auth. Useful for
//! scripting content changes and for checking a site's REST setup.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use wp_core::config::{AppConfig, UrlStyle};
use wp_core::error::WpResult;
use wp_core::logging;

/// wpc - WordPress REST client.
#[derive(Parser)]
#[command(
    name = "wpc",
    version,
    about = "WordPress REST API client",
    long_about = "A command-line client for the WordPress REST API.\n\
                   Authenticates with an application password and manages posts, media and terms."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Site address (overrides config).
    #[arg(long, global = true, env = "WPC_BASE_URL")]
    base_url: Option<String>,

    /// Account name (overrides config).
    #[arg(short, long, global = true, env = "WPC_USERNAME")]
    username: Option<String>,

    /// Application password (overrides config).
    #[arg(long, global = true, env = "WPC_APP_PASSWORD", hide_env_values = true)]
    app_password: Option<String>,

    /// How endpoint URLs are built (overrides config).
    #[arg(long, global = true)]
    url_style: Option<UrlStyleArg>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum UrlStyleArg {
    /// `{base}/wp-json/{endpoint}`
    Pretty,
    /// `{base}/?rest_route=/{endpoint}`
    RestRoute,
}

impl From<UrlStyleArg> for UrlStyle {
    fn from(arg: UrlStyleArg) -> Self {
        match arg {
            UrlStyleArg::Pretty => UrlStyle::Pretty,
            UrlStyleArg::RestRoute => UrlStyle::RestRoute,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the site answers and the credentials work.
    Ping {
        /// Save connection settings to the config file after a successful ping.
        #[arg(long)]
        save: bool,
    },
    /// List and manage posts.
    Posts {
        #[command(subcommand)]
        action: commands::posts::PostsAction,
    },
    /// List, upload and delete media.
    Media {
        #[command(subcommand)]
        action: commands::media::MediaAction,
    },
    /// List and create categories.
    Categories {
        #[command(subcommand)]
        action: commands::terms::TermsAction,
    },
    /// List and create tags.
    Tags {
        #[command(subcommand)]
        action: commands::terms::TermsAction,
    },
}

#[tokio::main]
async fn main() -> WpResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = match cli.config {
        Some(path) => path,
        None => AppConfig::default_config_path()?,
    };
    let mut config = if config_path.exists() {
        AppConfig::load_from_file(&config_path)?
    } else {
        AppConfig::default()
    };

    // Initialize logging
    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let log_dir = config.effective_log_dir()?;
    let _guard = logging::init_logging(&log_level, &log_dir, config.logging.json_output)?;

    if let Some(base_url) = cli.base_url {
        config.server.base_url = base_url;
    }
    if let Some(username) = cli.username {
        config.server.username = username;
    }
    if let Some(app_password) = cli.app_password {
        config.server.app_password = app_password;
    }
    if let Some(url_style) = cli.url_style {
        config.server.url_style = url_style.into();
    }

    info!("wpc v{}", wp_core::constants::APP_VERSION);

    // Dispatch to command handlers
    match cli.command {
        Commands::Ping { save } => {
            commands::ping::run(&config, save.then_some(config_path.as_path()), cli.format).await
        }
        Commands::Posts { action } => commands::posts::run(&config, action, cli.format).await,
        Commands::Media { action } => commands::media::run(&config, action, cli.format).await,
        Commands::Categories { action } => {
            commands::terms::run(&config, commands::terms::Taxonomy::Category, action, cli.format)
                .await
        }
        Commands::Tags { action } => {
            commands::terms::run(&config, commands::terms::Taxonomy::Tag, action, cli.format).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_post_create_with_overrides() {
        let cli = Cli::try_parse_from([
            "wpc",
            "--base-url",
            "blog.example.com",
            "--url-style",
            "rest-route",
            "posts",
            "create",
            "--title",
            "Hello",
            "--content",
            "<p>Hi</p>",
            "--categories",
            "3,4",
            "--status",
            "draft",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("blog.example.com"));
        assert!(matches!(cli.url_style, Some(UrlStyleArg::RestRoute)));
        match cli.command {
            Commands::Posts {
                action: commands::posts::PostsAction::Create(_),
            } => {}
            _ => panic!("expected posts create"),
        }
    }

    #[test]
    fn test_parse_tags_create() {
        let cli = Cli::try_parse_from(["wpc", "-f", "json", "tags", "create", "rust"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::Tags {
                action: commands::terms::TermsAction::Create { ref name }
            } if name == "rust"
        ));
    }
}
