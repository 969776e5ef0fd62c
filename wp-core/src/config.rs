//! Client configuration.
//!
//! Holds the site address, credentials, URL style and transport limits, plus
//! logging preferences. Configuration is persisted as TOML on disk; every
//! field has a serde default so partial files load cleanly.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{self, DEFAULT_API_TIMEOUT_MS, DEFAULT_MAX_PAGES};
use crate::error::{WpError, WpResult};
use crate::platform;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Site connection settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the REST base and an endpoint are joined into a URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlStyle {
    /// `{base_url}/wp-json/{endpoint}`
    #[default]
    Pretty,
    /// `{base_url}/?rest_route=/{endpoint}`, for sites without permalinks.
    RestRoute,
}

impl UrlStyle {
    /// Build the request URL for `endpoint` under `base_url`.
    ///
    /// `base_url` is expected without a trailing slash and `endpoint` without
    /// a leading one; no further normalization is applied.
    pub fn join(&self, base_url: &str, endpoint: &str) -> String {
        match self {
            UrlStyle::Pretty => format!("{base_url}/{}/{endpoint}", constants::REST_PREFIX),
            UrlStyle::RestRoute => {
                format!("{base_url}/?{}=/{endpoint}", constants::REST_ROUTE_PARAM)
            }
        }
    }
}

/// Site connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Site address (e.g., "https://blog.example.com").
    #[serde(default)]
    pub base_url: String,

    /// Account user name.
    #[serde(default)]
    pub username: String,

    /// Application password issued for this client.
    #[serde(default)]
    pub app_password: String,

    /// URL joining convention.
    #[serde(default)]
    pub url_style: UrlStyle,

    /// Extra HTTP headers sent with every request.
    #[serde(default)]
    pub custom_headers: HashMap<String, String>,

    /// API request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,

    /// Accept invalid or self-signed TLS certificates.
    #[serde(default)]
    pub accept_invalid_certs: bool,

    /// Maximum pages a paginated call may drain. 0 disables the ceiling.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses the platform data directory.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

fn default_api_timeout() -> u64 {
    DEFAULT_API_TIMEOUT_MS
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            username: String::new(),
            app_password: String::new(),
            url_style: UrlStyle::default(),
            custom_headers: HashMap::new(),
            api_timeout_ms: default_api_timeout(),
            accept_invalid_certs: false,
            max_pages: default_max_pages(),
        }
    }
}

impl ServerConfig {
    /// Minimal config for a site and credential pair, everything else default.
    pub fn new(base_url: &str, username: &str, app_password: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            username: username.to_string(),
            app_password: app_password.to_string(),
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default config file path, or defaults if absent.
    pub fn load_default() -> WpResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> WpResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> WpResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| WpError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Default configuration file path.
    pub fn default_config_path() -> WpResult<PathBuf> {
        Ok(platform::config_dir()?.join("config.toml"))
    }

    /// Effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> WpResult<PathBuf> {
        if self.logging.directory.is_empty() {
            Ok(platform::data_dir()?.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Whether a site address and credentials are present.
    pub fn is_server_configured(&self) -> bool {
        !self.server.base_url.trim().is_empty() && !self.server.username.is_empty()
    }

    /// Sanitize a site address.
    ///
    /// Trims whitespace and quotes, defaults the scheme to https, and strips
    /// trailing slashes. An empty input stays empty.
    pub fn sanitize_base_url(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }
}
