//! Platform-specific directories.

use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::{WpError, WpResult};

/// Application data directory (log files live under `logs/`).
///
/// - Windows: `%APPDATA%/wp-client`
/// - macOS: `~/Library/Application Support/wp-client`
/// - Linux: `~/.local/share/wp-client`
pub fn data_dir() -> WpResult<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| WpError::Config("could not determine data directory".into()))?;
    Ok(base.join(APP_NAME))
}

/// Application configuration directory.
///
/// - Windows: `%APPDATA%/wp-client`
/// - macOS: `~/Library/Application Support/wp-client`
/// - Linux: `~/.config/wp-client`
pub fn config_dir() -> WpResult<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| WpError::Config("could not determine config directory".into()))?;
    Ok(base.join(APP_NAME))
}
