//! WordPress client core - configuration, error handling, and logging.
//!
//! This crate provides the shared foundation used by the other workspace crates:
//! - Client configuration (base URL, credentials, URL style, limits)
//! - The error taxonomy every API call reports through
//! - Structured logging with tracing
//! - Platform directories and common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, ServerConfig, UrlStyle};
pub use error::{ErrorBody, WpError, WpResult};
pub use logging::init_logging;
