//! Error types for the WordPress client.
//!
//! Every failure an API call can produce is folded into the single `WpError`
//! enum so callers can tell a client error (4xx) from a server error (5xx)
//! from a connectivity failure without touching transport-library types.

use std::fmt;

use thiserror::Error;

/// Convenience type alias for Results using WpError.
pub type WpResult<T> = Result<T, WpError>;

/// Body of an error response, as the server sent it.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// The response declared JSON content and parsed.
    Json(serde_json::Value),
    /// Anything else, verbatim.
    Text(String),
}

impl ErrorBody {
    /// Classify a raw error body using the response's content type.
    ///
    /// A body that claims to be JSON but does not parse is kept as text.
    pub fn from_response(content_type: Option<&str>, raw: String) -> Self {
        let declares_json = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("json"))
            .unwrap_or(false);
        if declares_json {
            if let Ok(value) = serde_json::from_str(&raw) {
                return ErrorBody::Json(value);
            }
        }
        ErrorBody::Text(raw)
    }

    /// The WordPress error `code` (e.g. `rest_post_invalid_id`), if present.
    pub fn code(&self) -> Option<&str> {
        match self {
            ErrorBody::Json(value) => value.get("code").and_then(|v| v.as_str()),
            ErrorBody::Text(_) => None,
        }
    }

    /// The human-readable `message` field, if present.
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorBody::Json(value) => value.get("message").and_then(|v| v.as_str()),
            ErrorBody::Text(_) => None,
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorBody::Json(value) => write!(f, "{value}"),
            ErrorBody::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Unified error type for every layer of the client.
#[derive(Error, Debug)]
pub enum WpError {
    // -- Construction / configuration --
    /// The client could not be constructed (missing base URL, bad transport settings).
    #[error("client construction failed: {0}")]
    Construction(String),

    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Transport --
    /// DNS, connection, TLS, or body read failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    // -- Server responses --
    /// The server answered with status >= 400.
    #[error("api error (status {status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error payload from the server.
        body: ErrorBody,
    },

    /// A successful response whose body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// A paginated endpoint kept returning non-empty pages past the ceiling.
    #[error("pagination limit exceeded: {endpoint} returned more than {max_pages} non-empty pages")]
    PaginationLimitExceeded {
        /// Endpoint being drained.
        endpoint: String,
        /// Configured page ceiling.
        max_pages: u32,
    },

    // -- Local --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Request payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WpError {
    /// HTTP status of an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            WpError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server error body of an `Api` error.
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            WpError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the server rejected the request (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(s) if (400..500).contains(&s))
    }

    /// Whether the server failed (5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(s) if s >= 500)
    }

    /// Whether no response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, WpError::Transport(_) | WpError::Timeout(_))
    }
}

impl From<toml::de::Error> for WpError {
    fn from(e: toml::de::Error) -> Self {
        WpError::Config(e.to_string())
    }
}
