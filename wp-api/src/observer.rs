//! Request lifecycle hooks.
//!
//! The client reports each call to a [`RequestObserver`] but never depends on
//! it. The default observer does nothing; [`TracingObserver`] forwards events
//! to `tracing`.

use tracing::{debug, warn};

use wp_core::error::WpError;

use crate::request::{HttpMethod, RequestSpec};

/// Receives request, response and error events from [`crate::ApiClient`].
///
/// Implementations must be cheap and must not panic; they run inline on the
/// request path.
pub trait RequestObserver: Send + Sync {
    /// Called before the request is sent, with the fully joined URL.
    fn on_request(&self, _spec: &RequestSpec, _url: &str) {}

    /// Called after a response with status < 400.
    fn on_response(&self, _method: HttpMethod, _url: &str, _status: u16) {}

    /// Called when the call fails for any reason.
    fn on_error(&self, _method: HttpMethod, _url: &str, _error: &WpError) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {}

/// Observer that logs every event through `tracing`.
///
/// Request bodies are logged at trace level only; the auth header is never
/// part of the event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, spec: &RequestSpec, url: &str) {
        debug!(
            method = %spec.method,
            query = ?spec.query,
            attachment = spec.attachment.as_ref().map(|a| a.file_name.as_str()),
            "{} {}",
            spec.method,
            url
        );
        if let Some(ref body) = spec.body {
            tracing::trace!(%body, "request body");
        }
    }

    fn on_response(&self, method: HttpMethod, url: &str, status: u16) {
        debug!(%status, "{method} {url} ok");
    }

    fn on_error(&self, method: HttpMethod, url: &str, error: &WpError) {
        warn!("{method} {url} failed: {error}");
    }
}
