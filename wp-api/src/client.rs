//! HTTP client for the WordPress REST API.
//!
//! Owns the base URL, the precomputed auth header and the transport, and is
//! the single place where failures are classified into `WpError`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use wp_core::config::{AppConfig, ServerConfig, UrlStyle};
use wp_core::constants;
use wp_core::error::{ErrorBody, WpError, WpResult};

use crate::auth::compute_auth_header;
use crate::observer::{NoopObserver, RequestObserver};
use crate::request::{ApiResponse, Attachment, RequestSpec};

/// HTTP client for one WordPress site.
///
/// Cheap to clone; clones share the connection pool. No call mutates shared
/// state, so a client can serve concurrent callers.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) inner: Client,
    /// Sanitized site address, no trailing slash.
    base_url: String,
    url_style: UrlStyle,
    /// `Basic ...` value computed once at construction.
    auth_header: HeaderValue,
    /// Extra headers from configuration, validated at construction.
    custom_headers: HeaderMap,
    /// Page ceiling for `collect_all`; 0 means unbounded.
    pub(crate) max_pages: u32,
    observer: Arc<dyn RequestObserver>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("url_style", &self.url_style)
            .field("max_pages", &self.max_pages)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new ApiClient from server configuration.
    ///
    /// Fails with `WpError::Construction` before any network activity when
    /// the base URL is empty.
    pub fn new(config: &ServerConfig) -> WpResult<Self> {
        let base_url = AppConfig::sanitize_base_url(&config.base_url);
        if base_url.is_empty() {
            return Err(WpError::Construction("base_url is empty".into()));
        }

        let mut builder = Client::builder()
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .connect_timeout(Duration::from_secs(constants::CONNECT_TIMEOUT_SECS))
            .pool_idle_timeout(Duration::from_secs(90));

        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| WpError::Construction(format!("failed to build HTTP client: {e}")))?;

        let mut auth_header =
            HeaderValue::from_str(&compute_auth_header(&config.username, &config.app_password))
                .map_err(|e| WpError::Construction(format!("invalid auth header: {e}")))?;
        auth_header.set_sensitive(true);

        let custom_headers = parse_custom_headers(&config.custom_headers)?;

        Ok(Self {
            inner,
            base_url,
            url_style: config.url_style,
            auth_header,
            custom_headers,
            max_pages: config.max_pages,
            observer: Arc::new(NoopObserver),
        })
    }

    /// Install a request observer.
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Override the pagination page ceiling (0 = unbounded).
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_style(&self) -> UrlStyle {
        self.url_style
    }

    /// Full URL for an endpoint under the configured URL style.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        self.url_style.join(&self.base_url, endpoint)
    }

    /// Execute one API call.
    ///
    /// Status >= 400 becomes `WpError::Api` carrying the server's error body;
    /// connectivity problems become `Transport`/`Timeout`. Nothing is retried.
    pub async fn execute(&self, spec: RequestSpec) -> WpResult<ApiResponse> {
        let url = self.endpoint_url(&spec.endpoint);
        let method = spec.method;
        self.observer.on_request(&spec, &url);

        let result = self.send(spec, &url).await;
        match &result {
            Ok(resp) => self.observer.on_response(method, &url, resp.status()),
            Err(err) => self.observer.on_error(method, &url, err),
        }
        result
    }

    async fn send(&self, spec: RequestSpec, url: &str) -> WpResult<ApiResponse> {
        let mut builder = self
            .inner
            .request(spec.method.to_reqwest(), url)
            .headers(self.custom_headers.clone())
            .header(AUTHORIZATION, self.auth_header.clone());

        if !spec.query.is_empty() {
            builder = builder.query(&spec.query);
        }
        if let Some(attachment) = spec.attachment {
            builder = builder.multipart(attachment.into_form()?);
        } else if let Some(ref body) = spec.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(classify_error)?;
        check_status(response).await
    }

    // --- Convenience wrappers ---

    /// GET + decode.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Vec<(String, String)>,
    ) -> WpResult<T> {
        self.execute(RequestSpec::get(endpoint).with_query(query))
            .await?
            .json()
    }

    /// POST a JSON body + decode.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> WpResult<T> {
        self.execute(RequestSpec::post(endpoint).with_body(body))
            .await?
            .json()
    }

    /// DELETE with an optional JSON body + decode.
    pub async fn delete_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> WpResult<T> {
        let mut spec = RequestSpec::delete(endpoint);
        spec.body = body;
        self.execute(spec).await?.json()
    }

    /// POST a multipart file upload + decode.
    pub async fn upload_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        attachment: Attachment,
    ) -> WpResult<T> {
        self.execute(RequestSpec::post(endpoint).with_attachment(attachment))
            .await?
            .json()
    }
}

/// Convert a received response into an `ApiResponse` or `WpError::Api`.
async fn check_status(response: Response) -> WpResult<ApiResponse> {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let total = header_u64(&response, "x-wp-total");
    let total_pages = header_u64(&response, "x-wp-totalpages");

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) if status >= 400 => {
            warn!("{url} returned {status}, body unreadable: {e}");
            String::new()
        }
        Err(e) => return Err(WpError::Transport(format!("failed to read response body: {e}"))),
    };

    if status >= 400 {
        debug!("{url} returned {status}");
        return Err(WpError::Api {
            status,
            body: ErrorBody::from_response(content_type.as_deref(), body),
        });
    }

    Ok(ApiResponse::new(status, url, body).with_totals(total, total_pages))
}

/// Validate configured extra headers.
///
/// `Authorization` is rejected: the client always sends its own.
fn parse_custom_headers(
    headers: &std::collections::HashMap<String, String>,
) -> WpResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|e| WpError::Construction(format!("invalid header name {name:?}: {e}")))?;
        if header_name == AUTHORIZATION {
            return Err(WpError::Construction(
                "custom headers may not override authorization".into(),
            ));
        }
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            WpError::Construction(format!("invalid value for header {name:?}: {e}"))
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

fn header_u64(response: &Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Classify a reqwest error into a WpError variant.
pub(crate) fn classify_error(e: reqwest::Error) -> WpError {
    if e.is_timeout() {
        WpError::Timeout(e.to_string())
    } else if e.is_connect() {
        WpError::Transport(format!("connection failed: {e}"))
    } else {
        WpError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig::new("https://blog.example.com/", "editor", "abcd efgh")
    }

    #[test]
    fn test_empty_base_url_fails_construction() {
        for base in ["", "   ", "\"\""] {
            let config = ServerConfig::new(base, "editor", "secret");
            let err = ApiClient::new(&config).unwrap_err();
            assert!(matches!(err, WpError::Construction(_)), "{base:?}");
        }
    }

    #[test]
    fn test_invalid_custom_header_fails_construction() {
        let mut bad_name = test_config();
        bad_name
            .custom_headers
            .insert("bad header\n".into(), "x".into());
        let err = ApiClient::new(&bad_name).unwrap_err();
        assert!(matches!(err, WpError::Construction(_)), "{err:?}");

        let mut bad_value = test_config();
        bad_value
            .custom_headers
            .insert("X-Site-Token".into(), "line\nbreak".into());
        let err = ApiClient::new(&bad_value).unwrap_err();
        assert!(matches!(err, WpError::Construction(_)), "{err:?}");
    }

    #[test]
    fn test_custom_authorization_header_is_rejected() {
        for name in ["Authorization", "authorization"] {
            let mut config = test_config();
            config
                .custom_headers
                .insert(name.into(), "Bearer other".into());
            let err = ApiClient::new(&config).unwrap_err();
            assert!(matches!(err, WpError::Construction(_)), "{name}");
        }
    }

    #[test]
    fn test_valid_custom_headers_are_kept() {
        let mut config = test_config();
        config
            .custom_headers
            .insert("X-Site-Token".into(), "abc".into());
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.custom_headers.len(), 1);
        assert_eq!(client.custom_headers["x-site-token"], "abc");
    }

    #[test]
    fn test_base_url_is_sanitized() {
        let client = ApiClient::new(&test_config()).unwrap();
        assert_eq!(client.base_url(), "https://blog.example.com");
        assert_eq!(
            client.endpoint_url("wp/v2/posts"),
            "https://blog.example.com/wp-json/wp/v2/posts"
        );
    }

    #[test]
    fn test_rest_route_style() {
        let mut config = test_config();
        config.url_style = UrlStyle::RestRoute;
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint_url("wp/v2/tags"),
            "https://blog.example.com/?rest_route=/wp/v2/tags"
        );
    }

    #[test]
    fn test_auth_header_is_sensitive() {
        let client = ApiClient::new(&test_config()).unwrap();
        assert!(client.auth_header.is_sensitive());
        assert_eq!(
            client.auth_header.to_str().unwrap(),
            compute_auth_header("editor", "abcd efgh")
        );
        assert!(!format!("{client:?}").contains("Basic"));
    }

    #[test]
    fn test_max_pages_override() {
        let client = ApiClient::new(&test_config()).unwrap();
        assert_eq!(client.max_pages, constants::DEFAULT_MAX_PAGES);
        assert_eq!(client.with_max_pages(0).max_pages, 0);
    }
}
