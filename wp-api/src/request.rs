//! Request and response values passed through the executor.
//!
//! A [`RequestSpec`] is built per call and consumed by
//! [`ApiClient::execute`](crate::ApiClient::execute). A successful exchange
//! yields an [`ApiResponse`] whose body is decoded on demand.

use serde::de::DeserializeOwned;

use wp_core::error::{WpError, WpResult};

/// HTTP methods used by the WordPress REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A binary payload uploaded as the multipart `file` field.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Attachment with a MIME type guessed from the file name.
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime_type: wp_core::constants::mime_for_file_name(file_name).to_string(),
            bytes,
        }
    }

    pub(crate) fn into_form(self) -> WpResult<reqwest::multipart::Form> {
        let part = reqwest::multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)
            .map_err(|e| WpError::Serialization(format!("invalid mime type: {e}")))?;
        Ok(reqwest::multipart::Form::new().part("file", part))
    }
}

/// One API call: method, endpoint relative to the REST base, and payload.
///
/// `body` and `attachment` are mutually exclusive in practice; when both are
/// set the attachment wins.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub endpoint: String,
    pub body: Option<serde_json::Value>,
    pub query: Vec<(String, String)>,
    pub attachment: Option<Attachment>,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            query: Vec::new(),
            attachment: None,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, endpoint)
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

/// A response with status < 400.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    url: String,
    total: Option<u64>,
    total_pages: Option<u64>,
    body: String,
}

impl ApiResponse {
    pub(crate) fn new(status: u16, url: String, body: String) -> Self {
        Self {
            status,
            url,
            total: None,
            total_pages: None,
            body,
        }
    }

    pub(crate) fn with_totals(mut self, total: Option<u64>, total_pages: Option<u64>) -> Self {
        self.total = total;
        self.total_pages = total_pages;
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Final URL of the exchange, after redirects.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// `X-WP-Total` header, when the endpoint reports it. Informational only.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// `X-WP-TotalPages` header, when the endpoint reports it. Informational only.
    pub fn total_pages(&self) -> Option<u64> {
        self.total_pages
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decode the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> WpResult<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| WpError::Decode(format!("{}: {e}", self.url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_spec_builders() {
        let spec = RequestSpec::post("wp/v2/tags").with_body(serde_json::json!({"name": "rust"}));
        assert_eq!(spec.method, HttpMethod::Post);
        assert_eq!(spec.endpoint, "wp/v2/tags");
        assert!(spec.query.is_empty());
        assert!(spec.attachment.is_none());
        assert_eq!(spec.body.unwrap()["name"], "rust");
    }

    #[test]
    fn test_fresh_defaults_per_request() {
        let mut first = RequestSpec::get("wp/v2/posts");
        first.query.push(("search".into(), "x".into()));
        let second = RequestSpec::get("wp/v2/posts");
        assert!(second.query.is_empty());
    }

    #[test]
    fn test_attachment_guesses_mime() {
        let att = Attachment::new("cover.png", vec![1, 2, 3]);
        assert_eq!(att.mime_type, "image/png");
        assert!(att.into_form().is_ok());
    }

    #[test]
    fn test_json_decode_error() {
        let resp = ApiResponse::new(200, "http://x/wp-json/wp/v2/posts".into(), "<html>".into());
        let err = resp.json::<Vec<serde_json::Value>>().unwrap_err();
        assert!(matches!(err, WpError::Decode(_)));
    }

    #[test]
    fn test_json_decode_success() {
        let resp = ApiResponse::new(200, "u".into(), r#"[{"id":1},{"id":2}]"#.into());
        let items: Vec<serde_json::Value> = resp.json().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(resp.text(), r#"[{"id":1},{"id":2}]"#);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(HttpMethod::Get.to_reqwest(), reqwest::Method::GET);
    }
}
