//! WordPress API - HTTP client for the WordPress REST API.
//!
//! Every call flows through [`ApiClient::execute`], which attaches the basic
//! auth header computed once at construction and classifies failures into
//! [`wp_core::WpError`]. List endpoints are drained page by page with
//! [`ApiClient::collect_all`]. Resource methods for posts, media, categories
//! and tags live in [`endpoints`] and are thin mappings over those two calls.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod models;
pub mod observer;
pub mod pagination;
pub mod request;

// Re-export key types
pub use auth::compute_auth_header;
pub use client::ApiClient;
pub use models::{
    Deleted, Media, MediaQuery, Post, PostParams, PostQuery, PostStatus, Rendered, SiteInfo, Term,
};
pub use observer::{NoopObserver, RequestObserver, TracingObserver};
pub use request::{ApiResponse, Attachment, HttpMethod, RequestSpec};
