//! Tag endpoints.

use serde_json::json;
use wp_core::constants::endpoints::TAGS;
use wp_core::error::WpResult;

use crate::client::ApiClient;
use crate::models::Term;

impl ApiClient {
    /// Every tag on the site.
    pub async fn list_tags(&self) -> WpResult<Vec<Term>> {
        self.collect_all(TAGS, &[]).await
    }

    /// Create a tag.
    pub async fn create_tag(&self, name: &str) -> WpResult<Term> {
        self.post_json(TAGS, json!({ "name": name })).await
    }
}
