//! Category endpoints.

use serde_json::json;
use wp_core::constants::endpoints::CATEGORIES;
use wp_core::error::WpResult;

use crate::client::ApiClient;
use crate::models::Term;

impl ApiClient {
    /// Every category on the site.
    pub async fn list_categories(&self) -> WpResult<Vec<Term>> {
        self.collect_all(CATEGORIES, &[]).await
    }

    /// Create a category.
    pub async fn create_category(&self, name: &str) -> WpResult<Term> {
        self.post_json(CATEGORIES, json!({ "name": name })).await
    }
}
