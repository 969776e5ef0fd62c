//! Post endpoints.

use wp_core::constants::endpoints::POSTS;
use wp_core::error::{WpError, WpResult};

use crate::client::ApiClient;
use crate::models::{Post, PostParams, PostQuery};

impl ApiClient {
    /// List one page of posts.
    pub async fn list_posts(&self, query: &PostQuery) -> WpResult<Vec<Post>> {
        self.get_json(POSTS, query.to_query()).await
    }

    /// List every post matching the filters, across all pages.
    ///
    /// `page` and `per_page` in `query` are ignored.
    pub async fn all_posts(&self, query: &PostQuery) -> WpResult<Vec<Post>> {
        self.collect_all(POSTS, &query.to_query()).await
    }

    /// Get a single post by id.
    pub async fn get_post(&self, post_id: u64) -> WpResult<Post> {
        self.get_json(&format!("{POSTS}/{post_id}"), Vec::new()).await
    }

    /// Create a post.
    pub async fn create_post(&self, params: &PostParams) -> WpResult<Post> {
        let body =
            serde_json::to_value(params).map_err(|e| WpError::Serialization(e.to_string()))?;
        self.post_json(POSTS, body).await
    }

    /// Update an existing post. Only the fields present in `params` change.
    pub async fn update_post(&self, post_id: u64, params: &PostParams) -> WpResult<Post> {
        let body =
            serde_json::to_value(params).map_err(|e| WpError::Serialization(e.to_string()))?;
        self.post_json(&format!("{POSTS}/{post_id}"), body).await
    }

    /// Move a post to the trash. Returns the server's response verbatim.
    pub async fn delete_post(&self, post_id: u64) -> WpResult<serde_json::Value> {
        self.delete_json(&format!("{POSTS}/{post_id}"), None).await
    }
}
