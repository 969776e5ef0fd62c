//! Typed resources and request parameters.
//!
//! Fields the client does not use are left out; serde ignores them on input.
//! Every field carries a default so trimmed `_fields` responses still decode.

use serde::{Deserialize, Serialize};

/// A field WordPress returns as `{ "rendered": ..., "raw": ... }`.
///
/// `raw` is only present in `context=edit` responses, which authenticated
/// writes return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl Rendered {
    /// The raw source when available, else the rendered HTML.
    pub fn text(&self) -> &str {
        self.raw.as_deref().unwrap_or(&self.rendered)
    }
}

/// Publication status of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Publish,
    Future,
    Draft,
    Pending,
    Private,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Publish => "publish",
            PostStatus::Future => "future",
            PostStatus::Draft => "draft",
            PostStatus::Pending => "pending",
            PostStatus::Private => "private",
        }
    }
}

/// A post.
///
/// `status` stays a string: the server may report states (`trash`,
/// `auto-draft`, plugin statuses) that cannot be requested on write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub author: u64,
    #[serde(default)]
    pub featured_media: u64,
    #[serde(default)]
    pub categories: Vec<u64>,
    #[serde(default)]
    pub tags: Vec<u64>,
}

/// A media library item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub id: u64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub source_url: String,
}

/// A taxonomy term: category or tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub count: u64,
    /// Parent category id; always 0 for tags.
    #[serde(default)]
    pub parent: u64,
    #[serde(default)]
    pub taxonomy: String,
    #[serde(default)]
    pub link: String,
}

/// Result of a permanent delete (`force=true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deleted<T> {
    pub deleted: bool,
    pub previous: Option<T>,
}

/// The REST index served at the API root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub home: String,
    #[serde(default)]
    pub namespaces: Vec<String>,
}

/// Body for creating or updating a post.
///
/// Empty category and tag lists are left out of the payload so an update
/// does not clear the post's existing terms.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostParams {
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<u64>,
}

impl PostParams {
    /// Published post with the given title and content and nothing else set.
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            ..Self::default()
        }
    }
}

/// Filters for listing posts.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub status: Option<PostStatus>,
    pub categories: Vec<u64>,
    pub tags: Vec<u64>,
}

impl PostQuery {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(ref search) = self.search {
            query.push(("search".to_string(), search.clone()));
        }
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.as_str().to_string()));
        }
        if !self.categories.is_empty() {
            query.push(("categories".to_string(), join_ids(&self.categories)));
        }
        if !self.tags.is_empty() {
            query.push(("tags".to_string(), join_ids(&self.tags)));
        }
        query
    }
}

/// Filters for listing media.
#[derive(Debug, Clone, Default)]
pub struct MediaQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    /// `image`, `video`, `audio`, `application`.
    pub media_type: Option<String>,
    pub mime_type: Option<String>,
}

impl MediaQuery {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(ref search) = self.search {
            query.push(("search".to_string(), search.clone()));
        }
        if let Some(ref media_type) = self.media_type {
            query.push(("media_type".to_string(), media_type.clone()));
        }
        if let Some(ref mime_type) = self.mime_type {
            query.push(("mime_type".to_string(), mime_type.clone()));
        }
        query
    }
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_params_omit_empty_fields() {
        let params = PostParams::new("Hello", "<p>World</p>");
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            json!({"title": "Hello", "content": "<p>World</p>", "status": "publish"})
        );
    }

    #[test]
    fn test_post_params_full() {
        let params = PostParams {
            status: PostStatus::Draft,
            slug: Some("hello".into()),
            excerpt: Some("short".into()),
            categories: vec![3, 4],
            tags: vec![9],
            featured_media: Some(12),
            ..PostParams::new("Hello", "World")
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["status"], "draft");
        assert_eq!(body["categories"], json!([3, 4]));
        assert_eq!(body["tags"], json!([9]));
        assert_eq!(body["featured_media"], 12);
        assert_eq!(body["slug"], "hello");
    }

    #[test]
    fn test_post_decodes_server_shape() {
        let post: Post = serde_json::from_value(json!({
            "id": 42,
            "date": "2024-05-01T10:00:00",
            "slug": "hello",
            "status": "publish",
            "type": "post",
            "title": {"rendered": "Hello &#8211; World"},
            "content": {"rendered": "<p>Body</p>\n", "protected": false},
            "categories": [1],
            "tags": [],
            "_links": {"self": [{"href": "https://example.com/wp-json/wp/v2/posts/42"}]}
        }))
        .unwrap();
        assert_eq!(post.id, 42);
        assert_eq!(post.title.text(), "Hello &#8211; World");
        assert_eq!(post.categories, vec![1]);
        assert_eq!(post.featured_media, 0);
    }

    #[test]
    fn test_rendered_prefers_raw() {
        let field = Rendered {
            rendered: "<p>x</p>".into(),
            raw: Some("x".into()),
        };
        assert_eq!(field.text(), "x");
    }

    #[test]
    fn test_deleted_media_shape() {
        let deleted: Deleted<Media> = serde_json::from_value(json!({
            "deleted": true,
            "previous": {"id": 7, "source_url": "https://example.com/a.png"}
        }))
        .unwrap();
        assert!(deleted.deleted);
        assert_eq!(deleted.previous.unwrap().id, 7);
    }

    #[test]
    fn test_post_query_to_query() {
        let query = PostQuery {
            search: Some("rust".into()),
            status: Some(PostStatus::Draft),
            categories: vec![1, 2],
            ..PostQuery::default()
        };
        assert_eq!(
            query.to_query(),
            vec![
                ("search".to_string(), "rust".to_string()),
                ("status".to_string(), "draft".to_string()),
                ("categories".to_string(), "1,2".to_string()),
            ]
        );
        assert!(PostQuery::default().to_query().is_empty());
    }

    #[test]
    fn test_media_query_to_query() {
        let query = MediaQuery {
            per_page: Some(10),
            media_type: Some("image".into()),
            ..MediaQuery::default()
        };
        assert_eq!(
            query.to_query(),
            vec![
                ("per_page".to_string(), "10".to_string()),
                ("media_type".to_string(), "image".to_string()),
            ]
        );
    }
}
