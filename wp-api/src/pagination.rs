//! Draining paginated list endpoints.
//!
//! WordPress list endpoints return at most `per_page` items per request. The
//! collector walks pages 1, 2, 3, ... and stops at the first empty page,
//! which is the only exhaustion signal it trusts.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use wp_core::constants::PER_PAGE_LIMIT;
use wp_core::error::{WpError, WpResult};

use crate::client::ApiClient;
use crate::request::RequestSpec;

/// Position in a paginated walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageCursor {
    page: u32,
    per_page: u32,
}

impl PageCursor {
    fn first() -> Self {
        Self {
            page: 1,
            per_page: PER_PAGE_LIMIT,
        }
    }

    fn advance(&mut self) {
        self.page += 1;
    }

    /// Cursor parameters followed by the caller's extras.
    ///
    /// Extras named `page` or `per_page` are dropped; the cursor owns them.
    fn query(&self, extra: &[(String, String)]) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ];
        query.extend(
            extra
                .iter()
                .filter(|(k, _)| k != "page" && k != "per_page")
                .cloned(),
        );
        query
    }
}

impl ApiClient {
    /// Fetch every item of a list endpoint.
    ///
    /// Items are returned in page order, then in the order the server listed
    /// them; nothing is sorted or deduplicated. Any failure aborts the whole
    /// drain and no partial collection is returned. When the configured page
    /// ceiling is reached without an empty page, the call fails with
    /// `WpError::PaginationLimitExceeded`.
    pub async fn collect_all<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        extra_query: &[(String, String)],
    ) -> WpResult<Vec<T>> {
        let mut cursor = PageCursor::first();
        let mut items = Vec::new();

        loop {
            if self.max_pages != 0 && cursor.page > self.max_pages {
                warn!(
                    "{endpoint}: still non-empty after {} pages, giving up",
                    self.max_pages
                );
                return Err(WpError::PaginationLimitExceeded {
                    endpoint: endpoint.to_string(),
                    max_pages: self.max_pages,
                });
            }

            let spec = RequestSpec::get(endpoint).with_query(cursor.query(extra_query));
            let page: Vec<T> = self.execute(spec).await?.json()?;

            if page.is_empty() {
                debug!(
                    "{endpoint}: drained {} items over {} pages",
                    items.len(),
                    cursor.page - 1
                );
                return Ok(items);
            }

            items.extend(page);
            cursor.advance();
        }
    }
}
