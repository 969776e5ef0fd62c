//! REST index.

use wp_core::error::WpResult;

use crate::client::ApiClient;
use crate::models::SiteInfo;

impl ApiClient {
    /// Fetch the REST index at the API root. Doubles as a connectivity and
    /// credential check.
    pub async fn site_info(&self) -> WpResult<SiteInfo> {
        self.get_json("", Vec::new()).await
    }
}
