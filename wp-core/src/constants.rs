//! Application-wide constants.

/// Application name, used for platform directories and log file names.
pub const APP_NAME: &str = "wp-client";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Path segment under which the REST API is mounted in the pretty URL style.
pub const REST_PREFIX: &str = "wp-json";

/// Query parameter carrying the route in the `rest_route` URL style.
pub const REST_ROUTE_PARAM: &str = "rest_route";

/// Items requested per page by every paginated list call.
pub const PER_PAGE_LIMIT: u32 = 100;

/// Default ceiling on pages drained by a single paginated call.
pub const DEFAULT_MAX_PAGES: u32 = 1_000;

/// Default API request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// TCP connect timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 15;

/// Resource endpoints of the `wp/v2` namespace.
pub mod endpoints {
    pub const POSTS: &str = "wp/v2/posts";
    pub const MEDIA: &str = "wp/v2/media";
    pub const CATEGORIES: &str = "wp/v2/categories";
    pub const TAGS: &str = "wp/v2/tags";
}

/// File name used for a downloaded media payload when the source URL has none.
pub const DEFAULT_MEDIA_FILE_NAME: &str = "image.jpeg";

/// Guess a MIME type from a file name's extension.
pub fn mime_for_file_name(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "pdf" => "application/pdf",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        _ => "application/octet-stream",
    }
}
