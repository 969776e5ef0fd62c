//! Media endpoints.

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use wp_core::constants::{endpoints::MEDIA, DEFAULT_MEDIA_FILE_NAME};
use wp_core::error::{ErrorBody, WpError, WpResult};

use crate::client::{classify_error, ApiClient};
use crate::models::{Deleted, Media, MediaQuery};
use crate::request::Attachment;

impl ApiClient {
    /// List one page of media items.
    pub async fn list_media(&self, query: &MediaQuery) -> WpResult<Vec<Media>> {
        self.get_json(MEDIA, query.to_query()).await
    }

    /// Upload bytes as a new media item.
    pub async fn upload_media(&self, file_name: &str, bytes: Vec<u8>) -> WpResult<Media> {
        self.upload_json(MEDIA, Attachment::new(file_name, bytes)).await
    }

    /// Upload a file from disk as a new media item.
    pub async fn upload_media_file(&self, path: &std::path::Path) -> WpResult<Media> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_MEDIA_FILE_NAME)
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        self.upload_media(&file_name, bytes).await
    }

    /// Download a remote file and upload it as a new media item.
    ///
    /// The payload is staged in a uniquely named temporary file that is
    /// removed on every exit path.
    pub async fn upload_media_from_url(&self, source_url: &str) -> WpResult<Media> {
        let file_name = file_name_from_url(source_url);
        let staged = self.stage_download(source_url, &file_name).await?;
        let bytes = tokio::fs::read(staged.path()).await?;
        self.upload_media(&file_name, bytes).await
    }

    /// Permanently delete a media item. Media cannot be trashed, so `force`
    /// is always sent.
    pub async fn delete_media(&self, media_id: u64) -> WpResult<Deleted<Media>> {
        self.delete_json(&format!("{MEDIA}/{media_id}"), Some(json!({ "force": true })))
            .await
    }

    /// Download `source_url` into a fresh temporary file.
    ///
    /// The request goes to an arbitrary host, so the site's auth header is
    /// not attached.
    pub(crate) async fn stage_download(
        &self,
        source_url: &str,
        file_name: &str,
    ) -> WpResult<NamedTempFile> {
        debug!("downloading media from {source_url}");
        let response = self
            .inner
            .get(source_url)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("download of {source_url} returned {status}, body unreadable: {e}");
                    String::new()
                }
            };
            return Err(WpError::Api {
                status,
                body: ErrorBody::Text(body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| WpError::Transport(format!("failed to read download body: {e}")))?;

        let suffix = file_name
            .rsplit_once('.')
            .map(|(_, ext)| format!(".{ext}"))
            .unwrap_or_default();
        let mut staged = tempfile::Builder::new()
            .prefix("wp-media-")
            .suffix(&suffix)
            .tempfile()?;
        staged.write_all(&bytes)?;
        staged.flush()?;
        debug!("staged {} bytes at {}", bytes.len(), staged.path().display());
        Ok(staged)
    }
}

/// Last path segment of a URL, ignoring query and fragment.
fn file_name_from_url(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.path_segments().and_then(|segments| segments.last().map(str::to_owned)))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_MEDIA_FILE_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use wp_core::config::ServerConfig;

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url("https://cdn.example.com/img/cat.png?w=300#top"),
            "cat.png"
        );
        assert_eq!(file_name_from_url("https://cdn.example.com/"), "image.jpeg");
        assert_eq!(file_name_from_url("not a url"), "image.jpeg");
    }

    #[tokio::test]
    async fn test_staged_file_is_removed_on_drop() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cat.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, b'P', b'N', b'G']))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&ServerConfig::new(&mock_server.uri(), "u", "p")).unwrap();
        let staged = client
            .stage_download(&format!("{}/cat.png", mock_server.uri()), "cat.png")
            .await
            .unwrap();

        let staged_path = staged.path().to_path_buf();
        assert!(staged_path.exists());
        assert!(staged_path.to_string_lossy().ends_with(".png"));
        assert_eq!(std::fs::read(&staged_path).unwrap(), vec![0x89, b'P', b'N', b'G']);

        drop(staged);
        assert!(!staged_path.exists());
    }

    #[tokio::test]
    async fn test_stage_download_reports_missing_source() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone.png"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&ServerConfig::new(&mock_server.uri(), "u", "p")).unwrap();
        let err = client
            .stage_download(&format!("{}/gone.png", mock_server.uri()), "gone.png")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some(&ErrorBody::Text("not here".into())));
    }

    #[tokio::test]
    async fn test_stage_download_keeps_status_when_body_is_cut_off() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 100\r\n\r\npartial")
                .await;
            let _ = socket.shutdown().await;
        });

        let config = ServerConfig::new("https://blog.example.com", "u", "p");
        let client = ApiClient::new(&config).unwrap();
        let err = client
            .stage_download(&format!("http://{addr}/gone.png"), "gone.png")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some(&ErrorBody::Text(String::new())));
    }
}
