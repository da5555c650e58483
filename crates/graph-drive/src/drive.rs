//! Drive download with name-search fallback.

use std::time::Duration;

use analysis_core::{async_trait, FileSession, FileSource, SourceError};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::auth::acquire_token;
use crate::config::GraphDriveConfig;

/// Search results for a name-only drive lookup.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    value: Vec<DriveItem>,
}

/// One drive item from a search result.
#[derive(Debug, Deserialize)]
struct DriveItem {
    #[serde(rename = "@microsoft.graph.downloadUrl")]
    download_url: Option<String>,
}

/// Production file source backed by a Microsoft Graph drive.
#[derive(Clone)]
pub struct GraphDrive {
    http: Client,
    config: GraphDriveConfig,
}

impl GraphDrive {
    /// Create a new GraphDrive with the given configuration.
    pub fn new(config: GraphDriveConfig) -> Result<Self, SourceError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| {
                SourceError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { http, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &GraphDriveConfig {
        &self.config
    }
}

#[async_trait]
impl FileSource for GraphDrive {
    async fn open(&self) -> Result<Box<dyn FileSession>, SourceError> {
        let token = acquire_token(
            &self.http,
            &self.config.login_url,
            &self.config.tenant_id,
            &self.config.client_id,
            &self.config.client_secret,
        )
        .await?;

        Ok(Box::new(DriveSession {
            http: self.http.clone(),
            graph_url: self.config.graph_url.clone(),
            drive_id: self.config.drive_id.clone(),
            token,
        }))
    }
}

/// An authenticated download session against one drive.
pub struct DriveSession {
    http: Client,
    graph_url: String,
    drive_id: String,
    token: String,
}

impl DriveSession {
    fn content_url(&self, relative_path: &str) -> String {
        format!(
            "{}/v1.0/drives/{}/root:/{}:/content",
            self.graph_url,
            self.drive_id,
            encode_path(relative_path)
        )
    }

    fn search_url(&self, filename: &str) -> String {
        format!(
            "{}/v1.0/drives/{}/root/search(q='{}')",
            self.graph_url,
            self.drive_id,
            urlencoding::encode(filename)
        )
    }

    /// Name-only lookup used when the direct path 404s.
    async fn download_by_search(&self, filename: &str) -> Result<Vec<u8>, SourceError> {
        warn!(file = %filename, "direct path not found, searching by name");

        let response = self
            .http
            .get(self.search_url(filename))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| SourceError::Download(format!("search request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Download(format!(
                "search returned {} for {}",
                status.as_u16(),
                filename
            )));
        }

        let results: SearchResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Download(format!("unreadable search result: {}", e)))?;

        let item = results
            .value
            .into_iter()
            .next()
            .ok_or_else(|| SourceError::NotFound(filename.to_string()))?;

        let download_url = item
            .download_url
            .ok_or_else(|| SourceError::Download(format!("no download URL for {}", filename)))?;

        // The download URL is pre-authenticated; no bearer token needed.
        let response = self
            .http
            .get(&download_url)
            .send()
            .await
            .map_err(|e| SourceError::Download(format!("download failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Download(format!(
                "download URL returned {} for {}",
                status.as_u16(),
                filename
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Download(format!("download failed: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl FileSession for DriveSession {
    async fn download(&self, relative_path: &str) -> Result<Vec<u8>, SourceError> {
        debug!(path = %relative_path, "downloading drive file");

        let response = self
            .http
            .get(self.content_url(relative_path))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| SourceError::Download(format!("request failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            let filename = relative_path.rsplit('/').next().unwrap_or(relative_path);
            return self.download_by_search(filename).await;
        }

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Download(format!(
                "drive returned {} for {}",
                status.as_u16(),
                relative_path
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Download(format!("download failed: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

/// Percent-encode a drive path, keeping segment separators.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
