//! File source traits for fetching referenced documents.

use async_trait::async_trait;

use crate::error::SourceError;

/// A remote document store that needs per-request authentication.
///
/// [`FileSource::open`] performs token acquisition once; the returned
/// session is then used for every download in that request. An `Auth`
/// failure here aborts the whole request, unlike per-file download
/// failures, which the pipeline records and skips.
#[async_trait]
pub trait FileSource: Send + Sync {
    /// Authenticate and return a session for downloading files.
    async fn open(&self) -> Result<Box<dyn FileSession>, SourceError>;
}

/// An authenticated handle for downloading files by store-relative path.
#[async_trait]
pub trait FileSession: Send + Sync {
    /// Download the file at the given store-relative path.
    async fn download(&self, relative_path: &str) -> Result<Vec<u8>, SourceError>;
}
