//! Microsoft Graph drive access.
//!
//! Provides the `FileSource` implementation used in production: a
//! client-credentials token is acquired once per request, then files are
//! downloaded by drive-relative path, with a name-only search fallback
//! when the direct path 404s.

mod auth;
mod config;
mod drive;

pub use config::GraphDriveConfig;
pub use drive::{DriveSession, GraphDrive};

// Re-export core types for convenience
pub use analysis_core::{FileSession, FileSource, SourceError};
