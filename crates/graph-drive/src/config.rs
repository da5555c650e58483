//! Configuration for Graph drive access.

use std::env;

use analysis_core::SourceError;

/// Configuration for [`crate::GraphDrive`].
#[derive(Debug, Clone)]
pub struct GraphDriveConfig {
    /// Token endpoint base URL.
    pub login_url: String,

    /// Graph API base URL.
    pub graph_url: String,

    /// Entra ID tenant.
    pub tenant_id: String,

    /// Application (client) id.
    pub client_id: String,

    /// Client secret.
    pub client_secret: String,

    /// Drive to download from.
    pub drive_id: String,
}

impl GraphDriveConfig {
    /// Create a configuration with the default Microsoft endpoints.
    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        drive_id: impl Into<String>,
    ) -> Self {
        Self {
            login_url: "https://login.microsoftonline.com".to_string(),
            graph_url: "https://graph.microsoft.com".to_string(),
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            drive_id: drive_id.into(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `TENANT_ID` - Entra ID tenant
    /// - `CLIENT_ID` - Application (client) id
    /// - `CLIENT_SECRET` - Client secret
    /// - `DRIVE_ID` - Drive to download from
    ///
    /// Optional environment variables:
    /// - `GRAPH_LOGIN_URL` - Token endpoint base (default: https://login.microsoftonline.com)
    /// - `GRAPH_API_URL` - Graph API base (default: https://graph.microsoft.com)
    pub fn from_env() -> Result<Self, SourceError> {
        let tenant_id = require_env("TENANT_ID")?;
        let client_id = require_env("CLIENT_ID")?;
        let client_secret = require_env("CLIENT_SECRET")?;
        let drive_id = require_env("DRIVE_ID")?;

        let mut config = Self::new(tenant_id, client_id, client_secret, drive_id);

        if let Ok(login_url) = env::var("GRAPH_LOGIN_URL") {
            config.login_url = login_url;
        }
        if let Ok(graph_url) = env::var("GRAPH_API_URL") {
            config.graph_url = graph_url;
        }

        Ok(config)
    }
}

fn require_env(name: &str) -> Result<String, SourceError> {
    env::var(name).map_err(|_| SourceError::Configuration(format!("{} not set", name)))
}
