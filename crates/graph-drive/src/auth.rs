//! Client-credentials token acquisition against Entra ID.

use analysis_core::SourceError;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Acquire a Graph API access token using the client-credentials grant.
pub(crate) async fn acquire_token(
    client: &Client,
    login_url: &str,
    tenant_id: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String, SourceError> {
    let url = format!("{}/{}/oauth2/v2.0/token", login_url, tenant_id);
    let params = [
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("scope", GRAPH_SCOPE),
        ("grant_type", "client_credentials"),
    ];

    let response = client
        .post(&url)
        .form(&params)
        .send()
        .await
        .map_err(|e| SourceError::Auth(format!("token request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SourceError::Auth(format!(
            "token endpoint returned {}: {}",
            status.as_u16(),
            body
        )));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| SourceError::Auth(format!("no access token in response: {}", e)))?;

    debug!("Graph access token acquired");
    Ok(token.access_token)
}
