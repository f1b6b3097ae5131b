//! OAuth2 client-credentials grant (RFC 6749 section 4.4)
//!
//! One POST to the tenant token endpoint exchanges the app's id/secret pair
//! for a bearer access token. Tokens are used once and discarded; there is
//! no caching or refresh handling here.

use crate::error::{AuthError, AuthResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Application (client) identity within a single tenant
#[derive(Debug, Clone)]
pub struct AppCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
}

/// Form body for the token request
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    scope: &'a str,
}

/// Token endpoint response. Only `access_token` is consumed downstream;
/// the endpoint also reports the token type and lifetime.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

pub struct TokenClient {
    client: reqwest::Client,
    authority: String,
}

impl TokenClient {
    pub fn new() -> Self {
        Self::with_authority(crate::entra::AUTHORITY)
    }

    /// Point the client at a different authority (used by tests)
    pub fn with_authority(authority: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            authority: authority.into(),
        }
    }

    /// Exchange the app credentials for a bearer access token
    pub async fn acquire(&self, credentials: &AppCredentials) -> AuthResult<TokenResponse> {
        let url = format!(
            "{}/{}/oauth2/v2.0/token",
            self.authority, credentials.tenant_id
        );
        debug!("Auth: requesting app-only token for tenant {}", credentials.tenant_id);

        let request = TokenRequest {
            grant_type: "client_credentials",
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            scope: crate::entra::GRAPH_DEFAULT_SCOPE,
        };

        let response = self.client.post(&url).form(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::ApiError { status, body });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::ParseError(e.to_string()))?;

        info!(
            "Auth: got bearer token ({} chars, expires_in={:?})",
            token.access_token.len(),
            token.expires_in
        );
        Ok(token)
    }
}

impl Default for TokenClient {
    fn default() -> Self {
        Self::new()
    }
}
