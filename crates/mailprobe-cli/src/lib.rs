//! Two-step Graph send-mail smoke test
//!
//! Step one acquires an app-only bearer token via the client-credentials
//! grant; step two submits a single self-addressed test email through the
//! Graph sendMail endpoint. The token is a hard data dependency of step
//! two, so a token failure aborts the run before any mail request is made.

pub mod config;

use anyhow::Context;
use config::Config;
use mailprobe_auth::{AppCredentials, TokenClient};
use mailprobe_graph::{GraphSendClient, OutgoingMail};

pub const TEST_SUBJECT: &str = "Test Email from mailprobe via Microsoft Graph";
pub const TEST_BODY: &str = "This is a test email sent using the Microsoft Graph API.";

/// Service endpoints, overridable for tests
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub authority: String,
    pub graph_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            authority: mailprobe_auth::entra::AUTHORITY.to_string(),
            graph_base: mailprobe_graph::GRAPH_BASE.to_string(),
        }
    }
}

/// Acquire a token, then send the self-addressed test message
pub async fn run(config: &Config, endpoints: &Endpoints) -> anyhow::Result<()> {
    let credentials = AppCredentials {
        client_id: config.client_id.clone(),
        client_secret: config.client_secret.clone(),
        tenant_id: config.tenant_id.clone(),
    };

    let token = TokenClient::with_authority(&endpoints.authority)
        .acquire(&credentials)
        .await
        .context("token acquisition failed")?;

    // Self-send: the configured sender is also the recipient
    let message = OutgoingMail::plain_text(TEST_SUBJECT, TEST_BODY, &config.from_email);

    GraphSendClient::with_base_url(&endpoints.graph_base, token.access_token)
        .send_mail(&config.from_email, message)
        .await
        .context("send-mail request failed")?;

    Ok(())
}
