use crate::error::{GraphError, GraphResult};
use crate::types::{OutgoingMail, SendMailRequest};
use tracing::{debug, info};

pub const GRAPH_BASE: &str = "https://graph.microsoft.com/v1.0";

pub struct GraphSendClient {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl GraphSendClient {
    pub fn new(access_token: String) -> Self {
        Self::with_base_url(GRAPH_BASE, access_token)
    }

    /// Point the client at a different Graph base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>, access_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            access_token,
        }
    }

    /// Submit one message for delivery on behalf of `from`.
    ///
    /// Graph answers 202 Accepted when the message is queued; there is no
    /// response body to consume on success.
    pub async fn send_mail(&self, from: &str, message: OutgoingMail) -> GraphResult<()> {
        let url = format!("{}/users/{}/sendMail", self.base_url, from);
        debug!("Graph: sending mail as {}", from);

        let request = SendMailRequest {
            message,
            save_to_sent_items: true,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::ApiError { status, body });
        }

        info!("Graph: message accepted for delivery");
        Ok(())
    }
}
