use serde::Serialize;

/// Request body for POST /users/{id}/sendMail
#[derive(Debug, Serialize)]
pub struct SendMailRequest {
    pub message: OutgoingMail,
    #[serde(rename = "saveToSentItems")]
    pub save_to_sent_items: bool,
}

/// A plain-text message with its recipient list
#[derive(Debug, Serialize)]
pub struct OutgoingMail {
    pub subject: String,
    pub body: MailBody,
    #[serde(rename = "toRecipients")]
    pub to_recipients: Vec<Recipient>,
}

#[derive(Debug, Serialize)]
pub struct MailBody {
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct Recipient {
    #[serde(rename = "emailAddress")]
    pub email_address: EmailAddress,
}

#[derive(Debug, Serialize)]
pub struct EmailAddress {
    pub address: String,
}

impl OutgoingMail {
    /// Build a plain-text message addressed to a single recipient
    pub fn plain_text(subject: &str, content: &str, to: &str) -> Self {
        Self {
            subject: subject.to_string(),
            body: MailBody {
                content_type: "Text".to_string(),
                content: content.to_string(),
            },
            to_recipients: vec![Recipient {
                email_address: EmailAddress {
                    address: to.to_string(),
                },
            }],
        }
    }
}
