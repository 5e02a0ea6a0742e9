use std::time::Duration;

use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Sentinel API key used by builds with no real credential. Treated the same
/// as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "dummy-key-for-build";

/// One outbound notification, addressed and ready to send.
pub struct OutboundEmail<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub reply_to: &'a str,
    pub subject: &'a str,
    pub html: &'a str,
}

#[derive(thiserror::Error, Debug)]
pub enum EmailClientError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("{message}")]
    Provider { message: String },
}

#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    api_key: SecretString,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

impl EmailClient {
    pub fn new(base_url: String, api_key: SecretString, timeout: Duration) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed building the email http client."),
            base_url: Url::parse(&base_url).expect("Failed parsing base email api url."),
            api_key,
        }
    }

    /// Whether a usable credential was configured. The placeholder sentinel
    /// counts as "not configured".
    pub fn is_configured(&self) -> bool {
        let key = self.api_key.expose_secret();
        !key.is_empty() && key != PLACEHOLDER_API_KEY
    }

    /// Delivers `email` through the provider, returning the id it assigned
    /// to the message.
    pub async fn send(&self, email: &OutboundEmail<'_>) -> Result<String, EmailClientError> {
        let url = self
            .base_url
            .join("emails")
            .expect("Failed joining route to email api url.");

        let body = SendEmailRequest {
            from: email.from,
            to: vec![email.to],
            reply_to: email.reply_to,
            subject: email.subject,
            html: email.html,
        };

        let response = self
            .http_client
            .post(url)
            .header(
                "Authorization",
                "Bearer ".to_owned() + self.api_key.expose_secret(),
            )
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let message = match response.json::<ProviderError>().await {
                Ok(e) => e.message,
                Err(_) => "Unknown provider error".to_string(),
            };
            return Err(EmailClientError::Provider { message });
        }

        let sent = response.json::<SendEmailResponse>().await?;
        Ok(sent.id)
    }
}
