//! Client for the remote chat endpoint
//!
//! The service behind the endpoint is opaque. A request carries the user's
//! message and who is asking. A reply is either an answer or a declined
//! request with an explanation.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ChatSettings;
use crate::error::{DashboardError, ErrorCode, Result};

/// Shown when the service declines without saying why
pub const DEFAULT_APOLOGY: &str = "I'm sorry, I encountered an error processing your request.";

/// Who is asking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatContext {
    pub email: String,
    pub customer_id: String,
    pub customer_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: ChatContext,
}

/// Wire shape of the service's reply
#[derive(Debug, Clone, Default, Deserialize)]
struct ChatResponseBody {
    #[serde(default)]
    status: String,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    Answer(String),
    Declined(String),
}

impl ChatReply {
    pub fn text(&self) -> &str {
        match self {
            Self::Answer(text) | Self::Declined(text) => text,
        }
    }

    pub fn is_answer(&self) -> bool {
        matches!(self, Self::Answer(_))
    }
}

impl From<ChatResponseBody> for ChatReply {
    fn from(body: ChatResponseBody) -> Self {
        if body.status == "success" {
            Self::Answer(body.response.unwrap_or_default())
        } else {
            Self::Declined(
                body.message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_APOLOGY.to_string()),
            )
        }
    }
}

pub struct ChatClient {
    client: Client,
    endpoint: String,
}

impl ChatClient {
    pub fn new(base_url: &str, path: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            DashboardError::config("Failed to create HTTP client").with_source(e)
        })?;

        let endpoint = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Self { client, endpoint })
    }

    pub fn from_settings(settings: &ChatSettings) -> Result<Self> {
        Self::new(
            &settings.url,
            &settings.path,
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one message
    pub async fn send(&self, message: &str, context: ChatContext) -> Result<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(DashboardError::validation_with_code(
                ErrorCode::VALIDATION_REQUIRED_FIELD,
                "message must not be empty",
                Some("message".to_string()),
            ));
        }

        let request = ChatRequest {
            message: message.to_string(),
            context,
        };
        debug!("Sending chat message to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DashboardError::chat_with_code(
                    ErrorCode::CHAT_UNREACHABLE,
                    format!("Request to {} failed", self.endpoint),
                )
                .with_source(e)
            })?;

        let status = response.status();
        let body: ChatResponseBody = response.json().await.map_err(|e| {
            DashboardError::chat_with_code(
                ErrorCode::CHAT_INVALID_RESPONSE,
                format!("Unreadable reply from {} (HTTP {})", self.endpoint, status),
            )
            .with_source(e)
        })?;

        let reply = ChatReply::from(body);
        if !reply.is_answer() {
            warn!("Chat request declined (HTTP {}): {}", status, reply.text());
        }
        Ok(reply)
    }
}
