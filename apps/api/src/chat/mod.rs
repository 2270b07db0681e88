//! Chat relay — forwards career-assistant questions to the upstream chat endpoint.
//!
//! Wire contract: `POST {endpoint}` with `{"message": string}`, expecting
//! `{"reply": string}`. Any non-2xx status, transport error, or malformed body is
//! a `ChatError`; callers turn that into a fixed fallback reply.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod handlers;
pub mod thread;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Chat endpoint returned status {status}: {message}")]
    Status { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    reply: String,
}

/// Anything that can answer a chat message. `ChatClient` is the HTTP implementation.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_message(&self, message: &str) -> Result<String, ChatError>;
}

#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    endpoint: String,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ChatError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for ChatClient {
    /// Sends one message. No retries: resending is up to the user.
    async fn send_message(&self, message: &str) -> Result<String, ChatError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Chat endpoint returned {}: {}", status, body);
            return Err(ChatError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let reply: ChatReply = response.json().await?;
        debug!("Chat reply received ({} chars)", reply.reply.len());
        Ok(reply.reply)
    }
}
