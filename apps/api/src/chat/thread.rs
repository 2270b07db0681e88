use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::chat::{ChatError, ChatTransport};

/// Bot message appended whenever the chat endpoint cannot produce a reply.
pub const CHAT_FALLBACK_REPLY: &str = "Oops, something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("A message is already awaiting a reply")]
pub struct ThreadBusy;

/// One conversation with the career assistant. Append-only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatThread {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    messages: Vec<ChatMessage>,
    is_loading: bool,
}

impl Default for ChatThread {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatThread {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            messages: Vec::new(),
            is_loading: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Records the user's message and marks the thread loading.
    /// Returns the text to send, or `None` for blank input (nothing recorded).
    pub fn begin_send(&mut self, input: &str) -> Result<Option<String>, ThreadBusy> {
        if self.is_loading {
            return Err(ThreadBusy);
        }
        if input.trim().is_empty() {
            return Ok(None);
        }

        self.messages.push(ChatMessage::new(Sender::User, input));
        self.is_loading = true;
        Ok(Some(input.to_string()))
    }

    /// Appends exactly one bot message: the trimmed reply, or the fallback on failure.
    pub fn finish_send(&mut self, outcome: Result<String, ChatError>) -> &ChatMessage {
        self.is_loading = false;
        let text = match outcome {
            Ok(reply) => reply.trim().to_string(),
            Err(e) => {
                warn!("Chat request failed for thread {}: {e}", self.id);
                CHAT_FALLBACK_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::new(Sender::Bot, text));
        &self.messages[self.messages.len() - 1]
    }

    /// Single-owner convenience over `begin_send` / `finish_send`. Never fails on
    /// transport errors; those become the fallback bot message.
    pub async fn send(
        &mut self,
        transport: &dyn ChatTransport,
        input: &str,
    ) -> Result<Option<&ChatMessage>, ThreadBusy> {
        let Some(message) = self.begin_send(input)? else {
            return Ok(None);
        };
        let outcome = transport.send_message(&message).await;
        Ok(Some(self.finish_send(outcome)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::test_support::spawn_upstream;
    use crate::chat::ChatClient;
    use async_trait::async_trait;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;
    use std::time::Duration;

    struct FixedReply(&'static str);

    #[async_trait]
    impl ChatTransport for FixedReply {
        async fn send_message(&self, _message: &str) -> Result<String, ChatError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_http_500_appends_single_fallback_message() {
        let url = spawn_upstream(Router::new().route(
            "/api/chat",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        ))
        .await;
        let client = ChatClient::new(url, Duration::from_secs(5)).unwrap();
        let mut thread = ChatThread::new();

        let reply = thread.send(&client, "Which careers suit me?").await.unwrap();
        assert_eq!(reply.unwrap().text, CHAT_FALLBACK_REPLY);

        let bot_messages: Vec<_> = thread
            .messages()
            .iter()
            .filter(|m| m.sender == Sender::Bot)
            .collect();
        assert_eq!(bot_messages.len(), 1);
        assert_eq!(bot_messages[0].text, CHAT_FALLBACK_REPLY);
        assert_eq!(thread.messages().len(), 2);
        assert!(!thread.is_loading());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_uses_fallback() {
        // Bind then drop to get a port nobody is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            ChatClient::new(format!("http://{addr}/api/chat"), Duration::from_secs(5)).unwrap();
        let mut thread = ChatThread::new();
        let reply = thread.send(&client, "hello").await.unwrap().unwrap();
        assert_eq!(reply.text, CHAT_FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_reply_is_trimmed() {
        let url = spawn_upstream(Router::new().route(
            "/api/chat",
            post(|| async { Json(json!({ "reply": "  Try data science.\n" })) }),
        ))
        .await;
        let client = ChatClient::new(url, Duration::from_secs(5)).unwrap();
        let mut thread = ChatThread::new();

        thread.send(&client, "Suggest something").await.unwrap();
        assert_eq!(thread.messages()[0].sender, Sender::User);
        assert_eq!(thread.messages()[0].text, "Suggest something");
        assert_eq!(thread.messages()[1].text, "Try data science.");
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut thread = ChatThread::new();
        assert!(thread.send(&FixedReply("unused"), "   ").await.unwrap().is_none());
        assert!(thread.messages().is_empty());
    }

    #[test]
    fn test_second_send_while_loading_is_busy() {
        let mut thread = ChatThread::new();
        assert_eq!(thread.begin_send("first").unwrap(), Some("first".to_string()));
        assert!(thread.is_loading());
        assert_eq!(thread.begin_send("second"), Err(ThreadBusy));

        thread.finish_send(Ok("reply".to_string()));
        assert!(!thread.is_loading());
        assert_eq!(thread.messages().len(), 2);
    }
}
