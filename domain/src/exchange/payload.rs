//! Wire shape of the chat-completion request body.

use crate::conversation::Role;
use serde::{Deserialize, Serialize};

/// Model tag sent to the proxy. The proxy substitutes its own upstream model.
pub const PROXY_MODEL_TAG: &str = "proxy-managed";

/// Sampling temperature sent with every request.
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// A role/content pair in the `messages` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Article and session data carried beside the messages in session mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadMetadata {
    /// `null` until the proxy has handed out an id.
    pub session_id: Option<String>,
    pub article_url: String,
    pub article_title: String,
    pub article_context: String,
}

/// The JSON body posted to `/v1/chat/completions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub model: String,
    pub temperature: f64,
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PayloadMetadata>,
}

impl RequestPayload {
    /// Total characters across message contents and article metadata.
    pub fn content_chars(&self) -> usize {
        let messages: usize = self.messages.iter().map(|m| m.content.chars().count()).sum();
        let metadata = self
            .metadata
            .as_ref()
            .map(|m| m.article_context.chars().count())
            .unwrap_or(0);
        messages + metadata
    }
}
