//! Proxy transport port
//!
//! Defines how the application layer reaches the chat-completion proxy.

use async_trait::async_trait;
use thiserror::Error;
use tutor_domain::{RequestPayload, ResponseEnvelope};

/// Path appended to the proxy base URL.
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Errors that end the current request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("{0}")]
    Network(String),
}

/// Transport to the chat-completion proxy
///
/// One call, one POST. No retries. A reply without usable content is not an
/// error; it comes back as an envelope whose answer is the placeholder.
#[async_trait]
pub trait ProxyTransport: Send + Sync {
    async fn send(&self, payload: &RequestPayload) -> Result<ResponseEnvelope, TransportError>;

    /// Human-readable target, for status lines.
    fn endpoint(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_display() {
        assert_eq!(TransportError::HttpStatus(500).to_string(), "HTTP 500");
    }

    #[test]
    fn test_network_display_is_cause() {
        let error = TransportError::Network("connection refused".to_string());
        assert_eq!(error.to_string(), "connection refused");
    }
}
