//! Chat-completion proxy adapter
//!
//! Implements [`ProxyTransport`] over HTTP with reqwest.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use tutor_application::{CHAT_COMPLETIONS_PATH, ProxyTransport, TransportError};
use tutor_domain::{RequestPayload, ResponseEnvelope};

/// Errors while setting up the proxy client
#[derive(Debug, Error)]
pub enum ProxyClientError {
    #[error("Invalid proxy base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Validate the proxy base URL: absolute, http or https.
fn validate_base_url(base_url: &str) -> Result<(), ProxyClientError> {
    let invalid = |reason: String| ProxyClientError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let parsed = reqwest::Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!(
            "unsupported scheme '{}', only http and https are allowed",
            other
        ))),
    }
}

/// HTTP transport to `{base_url}/v1/chat/completions`
pub struct HttpProxyTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProxyTransport {
    /// Create a transport. `timeout` of `None` waits indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ProxyClientError> {
        validate_base_url(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH)
    }
}

fn network_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Network("request timed out".to_string())
    } else {
        TransportError::Network(error.to_string())
    }
}

#[async_trait]
impl ProxyTransport for HttpProxyTransport {
    async fn send(&self, payload: &RequestPayload) -> Result<ResponseEnvelope, TransportError> {
        let url = self.completions_url();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Proxy returned {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            return Err(TransportError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(network_error)?;
        debug!("Proxy replied with {} bytes", body.len());
        Ok(ResponseEnvelope::from_body(&body))
    }

    fn endpoint(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tutor_domain::{
        ArticleContext, PLACEHOLDER_ANSWER, PayloadShape, Question, RequestBuilder,
        SessionHandle,
    };
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload(shape: PayloadShape, session: &SessionHandle) -> RequestPayload {
        RequestBuilder::new(shape).build(
            &Question::parse("What is X?").unwrap(),
            &ArticleContext::new("X", "https://blog.test/x", "X is a protocol for Y.", 1000),
            session,
        )
    }

    #[test]
    fn test_rejects_bad_base_urls() {
        assert!(HttpProxyTransport::new("not a url", None).is_err());
        assert!(HttpProxyTransport::new("ftp://proxy.test", None).is_err());
        assert!(HttpProxyTransport::new("https://proxy.test/ai-proxy/", None).is_ok());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let transport = HttpProxyTransport::new("https://proxy.test/ai-proxy/", None).unwrap();
        assert_eq!(
            transport.completions_url(),
            "https://proxy.test/ai-proxy/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_posts_json_and_parses_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ai-proxy/v1/chat/completions"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "model": "proxy-managed",
                "messages": [{"role": "user", "content": "What is X?"}],
                "metadata": {"session_id": "abc123", "article_title": "X"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "Answer."}}],
                "session_id": "abc123"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let transport =
            HttpProxyTransport::new(&format!("{}/ai-proxy", server.uri()), None).unwrap();
        let envelope = transport
            .send(&payload(
                PayloadShape::Session,
                &SessionHandle::with_id("abc123"),
            ))
            .await
            .unwrap();

        assert_eq!(envelope.answer(), Some("Answer."));
        assert_eq!(envelope.session_id(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_error_status_is_http_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
            .mount(&server)
            .await;

        let transport = HttpProxyTransport::new(&server.uri(), None).unwrap();
        let err = transport
            .send(&payload(PayloadShape::Stateless, &SessionHandle::none()))
            .await
            .unwrap_err();

        assert_eq!(err, TransportError::HttpStatus(500));
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_placeholder() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let transport = HttpProxyTransport::new(&server.uri(), None).unwrap();
        let envelope = transport
            .send(&payload(PayloadShape::Stateless, &SessionHandle::none()))
            .await
            .unwrap();

        assert_eq!(envelope.answer_or_placeholder(), PLACEHOLDER_ANSWER);
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // Port 9 (discard) on loopback is closed on test machines
        let transport = HttpProxyTransport::new("http://127.0.0.1:9", None).unwrap();
        let err = transport
            .send(&payload(PayloadShape::Stateless, &SessionHandle::none()))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Network(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(500))
                    .set_body_json(json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let transport =
            HttpProxyTransport::new(&server.uri(), Some(Duration::from_millis(50))).unwrap();
        let err = transport
            .send(&payload(PayloadShape::Stateless, &SessionHandle::none()))
            .await
            .unwrap_err();

        assert_eq!(err, TransportError::Network("request timed out".to_string()));
    }
}
