//! Response envelope parsed from a chat-completion reply.

use serde_json::Value;

/// Answer shown when the reply carries no usable assistant content.
pub const PLACEHOLDER_ANSWER: &str = "No assistant content in response.";

/// The fields of a proxy reply the pipeline consumes (Value Object)
///
/// Parsing is lenient: a body that is not JSON, or JSON without
/// `choices[0].message.content`, still yields an envelope whose answer falls
/// back to [`PLACEHOLDER_ANSWER`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseEnvelope {
    answer: Option<String>,
    session_id: Option<String>,
}

impl ResponseEnvelope {
    pub fn new(answer: Option<String>, session_id: Option<String>) -> Self {
        Self { answer, session_id }
    }

    /// Parse a raw response body.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_json(&value),
            Err(_) => Self::default(),
        }
    }

    /// Extract answer and session id from an already-decoded body.
    pub fn from_json(value: &Value) -> Self {
        let answer = value
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let session_id = value
            .get("session_id")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self { answer, session_id }
    }

    /// The assistant content, if the reply had any.
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// The assistant content, or the placeholder.
    pub fn answer_or_placeholder(&self) -> &str {
        self.answer.as_deref().unwrap_or(PLACEHOLDER_ANSWER)
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_envelope() {
        let env = ResponseEnvelope::from_body(
            r#"{"choices":[{"message":{"content":"Answer."}}],"session_id":"abc123"}"#,
        );
        assert_eq!(env.answer(), Some("Answer."));
        assert_eq!(env.session_id(), Some("abc123"));
    }

    #[test]
    fn test_missing_choices_yields_placeholder() {
        let env = ResponseEnvelope::from_body(r#"{"object":"chat.completion"}"#);
        assert_eq!(env.answer(), None);
        assert_eq!(env.answer_or_placeholder(), PLACEHOLDER_ANSWER);
        assert_eq!(env.session_id(), None);
    }

    #[test]
    fn test_empty_content_yields_placeholder() {
        let env = ResponseEnvelope::from_body(r#"{"choices":[{"message":{"content":""}}]}"#);
        assert_eq!(env.answer_or_placeholder(), PLACEHOLDER_ANSWER);
    }

    #[test]
    fn test_non_string_content_yields_placeholder() {
        let env = ResponseEnvelope::from_body(
            r#"{"choices":[{"message":{"content":[{"type":"text"}]}}],"session_id":"s1"}"#,
        );
        assert_eq!(env.answer(), None);
        assert_eq!(env.session_id(), Some("s1"));
    }

    #[test]
    fn test_garbage_body_is_soft() {
        let env = ResponseEnvelope::from_body("<html>bad gateway</html>");
        assert_eq!(env, ResponseEnvelope::default());
        assert_eq!(env.answer_or_placeholder(), PLACEHOLDER_ANSWER);
    }
}
