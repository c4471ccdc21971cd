//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout. Every section is optional and
//! falls back to its defaults.

use crate::article::DEFAULT_CONTENT_SELECTOR;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tutor_application::TutorConfig;
use tutor_domain::{
    DEFAULT_CHUNK_CHARS, DEFAULT_MAX_CONTEXT_CHARS, DEFAULT_REVEAL_DELAY_MS, ExchangeMode,
    RenderMode, RenderStyle,
};

/// Proxy base used when nothing else is configured
pub const DEFAULT_PROXY_BASE_URL: &str = "http://127.0.0.1:8000/ai-proxy";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("proxy.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("proxy.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("tutor.max_context_chars cannot be 0")]
    InvalidContextBound,

    #[error("tutor.content_selector cannot be empty")]
    EmptyContentSelector,

    #[error("render.chunk_chars cannot be 0")]
    InvalidChunkSize,
}

/// `[proxy]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProxyConfig {
    /// Base URL; `/v1/chat/completions` is appended
    pub base_url: String,
    /// Request timeout in seconds, unset waits indefinitely
    pub timeout_seconds: Option<u64>,
}

impl Default for FileProxyConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROXY_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileProxyConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// `[tutor]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTutorConfig {
    pub mode: ExchangeMode,
    /// Upper bound on article body characters sent per request
    pub max_context_chars: usize,
    /// CSS selector of the article content region
    pub content_selector: String,
    /// Replaces the built-in tutor instructions (stateless mode only)
    pub instructions: Option<String>,
}

impl Default for FileTutorConfig {
    fn default() -> Self {
        Self {
            mode: ExchangeMode::default(),
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
            content_selector: DEFAULT_CONTENT_SELECTOR.to_string(),
            instructions: None,
        }
    }
}

/// `[render]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRenderConfig {
    pub mode: RenderStyle,
    pub chunk_chars: usize,
    pub delay_ms: u64,
}

impl Default for FileRenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderStyle::default(),
            chunk_chars: DEFAULT_CHUNK_CHARS,
            delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}

impl FileRenderConfig {
    pub fn render_mode(&self) -> RenderMode {
        RenderMode::from_style(
            self.mode,
            self.chunk_chars,
            Duration::from_millis(self.delay_ms),
        )
    }
}

/// `[repl]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file
    pub history_file: Option<String>,
}

/// `[logging]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript path, unset disables the transcript
    pub transcript: Option<String>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub proxy: FileProxyConfig,
    pub tutor: FileTutorConfig,
    pub render: FileRenderConfig,
    pub repl: FileReplConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.proxy.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if let Some(0) = self.proxy.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.tutor.max_context_chars == 0 {
            return Err(ConfigValidationError::InvalidContextBound);
        }
        if self.tutor.content_selector.trim().is_empty() {
            return Err(ConfigValidationError::EmptyContentSelector);
        }
        if self.render.chunk_chars == 0 {
            return Err(ConfigValidationError::InvalidChunkSize);
        }
        Ok(())
    }

    /// Application-level settings for a [`TutorSession`](tutor_application::TutorSession)
    pub fn tutor_config(&self) -> TutorConfig {
        let config = TutorConfig::new(self.tutor.mode).with_render(self.render.render_mode());
        match &self.tutor.instructions {
            Some(instructions) => config.with_instructions(instructions.clone()),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[proxy]
base_url = "https://blog.test/ai-proxy"
timeout_seconds = 30

[tutor]
mode = "session"
max_context_chars = 5000
content_selector = "article.post"

[render]
mode = "incremental"
chunk_chars = 5
delay_ms = 20

[repl]
history_file = "~/.local/share/article-tutor/history.txt"

[logging]
transcript = "tutor.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.proxy.base_url, "https://blog.test/ai-proxy");
        assert_eq!(config.proxy.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.tutor.mode, ExchangeMode::Session);
        assert_eq!(config.tutor.max_context_chars, 5000);
        assert_eq!(config.tutor.content_selector, "article.post");
        assert_eq!(
            config.render.render_mode(),
            RenderMode::incremental(5, Duration::from_millis(20))
        );
        assert!(config.repl.history_file.is_some());
        assert_eq!(config.logging.transcript.as_deref(), Some("tutor.jsonl"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[tutor]
mode = "dummy"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tutor.mode, ExchangeMode::Dummy);
        assert_eq!(config.proxy.base_url, DEFAULT_PROXY_BASE_URL);
        assert_eq!(config.render.chunk_chars, DEFAULT_CHUNK_CHARS);
        assert_eq!(config.render.render_mode(), RenderMode::Immediate);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let toml_str = r#"
[tutor]
mode = "telepathy"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.proxy.base_url, DEFAULT_PROXY_BASE_URL);
        assert_eq!(config.proxy.timeout(), None);
        assert_eq!(config.tutor.mode, ExchangeMode::Stateless);
        assert_eq!(config.tutor.max_context_chars, DEFAULT_MAX_CONTEXT_CHARS);
        assert!(config.logging.transcript.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FileConfig::default();
        config.proxy.timeout_seconds = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));

        let mut config = FileConfig::default();
        config.proxy.base_url = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBaseUrl));

        let mut config = FileConfig::default();
        config.render.chunk_chars = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidChunkSize));

        let mut config = FileConfig::default();
        config.tutor.max_context_chars = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidContextBound)
        );
    }

    #[test]
    fn test_tutor_config_carries_mode_and_instructions() {
        let mut config = FileConfig::default();
        config.tutor.mode = ExchangeMode::Session;
        config.tutor.instructions = Some("Be brief.".to_string());

        let tutor = config.tutor_config();
        assert_eq!(tutor.mode, ExchangeMode::Session);
        assert_eq!(tutor.instructions.as_deref(), Some("Be brief."));
        assert_eq!(tutor.render, RenderMode::Immediate);
    }
}
