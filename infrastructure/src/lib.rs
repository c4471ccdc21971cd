//! Infrastructure layer for article-tutor
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the HTTP proxy transport, HTML article extraction,
//! configuration file loading and the JSONL transcript logger.

pub mod article;
pub mod config;
pub mod logging;
pub mod proxy;

// Re-export commonly used types
pub use article::{
    ArticleDocument, ArticleLoadError, DEFAULT_CONTENT_SELECTOR, HtmlArticleSource,
    InvalidSelector, load_article,
};
pub use config::{
    API_BASE_ENV, ConfigLoader, ConfigValidationError, DEFAULT_PROXY_BASE_URL, FileConfig,
    FileLoggingConfig, FileProxyConfig, FileRenderConfig, FileReplConfig, FileTutorConfig,
};
pub use logging::JsonlConversationLogger;
pub use proxy::{HttpProxyTransport, ProxyClientError};
