//! Application layer for article-tutor
//!
//! This crate contains the question/answer pipeline, its port definitions and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::TutorConfig;
pub use ports::{
    article_source::{ArticleSource, StaticArticleSource},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    proxy_transport::{CHAT_COMPLETIONS_PATH, ProxyTransport, TransportError},
    transcript_view::{NoTranscriptView, TranscriptView},
};
pub use use_cases::ask_article::{SubmitOutcome, TutorSession};
pub use use_cases::render_answer::ResponseRenderer;
