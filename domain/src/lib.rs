//! Domain layer for article-tutor
//!
//! This crate contains the value objects and pure logic of the question/answer
//! pipeline. It has no dependencies on HTTP, HTML parsing or terminal concerns.
//!
//! # Core Concepts
//!
//! - **Article context**: the title, URL and (bounded) body text of the article
//!   the reader is asking about.
//! - **Exchange mode**: how a question travels to the proxy. `Stateless`
//!   embeds the whole article every turn, `Session` sends the bare question and
//!   ships the article as metadata, `Dummy` never leaves the process.
//! - **Session state**: the opaque session id handed back by the proxy and
//!   echoed on every later request.

pub mod article;
pub mod conversation;
pub mod core;
pub mod exchange;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use article::{ArticleContext, DEFAULT_MAX_CONTEXT_CHARS};
pub use conversation::{ConversationLog, ConversationTurn, Role};
pub use core::{error::DomainError, question::Question};
pub use exchange::{
    builder::RequestBuilder,
    mode::{ExchangeMode, PayloadShape},
    payload::{
        ChatMessage, DEFAULT_TEMPERATURE, PROXY_MODEL_TAG, PayloadMetadata, RequestPayload,
    },
    prompt::{DUMMY_GREETING, DUMMY_REPLY, READY_GREETING, TUTOR_INSTRUCTIONS},
};
pub use render::{
    DEFAULT_CHUNK_CHARS, DEFAULT_REVEAL_DELAY_MS, RenderMode, RenderStyle, reveal_chunks,
};
pub use session::{
    envelope::{PLACEHOLDER_ANSWER, ResponseEnvelope},
    state::{SessionHandle, SessionState},
};
