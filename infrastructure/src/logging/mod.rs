//! Transcript logging
//!
//! [`JsonlConversationLogger`] implements the
//! [`ConversationLogger`](tutor_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
