//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod article_source;
pub mod conversation_logger;
pub mod proxy_transport;
pub mod transcript_view;
