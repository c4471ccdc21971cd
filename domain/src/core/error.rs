//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Unknown exchange mode: {0} (expected stateless, session or dummy)")]
    UnknownExchangeMode(String),

    #[error("Unknown render mode: {0} (expected immediate or incremental)")]
    UnknownRenderStyle(String),
}
