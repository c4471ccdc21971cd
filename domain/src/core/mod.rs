//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] — a validated, trimmed reader question
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod question;
pub mod string;
