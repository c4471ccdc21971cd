//! Presentation layer for article-tutor
//!
//! This crate contains the CLI definition, the console transcript view,
//! the status spinner and the interactive chat loop.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, CommandAction};
pub use cli::commands::Cli;
pub use output::console::{ConsoleTranscriptView, role_prefix};
pub use progress::reporter::StatusSpinner;
