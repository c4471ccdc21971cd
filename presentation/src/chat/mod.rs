//! Interactive chat module
//!
//! Provides a line-editor based chat loop around a tutor session.

mod repl;

pub use repl::{ChatRepl, CommandAction};
