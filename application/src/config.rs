//! Application-level configuration.
//!
//! This module provides the settings that shape a [`TutorSession`](crate::TutorSession):
//! how questions travel and how answers are drawn.

use tutor_domain::{ExchangeMode, RenderMode};

/// Tutor behavior configuration.
#[derive(Debug, Clone, Default)]
pub struct TutorConfig {
    /// How questions reach the proxy.
    pub mode: ExchangeMode,
    /// How answers are shown.
    pub render: RenderMode,
    /// Replacement for the built-in tutor instructions (stateless mode only).
    pub instructions: Option<String>,
}

impl TutorConfig {
    pub fn new(mode: ExchangeMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn with_render(mut self, render: RenderMode) -> Self {
        self.render = render;
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Status line shown while the tutor waits for input.
    pub fn ready_status(&self) -> &'static str {
        match self.mode {
            ExchangeMode::Stateless => "Ready. Using full article context in each request.",
            ExchangeMode::Session => "Ready. Article context is sent as session metadata.",
            ExchangeMode::Dummy => "Ready.",
        }
    }
}
