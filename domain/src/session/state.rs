//! Session identifier tracking.
//!
//! ```text
//! NoSession --(reply with id)--> HasSession(id) --(reply with id')--> HasSession(id')
//! ```
//!
//! There is no terminal state; a session lasts as long as its owner.

use super::envelope::ResponseEnvelope;

/// The session id to echo on the next request, if any (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHandle {
    id: Option<String>,
}

impl SessionHandle {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.id.is_some()
    }
}

/// Holder of the current [`SessionHandle`]
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    handle: SessionHandle,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt the envelope's session id when it carries a non-empty one.
    ///
    /// Returns `true` if the held id changed.
    pub fn update(&mut self, envelope: &ResponseEnvelope) -> bool {
        match envelope.session_id().filter(|id| !id.is_empty()) {
            Some(id) if self.handle.id() != Some(id) => {
                self.handle = SessionHandle::with_id(id);
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> &SessionHandle {
        &self.handle
    }
}
