//! Transcript view port
//!
//! The display surface of the tutor: a scrolling log, a status line and a
//! submit affordance. Implementations live in the presentation layer.

use tutor_domain::Role;

/// Display surface driven by the pipeline
pub trait TranscriptView: Send + Sync {
    /// Add a new log entry.
    fn append_entry(&self, role: Role, content: &str);

    /// Extend the newest entry with more text.
    fn append_to_last(&self, chunk: &str);

    /// Keep the newest content in view.
    fn scroll_to_end(&self) {}

    fn set_status(&self, status: &str);

    /// Enable or disable the submit affordance.
    fn set_submit_enabled(&self, _enabled: bool) {}
}

/// No-op view for when nothing is displayed
pub struct NoTranscriptView;

impl TranscriptView for NoTranscriptView {
    fn append_entry(&self, _role: Role, _content: &str) {}
    fn append_to_last(&self, _chunk: &str) {}
    fn set_status(&self, _status: &str) {}
}
