//! Answer rendering.
//!
//! Draws an answer that is already fully in hand, either in one go or as a
//! typing effect.

use crate::ports::transcript_view::TranscriptView;
use tracing::trace;
use tutor_domain::{RenderMode, Role, reveal_chunks};

/// Draws answers into a [`TranscriptView`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseRenderer {
    mode: RenderMode,
}

impl ResponseRenderer {
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    /// Render `content` as a new entry. Returns the number of reveal steps.
    ///
    /// Immediate mode is a single step. Incremental mode opens an empty entry
    /// and then takes `ceil(chars / chunk_chars)` steps, sleeping between
    /// consecutive steps. The view is scrolled after every step.
    pub async fn render(&self, view: &dyn TranscriptView, role: Role, content: &str) -> usize {
        match self.mode {
            RenderMode::Immediate => {
                view.append_entry(role, content);
                view.scroll_to_end();
                1
            }
            RenderMode::Incremental { chunk_chars, delay } => {
                let chunks = reveal_chunks(content, chunk_chars);
                trace!("Revealing {} chunks of {} chars", chunks.len(), chunk_chars);

                view.append_entry(role, "");
                view.scroll_to_end();
                for (step, chunk) in chunks.iter().enumerate() {
                    if step > 0 && !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    view.append_to_last(chunk);
                    view.scroll_to_end();
                }
                chunks.len()
            }
        }
    }
}
