//! Answer rendering strategy.
//!
//! Incremental rendering is a typing effect over an answer that has already
//! arrived in full. It is not network streaming.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Characters revealed per step in incremental mode.
pub const DEFAULT_CHUNK_CHARS: usize = 3;

/// Pause between reveal steps in incremental mode.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 12;

/// Rendering style as named in config and on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    #[default]
    Immediate,
    Incremental,
}

impl FromStr for RenderStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "immediate" | "whole" => Ok(RenderStyle::Immediate),
            "incremental" | "typing" => Ok(RenderStyle::Incremental),
            other => Err(DomainError::UnknownRenderStyle(other.to_string())),
        }
    }
}

impl std::fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderStyle::Immediate => f.write_str("immediate"),
            RenderStyle::Incremental => f.write_str("incremental"),
        }
    }
}

/// Fully resolved rendering strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Append the whole answer as one entry.
    #[default]
    Immediate,
    /// Reveal `chunk_chars` characters at a time, pausing `delay` in between.
    Incremental { chunk_chars: usize, delay: Duration },
}

impl RenderMode {
    pub fn incremental(chunk_chars: usize, delay: Duration) -> Self {
        RenderMode::Incremental {
            chunk_chars: chunk_chars.max(1),
            delay,
        }
    }

    pub fn from_style(style: RenderStyle, chunk_chars: usize, delay: Duration) -> Self {
        match style {
            RenderStyle::Immediate => RenderMode::Immediate,
            RenderStyle::Incremental => RenderMode::incremental(chunk_chars, delay),
        }
    }
}

/// Split `text` into consecutive pieces of at most `chunk_chars` characters.
///
/// Produces `ceil(chars / chunk_chars)` pieces whose concatenation is `text`.
/// A `chunk_chars` of zero is treated as one.
pub fn reveal_chunks(text: &str, chunk_chars: usize) -> Vec<&str> {
    let chunk_chars = chunk_chars.max(1);
    let mut chunks = Vec::with_capacity(text.len() / chunk_chars + 1);
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == chunk_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_count_and_concatenation() {
        let samples = ["", "a", "ab", "abc", "abcd", "Answer.", "héllo wörld ✓"];
        for text in samples {
            for c in 1..=5 {
                let chunks = reveal_chunks(text, c);
                let n = text.chars().count();
                assert_eq!(chunks.len(), n.div_ceil(c), "text={text:?} c={c}");
                assert_eq!(chunks.concat(), text);
                assert!(chunks.iter().all(|ch| ch.chars().count() <= c));
            }
        }
    }

    #[test]
    fn test_chunks_of_three() {
        assert_eq!(reveal_chunks("Answer.", 3), vec!["Ans", "wer", "."]);
    }

    #[test]
    fn test_zero_chunk_size_treated_as_one() {
        assert_eq!(reveal_chunks("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_render_mode_from_style() {
        let delay = Duration::from_millis(DEFAULT_REVEAL_DELAY_MS);
        assert_eq!(
            RenderMode::from_style(RenderStyle::Immediate, 3, delay),
            RenderMode::Immediate
        );
        assert_eq!(
            RenderMode::from_style(RenderStyle::Incremental, 0, delay),
            RenderMode::Incremental {
                chunk_chars: 1,
                delay
            }
        );
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("incremental".parse(), Ok(RenderStyle::Incremental));
        assert_eq!("IMMEDIATE".parse(), Ok(RenderStyle::Immediate));
        assert!("stream".parse::<RenderStyle>().is_err());
    }
}
