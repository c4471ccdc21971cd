//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question about the article (Value Object)
///
/// Always holds trimmed, non-empty text. Blank submissions never become a
/// `Question`, so nothing downstream of the input box has to re-check them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning None if blank
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Create a new question, failing on blank input
    pub fn parse(content: impl AsRef<str>) -> Result<Self, DomainError> {
        Self::try_new(content).ok_or(DomainError::EmptyQuestion)
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl std::str::FromStr for Question {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
