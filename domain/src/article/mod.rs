//! Article context: what the reader is asking about.

use crate::core::string::prefix_chars;
use serde::{Deserialize, Serialize};

/// Upper bound on article body characters sent to the proxy.
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 120_000;

/// Title, URL and bounded body text of the current article (Value Object)
///
/// Built fresh for every request. The body never exceeds the bound it was
/// constructed with; longer text is cut to a prefix rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleContext {
    title: String,
    url: String,
    body: String,
}

impl ArticleContext {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        body: &str,
        max_chars: usize,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            body: prefix_chars(body, max_chars).to_string(),
        }
    }

    /// Context for a page with no article region.
    pub fn empty(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            body: String::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Body length in characters.
    pub fn body_chars(&self) -> usize {
        self.body.chars().count()
    }
}
