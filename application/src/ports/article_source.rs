//! Article source port
//!
//! Supplies the article context for each request.

use tutor_domain::ArticleContext;

/// Source of the article the reader is asking about.
///
/// Called once per submission. Implementations never fail: a page without a
/// content region yields an empty body, not an error.
pub trait ArticleSource: Send + Sync {
    fn extract(&self) -> ArticleContext;
}

/// Source returning the same pre-built context every time.
#[derive(Debug, Clone, Default)]
pub struct StaticArticleSource {
    context: ArticleContext,
}

impl StaticArticleSource {
    pub fn new(context: ArticleContext) -> Self {
        Self { context }
    }
}

impl ArticleSource for StaticArticleSource {
    fn extract(&self) -> ArticleContext {
        self.context.clone()
    }
}
