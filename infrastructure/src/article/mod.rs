//! Article adapters
//!
//! - [`loader`] — reads the host page from disk or over HTTP
//! - [`html`] — extracts title and body text from the page

pub mod html;
pub mod loader;

pub use html::{DEFAULT_CONTENT_SELECTOR, HtmlArticleSource, InvalidSelector};
pub use loader::{ArticleDocument, ArticleLoadError, load_article};
