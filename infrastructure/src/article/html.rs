//! HTML article extraction
//!
//! Pulls the readable text and title out of a page the way a browser's
//! `innerText` would. Scripts and styles are dropped and block elements get
//! their own lines. Whitespace runs collapse except inside `<pre>`, and table
//! cells are tab separated.

use scraper::{ElementRef, Html, Node, Selector};
use thiserror::Error;
use tracing::debug;
use tutor_application::ArticleSource;
use tutor_domain::{ArticleContext, DEFAULT_MAX_CONTEXT_CHARS};

/// Content region looked up when none is configured.
pub const DEFAULT_CONTENT_SELECTOR: &str = ".content";

/// Headings that can title the article, first match in document order.
const TITLE_SELECTOR: &str = "h1, h2, h3";

/// Tags whose entire subtree should be ignored
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "svg", "template", "head"];

/// Tags rendered on their own line(s)
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li",
    "main", "nav", "ol", "p", "pre", "section", "table", "textarea", "tr", "ul",
];

/// Tags whose text keeps its whitespace and line breaks
const PREFORMATTED_TAGS: &[&str] = &["pre", "textarea", "listing"];

/// Table cells, separated by a tab within their row
const CELL_TAGS: &[&str] = &["td", "th"];

#[derive(Debug, Error)]
#[error("Invalid CSS selector `{selector}`: {reason}")]
pub struct InvalidSelector {
    pub selector: String,
    pub reason: String,
}

fn parse_selector(selector: &str) -> Result<Selector, InvalidSelector> {
    Selector::parse(selector).map_err(|e| InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// [`ArticleSource`] backed by an HTML document held in memory
///
/// The document is re-parsed on every [`extract`](ArticleSource::extract), so
/// each request sees a fresh context.
#[derive(Debug, Clone)]
pub struct HtmlArticleSource {
    html: String,
    url: String,
    content: Selector,
    headings: Selector,
    page_title: Selector,
    max_chars: usize,
}

impl HtmlArticleSource {
    /// `content_selector` picks the content region (see [`DEFAULT_CONTENT_SELECTOR`]).
    pub fn new(
        html: impl Into<String>,
        url: impl Into<String>,
        content_selector: &str,
    ) -> Result<Self, InvalidSelector> {
        Ok(Self {
            html: html.into(),
            url: url.into(),
            content: parse_selector(content_selector)?,
            headings: parse_selector(TITLE_SELECTOR)?,
            page_title: parse_selector("title")?,
            max_chars: DEFAULT_MAX_CONTEXT_CHARS,
        })
    }

    /// Bound the body to `max_chars` characters.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    fn fallback_title(&self, document: &Html) -> String {
        document
            .select(&self.page_title)
            .next()
            .map(|el| collapse_spaces(&el.text().collect::<String>()))
            .unwrap_or_default()
    }
}

impl ArticleSource for HtmlArticleSource {
    fn extract(&self) -> ArticleContext {
        let document = Html::parse_document(&self.html);

        let Some(region) = document.select(&self.content).next() else {
            debug!("No content region in page; using empty context");
            return ArticleContext::empty(self.fallback_title(&document), self.url.clone());
        };

        let title = region
            .select(&self.headings)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.fallback_title(&document));

        let body = element_text(region);
        debug!(
            "Extracted article: title {:?}, {} body chars",
            title,
            body.chars().count()
        );
        ArticleContext::new(title, self.url.clone(), &body, self.max_chars)
    }
}

fn element_text(element: ElementRef) -> String {
    let mut text = TextCollector::default();
    collect_element_text(element, false, &mut text);
    text.finish()
}

/// Recursively collect text from an element, skipping elements matching SKIP_TAGS
fn collect_element_text(element: ElementRef, preformatted: bool, out: &mut TextCollector) {
    let tag_name = element.value().name();
    if SKIP_TAGS.contains(&tag_name) {
        return;
    }
    if tag_name == "br" {
        out.line_break(preformatted);
        return;
    }

    let preformatted = preformatted || PREFORMATTED_TAGS.contains(&tag_name);
    let block = BLOCK_TAGS.contains(&tag_name);
    if block {
        out.line_break(false);
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) if preformatted => out.verbatim(text),
            Node::Text(text) => out.text(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_element_text(child_el, preformatted, out);
                }
            }
            _ => {}
        }
    }

    if block {
        out.line_break(false);
    }
    if CELL_TAGS.contains(&tag_name) {
        out.cell_end();
    }
}

/// Accumulates innerText-style output. Whitespace runs become one space and
/// never start or end a line.
#[derive(Default)]
struct TextCollector {
    out: String,
    space: bool,
    tab: bool,
}

impl TextCollector {
    fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n')
    }

    fn text(&mut self, text: &str) {
        for c in text.chars() {
            if c.is_whitespace() {
                self.space = !self.at_line_start();
            } else {
                self.separate();
                self.out.push(c);
            }
        }
    }

    fn verbatim(&mut self, text: &str) {
        if !text.is_empty() {
            self.separate();
            self.out.push_str(text);
        }
    }

    fn line_break(&mut self, forced: bool) {
        self.space = false;
        self.tab = false;
        if forced || !self.at_line_start() {
            self.out.push('\n');
        }
    }

    fn cell_end(&mut self) {
        self.space = false;
        self.tab = true;
    }

    fn separate(&mut self) {
        if self.tab {
            self.out.push('\t');
        } else if self.space {
            self.out.push(' ');
        }
        self.space = false;
        self.tab = false;
    }

    fn finish(self) -> String {
        self.out.trim_end().to_string()
    }
}

fn collapse_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
