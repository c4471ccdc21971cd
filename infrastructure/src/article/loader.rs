//! Host page loading
//!
//! The page is read once at startup, from a local file or an `http(s)` URL.
//! Extraction then runs against the in-memory copy for every request.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Maximum page size (5 MB)
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

const USER_AGENT: &str = concat!("ArticleTutor/", env!("CARGO_PKG_VERSION"));

/// Errors while loading the host page
#[derive(Debug, Error)]
pub enum ArticleLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error fetching {url}: {status}")]
    Status { url: String, status: u16 },

    #[error("Page too large: {0} bytes (max: 5 MB)")]
    TooLarge(usize),
}

/// Raw page HTML plus the URL it is known by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDocument {
    pub html: String,
    pub url: String,
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Load the page at `location`: a URL is fetched, anything else is a path.
pub async fn load_article(
    client: &reqwest::Client,
    location: &str,
) -> Result<ArticleDocument, ArticleLoadError> {
    if is_remote(location) {
        fetch(client, location).await
    } else {
        read_file(Path::new(location)).await
    }
}

async fn fetch(client: &reqwest::Client, url: &str) -> Result<ArticleDocument, ArticleLoadError> {
    info!("Fetching article from {}", url);
    let fetch_error = |source| ArticleLoadError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(fetch_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ArticleLoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    if let Some(length) = response.content_length()
        && length > MAX_BODY_SIZE as u64
    {
        return Err(ArticleLoadError::TooLarge(length as usize));
    }

    // Redirects may have moved us; the final URL is the article's identity.
    let final_url = response.url().to_string();
    let body = response.bytes().await.map_err(fetch_error)?;
    if body.len() > MAX_BODY_SIZE {
        return Err(ArticleLoadError::TooLarge(body.len()));
    }

    debug!("Fetched {} bytes from {}", body.len(), final_url);
    Ok(ArticleDocument {
        html: String::from_utf8_lossy(&body).into_owned(),
        url: final_url,
    })
}

async fn read_file(path: &Path) -> Result<ArticleDocument, ArticleLoadError> {
    let io_error = |source| ArticleLoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = tokio::fs::metadata(path).await.map_err(io_error)?;
    if metadata.len() > MAX_BODY_SIZE as u64 {
        return Err(ArticleLoadError::TooLarge(metadata.len() as usize));
    }

    let bytes = tokio::fs::read(path).await.map_err(io_error)?;
    let absolute = tokio::fs::canonicalize(path)
        .await
        .unwrap_or_else(|_| path.to_path_buf());

    debug!("Read {} bytes from {}", bytes.len(), absolute.display());
    Ok(ArticleDocument {
        html: String::from_utf8_lossy(&bytes).into_owned(),
        url: format!("file://{}", absolute.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://blog.test/a"));
        assert!(is_remote("http://localhost:8000/a"));
        assert!(!is_remote("posts/a.html"));
        assert!(!is_remote("/tmp/https.html"));
    }

    #[tokio::test]
    async fn test_reads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("post.html");
        std::fs::write(&file, "<div class=\"content\">Hi</div>").unwrap();

        let doc = load_article(&reqwest::Client::new(), file.to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(doc.html, "<div class=\"content\">Hi</div>");
        assert!(doc.url.starts_with("file://"));
        assert!(doc.url.ends_with("post.html"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = load_article(&reqwest::Client::new(), "/definitely/not/here.html")
            .await
            .unwrap_err();
        assert!(matches!(err, ArticleLoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_fetches_remote_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/x"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("<h1>X</h1>"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/posts/x", server.uri());
        let doc = load_article(&reqwest::Client::new(), &url).await.unwrap();

        assert_eq!(doc.html, "<h1>X</h1>");
        assert_eq!(doc.url, url);
    }

    #[tokio::test]
    async fn test_remote_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/missing", server.uri());
        let err = load_article(&reqwest::Client::new(), &url)
            .await
            .unwrap_err();

        assert!(matches!(err, ArticleLoadError::Status { status: 404, .. }));
    }
}
