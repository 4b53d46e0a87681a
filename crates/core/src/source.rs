//! Article sources.
//!
//! The summarizer never touches the network itself. It asks an
//! [`ArticleSource`] for an [`Article`] and works on whatever comes back.

use std::future::Future;

use crate::{Article, Result};
#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_url};

/// Anything that can turn a locator (usually a URL) into an [`Article`].
///
/// Implementations report retrieval problems as fetch failures and unusable
/// pages as extraction failures, see [`crate::TeaserError::is_fetch_failure`].
pub trait ArticleSource {
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<Article>> + Send;
}

/// Downloads pages over HTTP and extracts their title and paragraphs.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone, Default)]
pub struct HttpArticleSource {
    config: FetchConfig,
}

#[cfg(feature = "fetch")]
impl HttpArticleSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FetchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

#[cfg(feature = "fetch")]
impl ArticleSource for HttpArticleSource {
    async fn fetch(&self, locator: &str) -> Result<Article> {
        let html = fetch_url(locator, &self.config).await?;
        Article::from_html(&html, Some(locator))
    }
}

#[cfg(all(test, feature = "fetch"))]
mod tests {
    use super::*;
    use crate::TeaserError;

    #[test]
    fn test_http_source_config() {
        let config = FetchConfig { timeout: 5, user_agent: "test-agent".to_string() };
        let source = HttpArticleSource::with_config(config);
        assert_eq!(source.config().timeout, 5);
        assert_eq!(HttpArticleSource::new().config().timeout, 30);
    }

    #[tokio::test]
    async fn test_http_source_invalid_url_is_fetch_failure() {
        let err = HttpArticleSource::new().fetch("not a url").await.unwrap_err();
        assert!(err.is_fetch_failure());
        assert!(matches!(err, TeaserError::InvalidUrl(_)));
    }
}
