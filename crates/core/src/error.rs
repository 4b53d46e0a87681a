//! Error types for teaser operations.
//!
//! This module defines the main error type [`TeaserError`] which represents
//! everything that can go wrong while loading stop words, fetching an
//! article, or extracting its text. Scoring itself never fails.
//!
//! # Example
//!
//! ```rust
//! use teaser_core::{TeaserError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(TeaserError::NoContent);
//!     }
//!     Ok(text)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetching and extraction operations.
///
/// Failures fall in two groups that callers may want to tell apart:
/// fetch failures (the bytes never arrived) and extraction failures
/// (the bytes arrived but held no usable article).
/// See [`TeaserError::is_fetch_failure`] and [`TeaserError::is_extraction_failure`].
#[derive(Error, Debug)]
pub enum TeaserError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures, connection issues
    /// and non-success HTTP statuses.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Standard I/O errors while reading input or stop-word lists.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are not valid UTF-8.
    #[error("Invalid character encoding")]
    InvalidEncoding,

    /// HTML could not be parsed or queried.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The document held no title or body text worth summarizing.
    #[error("No content could be extracted from the document")]
    NoContent,

    /// A stop-word list could not be loaded.
    #[error("Stop-word list error: {0}")]
    StopWordsError(String),

    /// A summary could not be serialized.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TeaserError {
    /// Returns `true` when the article could not be retrieved at all.
    pub fn is_fetch_failure(&self) -> bool {
        match self {
            #[cfg(feature = "fetch")]
            TeaserError::HttpError(_) => true,
            TeaserError::Timeout { .. }
            | TeaserError::InvalidUrl(_)
            | TeaserError::FileNotFound(_)
            | TeaserError::Io(_) => true,
            _ => false,
        }
    }

    /// Returns `true` when the article was retrieved but yielded nothing usable.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            TeaserError::InvalidEncoding | TeaserError::HtmlParseError(_) | TeaserError::NoContent
        )
    }
}

/// Result type alias for TeaserError.
pub type Result<T> = std::result::Result<T, TeaserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TeaserError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_timeout_error() {
        let err = TeaserError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_failure_kinds() {
        assert!(TeaserError::Timeout { timeout: 5 }.is_fetch_failure());
        assert!(TeaserError::InvalidUrl("x".into()).is_fetch_failure());
        assert!(!TeaserError::NoContent.is_fetch_failure());

        assert!(TeaserError::NoContent.is_extraction_failure());
        assert!(TeaserError::InvalidEncoding.is_extraction_failure());
        assert!(!TeaserError::Timeout { timeout: 5 }.is_extraction_failure());
    }

    #[test]
    fn test_stop_words_error_is_neither_kind() {
        let err = TeaserError::StopWordsError("empty".into());
        assert!(!err.is_fetch_failure());
        assert!(!err.is_extraction_failure());
    }
}
