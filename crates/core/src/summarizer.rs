//! Main summarization API.
//!
//! This module provides the primary API for summarizing text. The main entry
//! point is the [`Summarizer`] struct, along with the convenience functions
//! [`summarize`] and [`summarize_url`].
//!
//! # Example
//!
//! ```rust
//! use teaser_core::Summarizer;
//!
//! let summarizer = Summarizer::new();
//! let sentences = summarizer.summarize("Cats", "Cats purr. Dogs bark.");
//! assert_eq!(sentences, vec!["Cats purr.", "Dogs bark."]);
//! ```

use std::cmp::Ordering;

use crate::article::Article;
use crate::keywords::{DEFAULT_KEYWORD_LIMIT, Keywords};
use crate::scoring::{ScoreConfig, Scorer};
use crate::source::ArticleSource;
#[cfg(feature = "fetch")]
use crate::source::HttpArticleSource;
use crate::stopwords::StopWords;
use crate::summary::{ScoredSentence, Summary};
use crate::tokenize::{split_sentences, split_words};

/// Configuration for the Summarizer.
///
/// # Example
///
/// ```rust
/// use teaser_core::SummarizerConfig;
///
/// let config = SummarizerConfig::builder()
///     .max_sentences(3)
///     .max_keywords(15)
///     .build();
/// assert_eq!(config.max_sentences, 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizerConfig {
    /// Number of sentences in a summary (default: 5). Documents with this
    /// many sentences or fewer are returned whole.
    pub max_sentences: usize,

    /// Number of keywords extracted per document (default: 10).
    pub max_keywords: usize,

    /// Sentence scoring weights and constants.
    pub score: ScoreConfig,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self { max_sentences: 5, max_keywords: DEFAULT_KEYWORD_LIMIT, score: ScoreConfig::default() }
    }
}

impl SummarizerConfig {
    /// Creates a new builder for SummarizerConfig.
    pub fn builder() -> SummarizerConfigBuilder {
        SummarizerConfigBuilder::new()
    }
}

/// Builder for SummarizerConfig.
pub struct SummarizerConfigBuilder {
    config: SummarizerConfig,
}

impl SummarizerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: SummarizerConfig::default() }
    }

    /// Sets the number of sentences in a summary.
    pub fn max_sentences(mut self, value: usize) -> Self {
        self.config.max_sentences = value;
        self
    }

    /// Sets the number of keywords extracted per document.
    pub fn max_keywords(mut self, value: usize) -> Self {
        self.config.max_keywords = value;
        self
    }

    /// Sets the ideal sentence length in words.
    pub fn ideal_sentence_length(mut self, value: usize) -> Self {
        self.config.score.ideal_sentence_length = value;
        self
    }

    /// Replaces the scoring configuration.
    pub fn score(mut self, value: ScoreConfig) -> Self {
        self.config.score = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> SummarizerConfig {
        self.config
    }
}

impl Default for SummarizerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main entry point for summarization.
///
/// A Summarizer is cheap to clone and safe to share between threads; it holds
/// no state that changes between calls.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
    stop_words: StopWords,
}

impl Summarizer {
    /// Creates a Summarizer with default settings and English stop words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a Summarizer with a custom configuration and stop-word set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use teaser_core::{StopWords, Summarizer, SummarizerConfig};
    ///
    /// let config = SummarizerConfig::builder().max_sentences(3).build();
    /// let stop_words = StopWords::from_words(["the", "a", "an"]);
    /// let summarizer = Summarizer::with_config(config, stop_words);
    /// ```
    pub fn with_config(config: SummarizerConfig, stop_words: StopWords) -> Self {
        Self { config, stop_words }
    }

    /// Creates a Summarizer with default settings and the given stop words.
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self { config: SummarizerConfig::default(), stop_words }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Extracts the document's keywords with this summarizer's settings.
    pub fn keywords(&self, text: &str) -> Keywords {
        Keywords::extract(text, &self.stop_words, self.config.max_keywords)
    }

    /// Summarizes `text` into its most representative sentences.
    ///
    /// Documents of up to `max_sentences` sentences come back whole and in
    /// order. Longer ones come back as their `max_sentences` best sentences,
    /// best first; equal scores keep document order.
    pub fn summarize(&self, title: &str, text: &str) -> Vec<String> {
        self.summarize_document(title, text).texts()
    }

    /// Summarizes `text` and keeps the scores, positions and keywords.
    pub fn summarize_document(&self, title: &str, text: &str) -> Summary {
        let sentences = split_sentences(text);
        let sentence_count = sentences.len();
        let keywords = self.keywords(text);

        if sentence_count <= self.config.max_sentences {
            tracing::debug!(sentences = sentence_count, "short document, returning every sentence");
            let sentences = sentences
                .into_iter()
                .enumerate()
                .map(|(i, text)| ScoredSentence { text, position: i + 1, score: None })
                .collect();

            return Summary { title: title.to_string(), sentences, keywords, sentence_count, passthrough: true };
        }

        let mut ranked = self.rank_sentences(sentences, title, &keywords);
        ranked.truncate(self.config.max_sentences);

        tracing::debug!(sentences = sentence_count, selected = ranked.len(), "summarized document");
        Summary { title: title.to_string(), sentences: ranked, keywords, sentence_count, passthrough: false }
    }

    /// Scores every sentence of `text` and returns them best first.
    ///
    /// Unlike [`Summarizer::summarize`], short documents are scored too and
    /// nothing is cut.
    pub fn rank(&self, title: &str, text: &str) -> Vec<ScoredSentence> {
        let keywords = self.keywords(text);
        self.rank_sentences(split_sentences(text), title, &keywords)
    }

    fn rank_sentences(&self, sentences: Vec<String>, title: &str, keywords: &Keywords) -> Vec<ScoredSentence> {
        let title_words = split_words(title);
        let scorer = Scorer {
            title_words: &title_words,
            keywords,
            stop_words: &self.stop_words,
            total_sentences: sentences.len(),
            config: &self.config.score,
        };

        let mut scored: Vec<ScoredSentence> = sentences
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let position = i + 1;
                let score = scorer.score(position, &split_words(&text));
                ScoredSentence { text, position, score: Some(score) }
            })
            .collect();

        // sort_by is stable, so ties stay in document order
        scored.sort_by(|a, b| b.total().partial_cmp(&a.total()).unwrap_or(Ordering::Equal));
        scored
    }

    /// Summarizes an already fetched article.
    ///
    /// Returns `None` unless the article has both a title and text.
    pub fn summarize_article(&self, article: &Article) -> Option<Summary> {
        if !article.is_summarizable() {
            tracing::debug!(url = ?article.source_url, "article has no title or no text");
            return None;
        }

        Some(self.summarize_document(&article.title, &article.cleaned_text))
    }

    /// Fetches an article through `source` and summarizes it.
    ///
    /// Fetch and extraction failures are logged and yield `None`, as does an
    /// article without a title or text.
    pub async fn summarize_url_document<S: ArticleSource>(&self, source: &S, url: &str) -> Option<Summary> {
        let article = match source.fetch(url).await {
            Ok(article) => article,
            Err(e) if e.is_extraction_failure() => {
                tracing::warn!(%url, error = %e, "failed to extract article from url");
                return None;
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "couldn't fetch the url");
                return None;
            }
        };

        self.summarize_article(&article)
    }

    /// Fetches an article through `source` and returns its summary sentences.
    pub async fn summarize_url<S: ArticleSource>(&self, source: &S, url: &str) -> Option<Vec<String>> {
        self.summarize_url_document(source, url).await.map(|summary| summary.texts())
    }
}

/// Convenience function for one-liner summarization with defaults.
///
/// # Example
///
/// ```rust
/// let sentences = teaser_core::summarize("Title", "One. Two.");
/// assert_eq!(sentences, vec!["One.", "Two."]);
/// ```
pub fn summarize(title: &str, text: &str) -> Vec<String> {
    Summarizer::new().summarize(title, text)
}

/// Fetch a page over HTTP and summarize it with defaults.
#[cfg(feature = "fetch")]
pub async fn summarize_url(url: &str) -> Option<Vec<String>> {
    Summarizer::new().summarize_url(&HttpArticleSource::new(), url).await
}
