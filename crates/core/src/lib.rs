pub mod article;
pub mod error;
pub mod fetch;
pub mod keywords;
pub mod scoring;
pub mod source;
pub mod stopwords;
pub mod summarizer;
pub mod summary;
pub mod tokenize;

pub use article::Article;
pub use error::{Result, TeaserError};
pub use fetch::FetchConfig;
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{fetch_file, fetch_stdin};
pub use keywords::{Keyword, Keywords};
pub use scoring::{ScoreBreakdown, ScoreConfig};
#[doc(hidden)]
pub use scoring::{Scorer, dbs, length_score, sbs, sentence_position, title_score};
#[cfg(feature = "fetch")]
pub use source::HttpArticleSource;
pub use source::ArticleSource;
pub use stopwords::StopWords;
pub use summarizer::{Summarizer, SummarizerConfig, SummarizerConfigBuilder, summarize};
#[cfg(feature = "fetch")]
pub use summarizer::summarize_url;
pub use summary::{OutputFormat, ScoredSentence, Summary};
pub use tokenize::{split_sentences, split_words, try_split_words};
