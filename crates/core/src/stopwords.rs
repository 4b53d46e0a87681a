//! Stop-word sets.
//!
//! A [`StopWords`] value is the read-only set of tokens excluded from keyword
//! and title scoring. It is passed into the keyword extractor and the scorer
//! rather than read from a global, so any number of summarizers with different
//! lists can run side by side.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::{Result, TeaserError};

/// Tokens that are always treated as stop words, whatever the list says.
pub const ALWAYS_EXCLUDED: [&str; 4] = ["-", " ", ",", "."];

const ENGLISH_LIST: &str = include_str!("../data/stopwords/en.txt");

static ENGLISH: LazyLock<StopWords> = LazyLock::new(|| StopWords::from_words(ENGLISH_LIST.lines()));

/// An immutable, cheaply clonable set of stop words.
///
/// # Example
///
/// ```rust
/// use teaser_core::StopWords;
///
/// let stop_words = StopWords::from_words(["the", "a"]);
/// assert!(stop_words.contains("the"));
/// assert!(stop_words.contains(","));
/// assert!(!stop_words.contains("cats"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWords {
    words: Arc<HashSet<String>>,
}

impl StopWords {
    /// The bundled English list.
    ///
    /// The list is parsed once per process; every call hands out a clone that
    /// shares the same set.
    pub fn english() -> Self {
        ENGLISH.clone()
    }

    /// Builds a set from any sequence of words.
    ///
    /// Entries are taken verbatim except for line endings; empty entries
    /// are skipped. The [`ALWAYS_EXCLUDED`] tokens are added.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: HashSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim_end_matches(['\r', '\n']).to_string())
            .filter(|word| !word.is_empty())
            .collect();
        set.extend(ALWAYS_EXCLUDED.iter().map(|s| s.to_string()));

        Self { words: Arc::new(set) }
    }

    /// Reads a line-oriented list, one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self::from_words(lines))
    }

    /// Reads a line-oriented list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`TeaserError::FileNotFound`] if the path does not exist and
    /// [`TeaserError::StopWordsError`] if the file holds no words at all.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TeaserError::FileNotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let stop_words = Self::from_reader(BufReader::new(file))?;

        if stop_words.len() == ALWAYS_EXCLUDED.len() {
            return Err(TeaserError::StopWordsError(format!("{} contains no words", path.display())));
        }

        tracing::debug!(path = %path.display(), count = stop_words.len(), "loaded stop words");
        Ok(stop_words)
    }

    /// Checks whether `word` is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words, including the always-excluded tokens.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty. Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_contains_common_words() {
        let stop_words = StopWords::english();
        for word in ["the", "a", "and", "are", "of", "is"] {
            assert!(stop_words.contains(word), "{word} should be a stop word");
        }
        assert!(!stop_words.contains("cats"));
    }

    #[test]
    fn test_always_excluded_tokens() {
        let stop_words = StopWords::from_words(Vec::<String>::new());
        assert_eq!(stop_words.len(), 4);
        for token in ALWAYS_EXCLUDED {
            assert!(stop_words.contains(token));
        }
    }

    #[test]
    fn test_english_is_shared() {
        let a = StopWords::english();
        let b = StopWords::english();
        assert!(Arc::ptr_eq(&a.words, &b.words));
    }

    #[test]
    fn test_from_reader_strips_line_endings() {
        let input = "alpha\r\nbeta\n\ngamma\n";
        let stop_words = StopWords::from_reader(input.as_bytes()).unwrap();
        assert!(stop_words.contains("alpha"));
        assert!(stop_words.contains("beta"));
        assert!(stop_words.contains("gamma"));
        assert!(!stop_words.contains(""));
        assert_eq!(stop_words.len(), 7);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "foo").unwrap();
        writeln!(file, "bar").unwrap();

        let stop_words = StopWords::from_file(file.path()).unwrap();
        assert!(stop_words.contains("foo"));
        assert!(stop_words.contains("bar"));
        assert!(stop_words.contains("-"));
    }

    #[test]
    fn test_from_file_not_found() {
        let result = StopWords::from_file("/nonexistent/stopwords.txt");
        assert!(matches!(result, Err(TeaserError::FileNotFound(_))));
    }

    #[test]
    fn test_from_file_empty() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = StopWords::from_file(file.path());
        assert!(matches!(result, Err(TeaserError::StopWordsError(_))));
    }
}
