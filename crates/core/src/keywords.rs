//! Keyword extraction by word frequency.

use std::collections::HashMap;

use serde::Serialize;

use crate::StopWords;
use crate::tokenize::split_words;

/// Default number of keywords kept per document.
pub const DEFAULT_KEYWORD_LIMIT: usize = 10;

/// A single keyword and its weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyword {
    pub word: String,
    /// Number of times the word occurs in the document.
    pub count: usize,
    /// `count / total_words * 1.5 + 1`
    pub weight: f64,
}

/// The most frequent non-stop words of a document, with their weights.
///
/// Entries are ordered by descending frequency; words with equal counts
/// keep the order in which they first appear in the text.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Keywords {
    ranked: Vec<Keyword>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Keywords {
    /// Extracts up to `limit` keywords from `text`.
    ///
    /// Only words outside `stop_words` are counted, but the weight divides by
    /// the total number of words in the text, stop words included.
    ///
    /// # Example
    ///
    /// ```rust
    /// use teaser_core::{Keywords, StopWords};
    ///
    /// let stop_words = StopWords::from_words(["the"]);
    /// let keywords = Keywords::extract("the cat saw the other cat", &stop_words, 10);
    /// assert_eq!(keywords.weight("cat"), Some(2.0 / 6.0 * 1.5 + 1.0));
    /// assert!(!keywords.contains("the"));
    /// ```
    pub fn extract(text: &str, stop_words: &StopWords, limit: usize) -> Self {
        let words = split_words(text);
        let total = words.len();

        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();
        for word in words.into_iter().filter(|w| !stop_words.contains(w)) {
            match seen.get(&word) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    seen.insert(word.clone(), counts.len());
                    counts.push((word, 1));
                }
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(limit);

        let ranked: Vec<Keyword> = counts
            .into_iter()
            .map(|(word, count)| {
                let weight = count as f64 / total as f64 * 1.5 + 1.0;
                Keyword { word, count, weight }
            })
            .collect();

        tracing::debug!(total_words = total, keywords = ranked.len(), "extracted keywords");
        Self::from_ranked(ranked)
    }

    fn from_ranked(ranked: Vec<Keyword>) -> Self {
        let index = ranked
            .iter()
            .enumerate()
            .map(|(i, keyword)| (keyword.word.clone(), i))
            .collect();
        Self { ranked, index }
    }

    /// Weight of `word`, if it is a keyword.
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.index.get(word).map(|&i| self.ranked[i].weight)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Keywords in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, Keyword> {
        self.ranked.iter()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

impl FromIterator<(String, f64)> for Keywords {
    /// Builds a keyword map from explicit weights, with a count of zero.
    /// Later duplicates are ignored.
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        let mut ranked: Vec<Keyword> = Vec::new();
        for (word, weight) in iter {
            if ranked.iter().all(|k| k.word != word) {
                ranked.push(Keyword { word, count: 0, weight });
            }
        }
        Self::from_ranked(ranked)
    }
}

impl<'a> IntoIterator for &'a Keywords {
    type Item = &'a Keyword;
    type IntoIter = std::slice::Iter<'a, Keyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
