//! Sentence and word tokenization.
//!
//! Both splitters are punctuation heuristics rather than full boundary
//! detectors: abbreviations, decimal numbers and scripts other than
//! Latin and Cyrillic will occasionally be split in the wrong place.

use std::sync::LazyLock;

use regex::Regex;

/// Matches every character that is neither a word character nor a plain space.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w ]").expect("static pattern is valid"));

/// Splits text into lowercase word tokens.
///
/// Every character that is not a word character or a plain space is removed
/// first, so punctuation disappears and words separated only by a newline or
/// tab run together. The remainder is split on whitespace.
///
/// # Example
///
/// ```rust
/// use teaser_core::tokenize::split_words;
///
/// assert_eq!(split_words("Hello, World!"), vec!["hello", "world"]);
/// ```
pub fn split_words(text: &str) -> Vec<String> {
    let stripped = NON_WORD.replace_all(text, "");
    stripped
        .split_whitespace()
        .map(|word| word.trim_matches('.').to_lowercase())
        .collect()
}

/// Splits raw bytes into word tokens, if they are text at all.
///
/// Returns `None` and logs an error for input that is not valid UTF-8.
pub fn try_split_words(bytes: &[u8]) -> Option<Vec<String>> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Some(split_words(text)),
        Err(e) => {
            tracing::error!(error = %e, "error while splitting characters: input is not text");
            None
        }
    }
}

/// Uppercase Latin and Cyrillic letters, as recognized at sentence starts.
fn is_capital(c: char) -> bool {
    c.is_ascii_uppercase() || ('А'..='Я').contains(&c) || c == 'Ё'
}

/// Checks that `rest` is whitespace, an optional opening quote, then a capital.
fn opens_sentence(rest: &[(usize, char)]) -> bool {
    let mut chars = rest.iter().map(|&(_, c)| c).peekable();

    let mut saw_space = false;
    while chars.next_if(|c| c.is_whitespace()).is_some() {
        saw_space = true;
    }
    if !saw_space {
        return false;
    }

    if chars.peek() == Some(&'"') {
        chars.next();
    }
    chars.next().is_some_and(is_capital)
}

/// Splits text into sentences.
///
/// A sentence ends at `.`, `!` or `?` (plus an optional closing `"`) when the
/// punctuation does not follow a capital letter and is followed by whitespace
/// and a capital letter, optionally behind an opening quote. Each sentence
/// keeps its terminal punctuation and loses its leading whitespace. Whatever
/// follows the last boundary becomes the final sentence, even if it is empty.
///
/// # Example
///
/// ```rust
/// use teaser_core::tokenize::split_sentences;
///
/// let sentences = split_sentences("It rained. J. Smith stayed in! Did he?");
/// assert_eq!(sentences, vec!["It rained.", "J. Smith stayed in!", "Did he?"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i].1;
        let after_capital = i > 0 && is_capital(chars[i - 1].1);

        if matches!(c, '.' | '!' | '?') && !after_capital {
            let mut end = i + 1;
            if chars.get(end).is_some_and(|&(_, q)| q == '"') {
                end += 1;
            }

            if opens_sentence(&chars[end..]) {
                let boundary = chars.get(end).map_or(text.len(), |&(offset, _)| offset);
                sentences.push(text[start..boundary].trim_start().to_string());
                start = boundary;
                i = end;
                continue;
            }
        }

        i += 1;
    }

    sentences.push(text[start..].trim_start().to_string());
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello, World!", &["hello", "world"])]
    #[case("  spaced   out  ", &["spaced", "out"])]
    #[case("e.g. U.S.A.", &["eg", "usa"])]
    #[case("snake_case stays", &["snake_case", "stays"])]
    #[case("Ünïcödé Straße", &["ünïcödé", "straße"])]
    #[case("", &[])]
    fn test_split_words(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(split_words(input), expected);
    }

    #[test]
    fn test_split_words_runs_together_across_newlines() {
        assert_eq!(split_words("end\nstart"), vec!["endstart"]);
    }

    #[test]
    fn test_try_split_words_valid() {
        assert_eq!(try_split_words(b"Hi there."), Some(vec!["hi".to_string(), "there".to_string()]));
    }

    #[test]
    fn test_try_split_words_invalid_utf8() {
        assert_eq!(try_split_words(&[0xff, 0xfe, 0x41]), None);
    }

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences("First one. Second one! Third one? Fourth");
        assert_eq!(sentences, vec!["First one.", "Second one!", "Third one?", "Fourth"]);
    }

    #[test]
    fn test_split_sentences_requires_capital() {
        let sentences = split_sentences("Version 1.5 shipped. then nothing. Finally done.");
        assert_eq!(sentences, vec!["Version 1.5 shipped. then nothing.", "Finally done."]);
    }

    #[test]
    fn test_split_sentences_skips_initials() {
        let sentences = split_sentences("Written by J. R. R. Tolkien. It sold well.");
        assert_eq!(sentences, vec!["Written by J. R. R. Tolkien.", "It sold well."]);
    }

    #[test]
    fn test_split_sentences_quotes() {
        let sentences = split_sentences(r#"He said "stop." She left. "Why?" Nobody knew."#);
        assert_eq!(sentences, vec![r#"He said "stop.""#, "She left.", r#""Why?""#, "Nobody knew."]);
    }

    #[test]
    fn test_split_sentences_cyrillic() {
        let sentences = split_sentences("Привет мир. Как дела? Ёжик тут.");
        assert_eq!(sentences, vec!["Привет мир.", "Как дела?", "Ёжик тут."]);
    }

    #[test]
    fn test_split_sentences_trims_leading_whitespace() {
        let sentences = split_sentences("  One here.\n\n  Two there.");
        assert_eq!(sentences, vec!["One here.", "Two there."]);
    }

    #[test]
    fn test_split_sentences_without_boundary() {
        assert_eq!(split_sentences("Only one."), vec!["Only one."]);
        assert_eq!(split_sentences(""), vec![""]);
    }

    #[test]
    fn test_split_sentences_repeated_punctuation() {
        let sentences = split_sentences("What?! No way. Yes way.");
        assert_eq!(sentences, vec!["What?!", "No way.", "Yes way."]);
    }
}
