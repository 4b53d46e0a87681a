use serde::Serialize;

use crate::{Keywords, StopWords};

/// Configuration for sentence scoring
///
/// The defaults are tuned constants; changing them changes which sentences
/// get selected.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreConfig {
    /// Sentence length, in words, that earns a full length score
    pub ideal_sentence_length: usize,
    /// Weight of the title overlap score
    pub title_weight: f64,
    /// Weight of the combined keyword density and distribution score
    pub keyword_weight: f64,
    /// Weight of the length score
    pub length_weight: f64,
    /// Weight of the position score
    pub position_weight: f64,
    /// Divisor applied to every weighted score before summing
    pub divisor: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            ideal_sentence_length: 20,
            title_weight: 1.5,
            keyword_weight: 10.0,
            length_weight: 1.0,
            position_weight: 1.0,
            divisor: 4.0,
        }
    }
}

/// Result of scoring a sentence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Share of the title's content words found in the sentence
    pub title: f64,
    /// Keyword density (`sbs`)
    pub keyword_density: f64,
    /// Keyword clustering (`dbs`)
    pub keyword_distribution: f64,
    /// Closeness to the ideal sentence length, may be negative
    pub length: f64,
    /// Positional prior
    pub position: f64,
    /// Final weighted score
    pub total: f64,
}

/// Calculate how much of the title a sentence repeats
///
/// Stop words are removed from the title first. Each sentence word that is in
/// the remaining title counts, repeats included, and the count is divided by
/// the remaining title length. A title made only of stop words scores 0.
pub fn title_score(title_words: &[String], sentence_words: &[String], stop_words: &StopWords) -> f64 {
    let title: Vec<&String> = title_words.iter().filter(|w| !stop_words.contains(w)).collect();

    if title.is_empty() {
        return 0.0;
    }

    let words_in_title = sentence_words
        .iter()
        .filter(|w| !stop_words.contains(w) && title.contains(w))
        .count();

    words_in_title as f64 / title.len() as f64
}

/// Calculate the keyword density of a sentence (summation-based selection)
///
/// Sums the weight of every keyword occurrence and normalizes by the sentence
/// length and a factor of 10.
pub fn sbs(words: &[String], keywords: &Keywords) -> f64 {
    let score: f64 = words.iter().filter_map(|w| keywords.weight(w)).sum();

    if score == 0.0 {
        return 0.0;
    }

    (1.0 / words.len() as f64 * score) / 10.0
}

/// Calculate how tightly keywords cluster in a sentence (density-based selection)
///
/// Every pair of consecutive keyword hits adds the product of their weights
/// divided by the squared distance between them. The sum is normalized by
/// `k * (k + 1)`, where `k` is one more than the number of distinct keywords
/// in the sentence.
pub fn dbs(words: &[String], keywords: &Keywords) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut previous: Option<(usize, f64)> = None;

    for (i, word) in words.iter().enumerate() {
        let Some(weight) = keywords.weight(word) else {
            continue;
        };

        if let Some((prev_index, prev_weight)) = previous {
            debug_assert!(i > prev_index, "keyword hits must move strictly forward");
            let distance = (i - prev_index) as f64;
            sum += (weight * prev_weight) / (distance * distance);
        }
        previous = Some((i, weight));
    }

    let mut distinct: Vec<&String> = words.iter().filter(|w| keywords.contains(w)).collect();
    distinct.sort_unstable();
    distinct.dedup();

    let k = distinct.len() as f64 + 1.0;
    1.0 / (k * (k + 1.0)) * sum
}

/// Calculate how close a sentence is to the ideal length
///
/// Returns 1.0 at exactly `ideal` words and falls off linearly on both sides.
/// The result is not clamped: sentences more than twice the ideal length
/// score below zero.
pub fn length_score(words: &[String], ideal: usize) -> f64 {
    if ideal == 0 {
        return 0.0;
    }

    1.0 - ideal.abs_diff(words.len()) as f64 / ideal as f64
}

/// Calculate the positional prior of the `index`-th sentence (1-based) out of `size`
///
/// Openings and closings are favored over the middle of a document:
/// - first tenth: 0.17, second tenth: 0.23, third tenth: 0.14
/// - middle: 0.08 down to 0.04
/// - last tenth: 0.15
/// - anything outside (0, 1]: 0
pub fn sentence_position(index: usize, size: usize) -> f64 {
    if size == 0 {
        return 0.0;
    }

    let normalized = index as f64 / size as f64;
    match normalized {
        n if 0.0 < n && n <= 0.1 => 0.17,
        n if 0.1 < n && n <= 0.2 => 0.23,
        n if 0.2 < n && n <= 0.3 => 0.14,
        n if 0.3 < n && n <= 0.4 => 0.08,
        n if 0.4 < n && n <= 0.5 => 0.05,
        n if 0.5 < n && n <= 0.6 => 0.04,
        n if 0.6 < n && n <= 0.7 => 0.06,
        n if 0.7 < n && n <= 0.8 => 0.04,
        n if 0.8 < n && n <= 0.9 => 0.04,
        n if 0.9 < n && n <= 1.0 => 0.15,
        _ => 0.0,
    }
}

/// Scores the sentences of one document.
///
/// Holds everything that stays fixed across a document's sentences: the title
/// words, its keywords, the stop words, and the sentence count.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    pub title_words: &'a [String],
    pub keywords: &'a Keywords,
    pub stop_words: &'a StopWords,
    pub total_sentences: usize,
    pub config: &'a ScoreConfig,
}

impl Scorer<'_> {
    /// Calculate the final score for the sentence at 1-based `position`
    ///
    /// The final score is the weighted average of:
    /// - title overlap
    /// - keyword density plus keyword distribution
    /// - length fit
    /// - position prior
    pub fn score(&self, position: usize, words: &[String]) -> ScoreBreakdown {
        let config = self.config;

        let title = title_score(self.title_words, words, self.stop_words);
        let keyword_density = sbs(words, self.keywords);
        let keyword_distribution = dbs(words, self.keywords);
        let length = length_score(words, config.ideal_sentence_length);
        let position = sentence_position(position, self.total_sentences);

        let weighted = [
            (title, config.title_weight),
            (keyword_density + keyword_distribution, config.keyword_weight),
            (length, config.length_weight),
            (position, config.position_weight),
        ];
        let total = weighted
            .iter()
            .fold(0.0, |acc, (score, weight)| acc + score * weight / config.divisor);

        ScoreBreakdown { title, keyword_density, keyword_distribution, length, position, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::split_words;
    use rstest::rstest;

    fn words(text: &str) -> Vec<String> {
        split_words(text)
    }

    fn keywords(entries: &[(&str, f64)]) -> Keywords {
        entries.iter().map(|(w, s)| (w.to_string(), *s)).collect()
    }

    #[test]
    fn test_title_score_overlap() {
        let stop_words = StopWords::from_words(["are"]);
        let title = words("Cats are great");
        let sentence = words("Cats and more cats are great pets");
        // cats, cats, great over {cats, great}
        assert_eq!(title_score(&title, &sentence, &stop_words), 1.5);
    }

    #[test]
    fn test_title_score_all_stop_words() {
        let stop_words = StopWords::from_words(["the", "of"]);
        let title = words("The Of The");
        let sentence = words("The of the thing");
        assert_eq!(title_score(&title, &sentence, &stop_words), 0.0);
    }

    #[test]
    fn test_title_score_empty_title() {
        let stop_words = StopWords::from_words(["the"]);
        assert_eq!(title_score(&[], &words("anything"), &stop_words), 0.0);
    }

    #[test]
    fn test_sbs_no_keywords() {
        let keywords = keywords(&[("cat", 1.5)]);
        assert_eq!(sbs(&words("the dog barked"), &keywords), 0.0);
    }

    #[test]
    fn test_sbs_empty_sentence() {
        let keywords = keywords(&[("cat", 1.5)]);
        assert_eq!(sbs(&[], &keywords), 0.0);
    }

    #[test]
    fn test_sbs_density() {
        let keywords = keywords(&[("cat", 1.5), ("dog", 1.25)]);
        let score = sbs(&words("cat chased dog and cat"), &keywords);
        assert!((score - (1.0 / 5.0 * 4.25) / 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_dbs_empty_sentence() {
        let keywords = keywords(&[("cat", 1.5)]);
        assert_eq!(dbs(&[], &keywords), 0.0);
    }

    #[test]
    fn test_dbs_single_hit_is_zero() {
        let keywords = keywords(&[("cat", 1.5)]);
        assert_eq!(dbs(&words("a cat sat"), &keywords), 0.0);
    }

    #[test]
    fn test_dbs_adjacent_hits() {
        let keywords = keywords(&[("cat", 2.0), ("dog", 3.0)]);
        // one pair at distance 1, k = 3
        let score = dbs(&words("cat dog"), &keywords);
        assert!((score - 6.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_dbs_distance_and_repeats() {
        let keywords = keywords(&[("cat", 2.0)]);
        // hits at 0, 2 and 3: 4/4 + 4/1 = 5, one distinct keyword so k = 2
        let score = dbs(&words("cat x cat cat"), &keywords);
        assert!((score - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_dbs_closer_keywords_score_higher() {
        let keywords = keywords(&[("cat", 2.0), ("dog", 2.0)]);
        let close = dbs(&words("cat dog a b c d"), &keywords);
        let far = dbs(&words("cat a b c d dog"), &keywords);
        assert!(close > far);
    }

    #[rstest]
    #[case(20, 1.0)]
    #[case(0, 0.0)]
    #[case(10, 0.5)]
    #[case(30, 0.5)]
    #[case(60, -1.0)]
    fn test_length_score(#[case] len: usize, #[case] expected: f64) {
        let sentence = vec!["w".to_string(); len];
        assert_eq!(length_score(&sentence, 20), expected);
    }

    #[rstest]
    #[case(1, 10, 0.17)]
    #[case(2, 10, 0.23)]
    #[case(3, 10, 0.14)]
    #[case(4, 10, 0.08)]
    #[case(5, 10, 0.05)]
    #[case(6, 10, 0.04)]
    #[case(7, 10, 0.06)]
    #[case(8, 10, 0.04)]
    #[case(9, 10, 0.04)]
    #[case(10, 10, 0.15)]
    #[case(0, 10, 0.0)]
    #[case(11, 10, 0.0)]
    #[case(1, 0, 0.0)]
    #[case(1, 7, 0.23)]
    #[case(7, 7, 0.15)]
    fn test_sentence_position(#[case] index: usize, #[case] size: usize, #[case] expected: f64) {
        assert_eq!(sentence_position(index, size), expected);
    }

    #[test]
    fn test_score_composite_weights() {
        let stop_words = StopWords::from_words(["the"]);
        let title = words("Cats");
        let keywords = keywords(&[("cats", 2.0)]);
        let config = ScoreConfig::default();
        let scorer = Scorer {
            title_words: &title,
            keywords: &keywords,
            stop_words: &stop_words,
            total_sentences: 10,
            config: &config,
        };

        let sentence = words("The cats");
        let result = scorer.score(1, &sentence);

        assert_eq!(result.title, 1.0);
        assert_eq!(result.keyword_density, (1.0 / 2.0 * 2.0) / 10.0);
        assert_eq!(result.keyword_distribution, 0.0);
        assert_eq!(result.length, 1.0 - 18.0 / 20.0);
        assert_eq!(result.position, 0.17);

        let expected = 1.0 * 1.5 / 4.0 + 0.1 * 10.0 / 4.0 + result.length / 4.0 + 0.17 / 4.0;
        assert!((result.total - expected).abs() < 1e-12);
    }

    #[test]
    fn test_score_empty_sentence_degrades() {
        let stop_words = StopWords::from_words(Vec::<String>::new());
        let keywords = Keywords::default();
        let config = ScoreConfig::default();
        let scorer =
            Scorer { title_words: &[], keywords: &keywords, stop_words: &stop_words, total_sentences: 0, config: &config };

        let result = scorer.score(1, &[]);
        assert_eq!(result.title, 0.0);
        assert_eq!(result.keyword_density, 0.0);
        assert_eq!(result.keyword_distribution, 0.0);
        assert_eq!(result.length, 0.0);
        assert_eq!(result.position, 0.0);
        assert_eq!(result.total, 0.0);
        assert!(result.total.is_finite());
    }
}
