//! Summary output type with ranked sentences and format conversion.
//!
//! This module defines the [`Summary`] struct which is the structured result
//! of summarizing one document: the selected sentences with their scores,
//! the document's keywords, and a few counts.

use std::fmt::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::scoring::ScoreBreakdown;
use crate::{Keywords, Result};

/// Output format options for a Summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One sentence per line.
    PlainText,
    /// Title heading followed by a bullet list.
    Markdown,
    /// Structured JSON including scores and keywords.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::PlainText),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, markdown, json", s)),
        }
    }
}

/// A sentence paired with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    /// The sentence as it appears in the document.
    pub text: String,
    /// 1-based position of the sentence in the document.
    pub position: usize,
    /// Individual scores; `None` when the document was too short to be scored.
    pub score: Option<ScoreBreakdown>,
}

impl ScoredSentence {
    /// The composite score, or 0 for unscored sentences.
    pub fn total(&self) -> f64 {
        self.score.map_or(0.0, |s| s.total)
    }
}

/// The result of summarizing a document.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Title the document was summarized against.
    pub title: String,

    /// Selected sentences, best first. For short documents this is every
    /// sentence in document order.
    pub sentences: Vec<ScoredSentence>,

    /// Keywords of the document, most frequent first.
    pub keywords: Keywords,

    /// Number of sentences the document was split into.
    pub sentence_count: usize,

    /// Whether the document was short enough to be returned unscored.
    pub passthrough: bool,
}

impl Summary {
    /// Sentence texts in summary order.
    pub fn texts(&self) -> Vec<String> {
        self.sentences.iter().map(|s| s.text.clone()).collect()
    }

    /// Converts the summary to the specified format.
    pub fn to_format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::PlainText => Ok(self.to_text()),
            OutputFormat::Markdown => Ok(self.to_markdown()),
            OutputFormat::Json => self.to_json().map(|v| v.to_string()),
        }
    }

    /// Gets the sentences as plain text, one per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for sentence in &self.sentences {
            out.push_str(&sentence.text);
            out.push('\n');
        }
        out
    }

    /// Gets the summary as Markdown: an `h1` title (when known) and a bullet list.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        if !self.title.trim().is_empty() {
            let _ = writeln!(out, "# {}\n", self.title.trim());
        }
        for sentence in &self.sentences {
            let _ = writeln!(out, "- {}", sentence.text);
        }
        out
    }

    /// Gets the summary as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> Summary {
        Summary {
            title: "Cats are great".to_string(),
            sentences: vec![
                ScoredSentence { text: "Cats purr.".to_string(), position: 2, score: None },
                ScoredSentence { text: "Dogs bark.".to_string(), position: 1, score: None },
            ],
            keywords: Keywords::default(),
            sentence_count: 2,
            passthrough: true,
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::PlainText));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_to_text() {
        assert_eq!(summary().to_text(), "Cats purr.\nDogs bark.\n");
    }

    #[test]
    fn test_to_markdown() {
        let md = summary().to_markdown();
        assert!(md.starts_with("# Cats are great\n\n"));
        assert!(md.contains("- Cats purr.\n- Dogs bark.\n"));
    }

    #[test]
    fn test_to_markdown_without_title() {
        let mut s = summary();
        s.title = String::new();
        assert!(s.to_markdown().starts_with("- Cats purr."));
    }

    #[test]
    fn test_to_json() {
        let json = summary().to_json().unwrap();
        assert!(json.is_object());
        assert_eq!(json["sentences"][0]["text"], "Cats purr.");
        assert_eq!(json["sentences"][0]["position"], 2);
        assert!(json["sentences"][0]["score"].is_null());
        assert_eq!(json["passthrough"], true);
    }

    #[test]
    fn test_texts_and_total() {
        let s = summary();
        assert_eq!(s.texts(), vec!["Cats purr.", "Dogs bark."]);
        assert_eq!(s.sentences[0].total(), 0.0);
    }
}
