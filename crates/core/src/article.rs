//! Article input type: a title and its cleaned body text.
//!
//! This module defines the [`Article`] struct handed from an article source to
//! the summarizer, and the HTML extraction that turns a fetched page into one.

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::{Result, TeaserError};

/// Elements whose paragraphs are page chrome rather than article text.
const BOILERPLATE_TAGS: [&str; 6] = ["nav", "header", "footer", "aside", "form", "noscript"];

/// A fetched article, ready to be summarized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Article title.
    pub title: String,

    /// Body text with markup removed, paragraphs separated by blank lines.
    pub cleaned_text: String,

    /// Source URL if known.
    pub source_url: Option<String>,
}

impl Article {
    /// Creates an Article from a title and plain text.
    pub fn new(title: impl Into<String>, cleaned_text: impl Into<String>) -> Self {
        Self { title: title.into(), cleaned_text: cleaned_text.into(), source_url: None }
    }

    /// Sets the source URL.
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Whether both the title and the text are present.
    pub fn is_summarizable(&self) -> bool {
        !self.title.is_empty() && !self.cleaned_text.is_empty()
    }

    /// Extracts the title and body text from an HTML page.
    ///
    /// Title priority:
    /// 1. Open Graph `og:title`
    /// 2. Twitter `twitter:title`
    /// 3. `<title>` element
    /// 4. First `<h1>` element
    ///
    /// The body is the text of every `<p>` inside the first `<article>`, or
    /// inside `<body>` when the page has no article element. Paragraphs in
    /// navigation, headers, footers, asides and forms are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TeaserError::NoContent`] if the page has no paragraph text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use teaser_core::Article;
    ///
    /// let html = "<html><head><title>Cats</title></head><body><p>Cats purr.</p></body></html>";
    /// let article = Article::from_html(html, None).unwrap();
    /// assert_eq!(article.title, "Cats");
    /// assert_eq!(article.cleaned_text, "Cats purr.");
    /// ```
    pub fn from_html(html: &str, source_url: Option<&str>) -> Result<Self> {
        let doc = Html::parse_document(html);

        let title = extract_title(&doc)?.unwrap_or_default();
        let cleaned_text = extract_text(&doc)?;

        if cleaned_text.is_empty() {
            return Err(TeaserError::NoContent);
        }

        tracing::debug!(title = %title, chars = cleaned_text.len(), "extracted article");
        Ok(Self { title, cleaned_text, source_url: source_url.map(str::to_string) })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| TeaserError::HtmlParseError(e.to_string()))
}

/// Collapses runs of whitespace into single spaces.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn element_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

fn meta_content(doc: &Html, css: &str) -> Result<Option<String>> {
    let content = doc
        .select(&selector(css)?)
        .filter_map(|el| el.value().attr("content"))
        .map(normalize_whitespace)
        .find(|content| !content.is_empty());
    Ok(content)
}

fn extract_title(doc: &Html) -> Result<Option<String>> {
    if let Some(title) = meta_content(doc, r#"meta[property="og:title"]"#)? {
        return Ok(Some(title));
    }

    if let Some(title) = meta_content(doc, r#"meta[name="twitter:title"]"#)? {
        return Ok(Some(title));
    }

    for css in ["title", "h1"] {
        if let Some(title) = doc.select(&selector(css)?).map(element_text).find(|t| !t.is_empty()) {
            return Ok(Some(title));
        }
    }

    Ok(None)
}

fn is_boilerplate(paragraph: ElementRef<'_>) -> bool {
    paragraph
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|el| BOILERPLATE_TAGS.contains(&el.value().name()))
}

fn extract_text(doc: &Html) -> Result<String> {
    let root = match doc.select(&selector("article")?).next() {
        Some(article) => article,
        None => doc.root_element(),
    };

    let paragraphs: Vec<String> = root
        .select(&selector("p")?)
        .filter(|p| !is_boilerplate(*p))
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect();

    Ok(paragraphs.join("\n\n"))
}
