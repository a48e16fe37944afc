//! # Search
//!
//! Case-insensitive search over every card of every document. Each card is
//! searched as `title + "\n" + content`; every hit is reported as a [`Span`]
//! into that text so a UI can highlight it with [`highlight`].
//!
//! Search is a pure function of the documents and the query. Nothing is cached
//! and nothing is recomputed behind the caller's back.
//!
//! ## Query semantics
//!
//! By default the query is a literal substring ([`MatchMode::Literal`]):
//! characters like `(` or `*` match themselves. [`MatchMode::Pattern`] treats
//! the query as a regular expression; an invalid pattern matches nothing.
//!
//! Offsets are byte offsets into the UTF-8 text and always fall on character
//! boundaries, so they can be used to slice the text directly.

use crate::model::Document;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the query string is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Literal,
    Pattern,
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "literal" => Ok(MatchMode::Literal),
            "pattern" | "regex" => Ok(MatchMode::Pattern),
            other => Err(format!("Unknown match mode: {}", other)),
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Literal => write!(f, "literal"),
            MatchMode::Pattern => write!(f, "pattern"),
        }
    }
}

/// Half-open range `[start, end)` of one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A segment of text in a search match, either plain text or a matched term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSegment {
    Plain(String),
    Match(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub document_id: Uuid,
    pub document_name: String,
    pub card_index: usize,
    pub title: String,
    /// `title + "\n" + content`, the text `spans` point into.
    pub text: String,
    pub spans: Vec<Span>,
}

impl SearchResult {
    /// Spans that lie entirely within the title.
    pub fn title_spans(&self) -> Vec<Span> {
        partition_spans(&self.spans, self.title.len()).0
    }

    /// Spans that lie entirely within the content, relative to the content.
    pub fn content_spans(&self) -> Vec<Span> {
        partition_spans(&self.spans, self.title.len() + 1).1
    }

    pub fn content(&self) -> &str {
        self.text.get(self.title.len() + 1..).unwrap_or("")
    }
}

/// Builds the case-insensitive matcher for `query`, or `None` when nothing
/// should be searched.
fn build_matcher(query: &str, mode: MatchMode) -> Option<Regex> {
    if query.trim().is_empty() {
        return None;
    }
    let pattern = match mode {
        MatchMode::Literal => regex::escape(query),
        MatchMode::Pattern => query.to_string(),
    };
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(query, error = %e, "invalid search pattern, no matches");
            None
        }
    }
}

/// Every non-overlapping match of `re` in `text`, left to right.
fn find_spans(re: &Regex, text: &str) -> Vec<Span> {
    re.find_iter(text)
        .filter(|m| !m.is_empty())
        .map(|m| Span::new(m.start(), m.end()))
        .collect()
}

/// Searches every card of every document, in document then card order.
///
/// An empty or whitespace-only query returns no results.
pub fn search(documents: &[Document], query: &str, mode: MatchMode) -> Vec<SearchResult> {
    let Some(re) = build_matcher(query, mode) else {
        return Vec::new();
    };

    let mut results = Vec::new();
    for doc in documents {
        for (card_index, card) in doc.cards.iter().enumerate() {
            let text = format!("{}\n{}", card.title, card.content);
            let spans = find_spans(&re, &text);
            if spans.is_empty() {
                continue;
            }
            results.push(SearchResult {
                document_id: doc.id,
                document_name: doc.name.clone(),
                card_index,
                title: card.title.clone(),
                text,
                spans,
            });
        }
    }
    results
}

/// Splits `text` into alternating plain and matched segments.
///
/// `spans` must be sorted, non-overlapping and within bounds. The segments
/// concatenate back to `text` exactly.
pub fn highlight(text: &str, spans: &[Span]) -> Vec<MatchSegment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for span in spans {
        if span.start > last {
            segments.push(MatchSegment::Plain(text[last..span.start].to_string()));
        }
        segments.push(MatchSegment::Match(text[span.start..span.end].to_string()));
        last = span.end;
    }

    if last < text.len() {
        segments.push(MatchSegment::Plain(text[last..].to_string()));
    }

    segments
}

/// Partitions spans around `split`.
///
/// Spans ending at or before `split` are returned on the left as they are;
/// spans starting at or after it are returned on the right, rebased so that
/// `split` becomes 0. A span crossing `split` is on neither side.
pub fn partition_spans(spans: &[Span], split: usize) -> (Vec<Span>, Vec<Span>) {
    let mut before = Vec::new();
    let mut after = Vec::new();
    for span in spans {
        if span.end <= split {
            before.push(*span);
        } else if span.start >= split {
            after.push(Span::new(span.start - split, span.end - split));
        }
    }
    (before, after)
}
