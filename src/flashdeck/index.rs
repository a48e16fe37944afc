//! # Display Indexes
//!
//! Documents are stored by UUID, but users pick them by short indexes shown in
//! the listing: `p1`, `p2`, ... for pinned documents and `1`, `2`, ... for the
//! rest. Both groups are ordered by last modification, newest first.
//!
//! Indexes are recomputed from the collection on every call, so they are only
//! stable between mutations.

use crate::model::Document;
use std::str::FromStr;

/// A user-facing index for a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Pinned(usize),
    Regular(usize),
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayIndex::Pinned(i) => write!(f, "p{}", i),
            DisplayIndex::Regular(i) => write!(f, "{}", i),
        }
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix('p') {
            if let Ok(n) = rest.parse() {
                return Ok(DisplayIndex::Pinned(n));
            }
        }
        if let Ok(n) = s.parse() {
            return Ok(DisplayIndex::Regular(n));
        }
        Err(format!("Invalid index format: {}", s))
    }
}

/// A user input to select a document, either by its index or a search term
/// for its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocSelector {
    Index(DisplayIndex),
    Name(String),
}

impl std::fmt::Display for DocSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocSelector::Index(idx) => write!(f, "{}", idx),
            DocSelector::Name(t) => write!(f, "\"{}\"", t),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayDocument {
    pub document: Document,
    pub index: DisplayIndex,
}

/// Assigns display indexes: pinned first, then the rest, newest first within
/// each group.
pub fn index_documents(documents: &[Document]) -> Vec<DisplayDocument> {
    let mut sorted: Vec<&Document> = documents.iter().collect();
    sorted.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));

    let pinned = sorted.iter().filter(|d| d.pinned);
    let regular = sorted.iter().filter(|d| !d.pinned);

    let mut results: Vec<DisplayDocument> = pinned
        .enumerate()
        .map(|(i, d)| DisplayDocument {
            document: (**d).clone(),
            index: DisplayIndex::Pinned(i + 1),
        })
        .collect();
    results.extend(regular.enumerate().map(|(i, d)| DisplayDocument {
        document: (**d).clone(),
        index: DisplayIndex::Regular(i + 1),
    }));
    results
}

/// Parses a single input string that may be either a single index or a range.
///
/// Supports `"3"`, `"p1"`, `"3-5"` and `"p1-p3"`. Both endpoints of a range
/// must be of the same kind and in ascending order. Whether the indexes exist
/// is checked later, during resolution.
pub fn parse_index_or_range(s: &str) -> Result<Vec<DisplayIndex>, String> {
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            let start = DisplayIndex::from_str(&s[..dash_pos])?;
            let end = DisplayIndex::from_str(&s[dash_pos + 1..])?;
            return expand_range(start, end);
        }
    }

    DisplayIndex::from_str(s).map(|idx| vec![idx])
}

fn expand_range(start: DisplayIndex, end: DisplayIndex) -> Result<Vec<DisplayIndex>, String> {
    match (&start, &end) {
        (DisplayIndex::Regular(s), DisplayIndex::Regular(e)) if s <= e => {
            Ok((*s..=*e).map(DisplayIndex::Regular).collect())
        }
        (DisplayIndex::Pinned(s), DisplayIndex::Pinned(e)) if s <= e => {
            Ok((*s..=*e).map(DisplayIndex::Pinned).collect())
        }
        (DisplayIndex::Regular(_), DisplayIndex::Regular(_))
        | (DisplayIndex::Pinned(_), DisplayIndex::Pinned(_)) => Err(format!(
            "Invalid range: start ({}) must be <= end ({})",
            start, end
        )),
        _ => Err(format!(
            "Invalid range: cannot mix index types ({} and {})",
            start, end
        )),
    }
}

/// Turns raw user arguments into selectors.
///
/// When every argument is an index or range they are used as indexes;
/// otherwise all words are joined into one name search.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<DocSelector> {
    let all_indexes: Result<Vec<Vec<DisplayIndex>>, _> = inputs
        .iter()
        .map(|s| parse_index_or_range(s.as_ref()))
        .collect();

    if let Ok(indexes) = all_indexes {
        return indexes
            .into_iter()
            .flatten()
            .map(DocSelector::Index)
            .collect();
    }

    let term = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    vec![DocSelector::Name(term)]
}
