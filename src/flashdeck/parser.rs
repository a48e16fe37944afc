//! # Sectioning Parser
//!
//! Splits a flat markdown-ish text into cards. A card starts at every line whose
//! first character is `#` and runs until the next such line or the end of input.
//!
//! The parser is total: every string yields a (possibly empty) list of cards.
//! Text before the first heading belongs to no card and is dropped.
//!
//! [`serialize`] is the inverse used by export and edit. It is not byte-exact,
//! but parsing its output gives back the same titles, levels and contents.

use crate::model::Card;

pub const HEADING_MARKER: char = '#';

/// A card whose body is still being collected.
struct OpenCard {
    title: String,
    level: usize,
    body: Vec<String>,
}

impl OpenCard {
    fn finish(self, position: usize) -> Card {
        Card {
            id: format!("card-{}", position),
            title: self.title,
            level: self.level,
            content: self.body.join("\n").trim().to_string(),
        }
    }
}

/// Returns `(level, title)` when the line is a heading.
///
/// The check happens before any trimming, so `"  # foo"` is body text.
pub fn parse_heading(line: &str) -> Option<(usize, String)> {
    if !line.starts_with(HEADING_MARKER) {
        return None;
    }
    let rest = line.trim_start_matches(HEADING_MARKER);
    // '#' is one byte, so the byte difference is the run length
    let level = line.len() - rest.len();
    Some((level, rest.trim().to_string()))
}

/// Parses `text` into cards in heading order.
///
/// Lines are split on `\n` only; callers normalize `\r\n` beforehand if they
/// care about it.
pub fn parse(text: &str) -> Vec<Card> {
    let mut cards = Vec::new();
    let mut open: Option<OpenCard> = None;

    for line in text.split('\n') {
        if let Some((level, title)) = parse_heading(line) {
            if let Some(card) = open.take() {
                cards.push(card.finish(cards.len() + 1));
            }
            open = Some(OpenCard {
                title,
                level,
                body: Vec::new(),
            });
        } else if let Some(card) = open.as_mut() {
            card.body.push(line.to_string());
        }
    }

    if let Some(card) = open {
        cards.push(card.finish(cards.len() + 1));
    }

    tracing::debug!(cards = cards.len(), "parsed document");
    cards
}

/// Renders cards back to text: heading, blank line, content; cards separated
/// by a blank line.
pub fn serialize(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                "{} {}\n\n{}",
                HEADING_MARKER.to_string().repeat(card.level),
                card.title,
                card.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
