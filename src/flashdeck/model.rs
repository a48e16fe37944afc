use crate::parser;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One heading-delimited section of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub level: usize,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub cards: Vec<Card>,
    pub last_modified: DateTime<Utc>,
    // None only while `cards` is empty
    pub current_index: Option<usize>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub pinned_at: Option<DateTime<Utc>>,
}

impl Document {
    pub fn new(name: String, cards: Vec<Card>) -> Self {
        let current_index = if cards.is_empty() { None } else { Some(0) };
        Self {
            id: Uuid::new_v4(),
            name,
            cards,
            last_modified: Utc::now(),
            current_index,
            pinned: false,
            pinned_at: None,
        }
    }

    /// Parses `text` into a new document. Without an explicit name, the name is
    /// derived from the first card (see [`derive_name`]).
    pub fn from_text(name: Option<String>, text: &str, fallback_name: &str) -> Self {
        let cards = parser::parse(text);
        let name = name.unwrap_or_else(|| derive_name(&cards, fallback_name));
        Self::new(name, cards)
    }

    /// Replaces the whole card sequence, keeping `current_index` in range.
    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.current_index = match (self.current_index, self.cards.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
        self.touch();
    }

    pub fn touch(&mut self) {
        self.last_modified = Utc::now();
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.current_index.and_then(|i| self.cards.get(i))
    }

    /// The document rendered back to text.
    pub fn to_text(&self) -> String {
        parser::serialize(&self.cards)
    }

    /// File name used when exporting this document.
    pub fn export_file_name(&self, fallback_name: &str) -> String {
        let name = match self.cards.first() {
            Some(card) if card.level == 1 && !card.title.is_empty() => format!("{}.md", card.title),
            _ if !self.name.trim().is_empty() => {
                if std::path::Path::new(&self.name).extension().is_some() {
                    self.name.clone()
                } else {
                    format!("{}.md", self.name)
                }
            }
            _ => fallback_name.to_string(),
        };
        sanitize_filename(&name)
    }
}

/// `<title>.md` of the first card when it is a level-1 heading, otherwise the
/// fallback.
pub fn derive_name(cards: &[Card], fallback_name: &str) -> String {
    match cards.first() {
        Some(card) if card.level == 1 && !card.title.is_empty() => format!("{}.md", card.title),
        _ => fallback_name.to_string(),
    }
}

pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_points_at_first_card() {
        let doc = Document::from_text(None, "# A\nx\n## B\ny", "untitled.md");
        assert_eq!(doc.current_index, Some(0));
        assert_eq!(doc.name, "A.md");
        assert!(!doc.pinned);
    }

    #[test]
    fn empty_document_has_no_index() {
        let doc = Document::from_text(None, "no headings", "untitled.md");
        assert_eq!(doc.current_index, None);
        assert_eq!(doc.name, "untitled.md");
        assert!(doc.current_card().is_none());
    }

    #[test]
    fn name_falls_back_when_first_card_is_not_level_one() {
        let cards = parser::parse("## Sub\nbody");
        assert_eq!(derive_name(&cards, "untitled.md"), "untitled.md");
    }

    #[test]
    fn explicit_name_wins() {
        let doc = Document::from_text(Some("notes.md".into()), "# Title", "untitled.md");
        assert_eq!(doc.name, "notes.md");
    }

    #[test]
    fn replace_cards_clamps_index() {
        let mut doc = Document::from_text(None, "# A\n# B\n# C", "untitled.md");
        doc.current_index = Some(2);
        let before = doc.last_modified;

        doc.replace_cards(parser::parse("# A"));
        assert_eq!(doc.current_index, Some(0));
        assert!(doc.last_modified >= before);

        doc.replace_cards(Vec::new());
        assert_eq!(doc.current_index, None);

        doc.replace_cards(parser::parse("# X\n# Y"));
        assert_eq!(doc.current_index, Some(0));
    }

    #[test]
    fn export_name_rules() {
        let doc = Document::from_text(Some("imported.txt".into()), "# Heading\nbody", "untitled.md");
        assert_eq!(doc.export_file_name("untitled.md"), "Heading.md");

        let doc = Document::from_text(Some("imported.txt".into()), "## Sub", "untitled.md");
        assert_eq!(doc.export_file_name("untitled.md"), "imported.txt");

        let doc = Document::from_text(Some("plain".into()), "", "untitled.md");
        assert_eq!(doc.export_file_name("untitled.md"), "plain.md");

        let doc = Document::from_text(Some("  ".into()), "", "untitled.md");
        assert_eq!(doc.export_file_name("untitled.md"), "untitled.md");
    }

    #[test]
    fn sanitize() {
        assert_eq!(sanitize_filename("Hello World.md"), "Hello World.md");
        assert_eq!(sanitize_filename("foo/bar"), "foo_bar");
        assert_eq!(sanitize_filename("baz\\qux"), "baz_qux");
    }

    #[test]
    fn serde_uses_camel_case_and_defaults_pin() {
        let doc = Document::from_text(None, "# A\nbody", "untitled.md");
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"lastModified\""));
        assert!(json.contains("\"currentIndex\":0"));

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object_mut().unwrap();
        obj.remove("pinned");
        obj.remove("pinnedAt");
        let back: Document = serde_json::from_value(value).unwrap();
        assert!(!back.pinned);
        assert_eq!(back.cards, doc.cards);
    }
}
