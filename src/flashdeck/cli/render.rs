//! Terminal output for command results.
//!
//! Every `render_*` function returns a `String` so output can be tested without
//! capturing stdout; `print_messages` is the one exception.

use super::styles::{MATCH_STYLE, TOC_CURRENT_STYLE};
use chrono::{DateTime, Utc};
use colored::Colorize;
use flashdeck::api::{CardView, CmdMessage, MessageLevel, TocEntry};
use flashdeck::config::FlashdeckConfig;
use flashdeck::index::{DisplayDocument, DisplayIndex};
use flashdeck::render::Renderer;
use flashdeck::search::{highlight, MatchSegment, SearchResult, Span};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const SNIPPET_CONTEXT: usize = 40;
const PIN_MARKER: &str = "⚲";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_document_list(documents: &[DisplayDocument]) -> String {
    if documents.is_empty() {
        return "No documents yet. Import one with `flashdeck import <file>`.\n".to_string();
    }

    let mut out = String::new();
    let mut last_was_pinned = false;
    for dd in documents {
        let is_pinned_entry = matches!(dd.index, DisplayIndex::Pinned(_));
        if last_was_pinned && !is_pinned_entry {
            out.push('\n');
        }
        last_was_pinned = is_pinned_entry;

        let idx_str = format!("{}. ", dd.index);
        let left_prefix = if is_pinned_entry {
            format!("  {} ", PIN_MARKER)
        } else {
            "    ".to_string()
        };

        let doc = &dd.document;
        let position = match doc.current_index {
            Some(i) => format!("{}/{}", i + 1, doc.cards.len()),
            None => "0 cards".to_string(),
        };
        let label = format!("{}  ({})", doc.name, position);

        let fixed_width = left_prefix.width() + idx_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let label = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label.width());

        let idx_colored = match dd.index {
            DisplayIndex::Pinned(_) => idx_str.yellow(),
            DisplayIndex::Regular(_) => idx_str.normal(),
        };

        out.push_str(&format!(
            "{}{}{}{}{}\n",
            left_prefix,
            idx_colored,
            label,
            " ".repeat(padding),
            format_time_ago(doc.last_modified).dimmed()
        ));
    }
    out
}

/// Header line `name  i/n`, the title, then the rendered card body.
pub(super) fn render_card(view: &CardView, renderer: &dyn Renderer) -> String {
    let mut out = format!(
        "{}  {}\n\n{} {}\n",
        view.document_name.dimmed(),
        format!("{}/{}", view.position + 1, view.total).yellow(),
        "#".repeat(view.card.level).dimmed(),
        view.card.title.bold()
    );
    let body = renderer.render(&view.card.content);
    if !body.is_empty() {
        out.push('\n');
        out.push_str(&body);
        out.push('\n');
    }
    out
}

pub(super) fn render_toc(toc: &[TocEntry]) -> String {
    if toc.is_empty() {
        return "This document has no cards.\n".to_string();
    }
    let width = toc.len().to_string().len();
    toc.iter()
        .map(|entry| {
            let indent = "  ".repeat(entry.level.saturating_sub(1));
            let line = format!("{:>width$}. {}{}", entry.number, indent, entry.title);
            if entry.is_current {
                format!("{}\n", TOC_CURRENT_STYLE.apply_to(line))
            } else {
                format!("{}\n", line)
            }
        })
        .collect()
}

/// One block per hit: where it was found, the highlighted title and a snippet
/// of the content around the first match.
pub(super) fn render_search_results(results: &[SearchResult]) -> String {
    let mut out = String::new();
    for result in results {
        out.push_str(&format!(
            "{} {}\n",
            result.document_name.dimmed(),
            format!("#{}", result.card_index + 1).yellow()
        ));
        out.push_str(&format!(
            "  {}\n",
            paint(highlight(&result.title, &result.title_spans())).bold()
        ));

        let content_spans = result.content_spans();
        if let Some(snippet) = snippet(result.content(), &content_spans) {
            out.push_str(&format!("  {}\n", snippet));
        }
        out.push('\n');
    }
    out
}

pub(super) fn render_config(config: &FlashdeckConfig) -> String {
    FlashdeckConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|v| format!("{} = {}\n", key, v)))
        .collect()
}

fn paint(segments: Vec<MatchSegment>) -> String {
    segments
        .into_iter()
        .map(|segment| match segment {
            MatchSegment::Plain(text) => text,
            MatchSegment::Match(text) => MATCH_STYLE.apply_to(text).to_string(),
        })
        .collect()
}

/// The line stretch around the first span, highlighted, on a single line.
fn snippet(content: &str, spans: &[Span]) -> Option<String> {
    let first = spans.first()?;
    let start = floor_char_boundary(content, first.start.saturating_sub(SNIPPET_CONTEXT));
    let end = ceil_char_boundary(content, first.end + SNIPPET_CONTEXT);

    let local: Vec<Span> = spans
        .iter()
        .filter(|s| s.start >= start && s.end <= end)
        .map(|s| Span::new(s.start - start, s.end - start))
        .collect();
    let body = paint(highlight(&content[start..end], &local)).replace('\n', " ");

    let lead = if start > 0 { "…" } else { "" };
    let tail = if end < content.len() { "…" } else { "" };
    Some(format!("{}{}{}", lead, body, tail))
}

fn floor_char_boundary(s: &str, mut i: usize) -> usize {
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_char_boundary(s: &str, i: usize) -> usize {
    let mut i = i.min(s.len());
    while !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashdeck::model::Document;
    use flashdeck::render::RawRenderer;
    use flashdeck::search::{search, MatchMode};

    fn plain() {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    #[test]
    fn list_shows_index_name_and_position() {
        plain();
        let mut doc = Document::from_text(None, "# Rust\n# Two", "untitled.md");
        doc.current_index = Some(1);
        let listed = vec![DisplayDocument {
            document: doc,
            index: DisplayIndex::Regular(1),
        }];
        let out = render_document_list(&listed);
        assert!(out.starts_with("    1. Rust.md  (2/2)"));
    }

    #[test]
    fn empty_list_hints_at_import() {
        assert!(render_document_list(&[]).contains("import"));
    }

    #[test]
    fn card_header_shows_position() {
        plain();
        let doc = Document::from_text(None, "# A\n## B\nbody text", "untitled.md");
        let mut view = CardView::of(&doc).unwrap();
        view.position = 1;
        view.card = doc.cards[1].clone();
        let out = render_card(&view, &RawRenderer);
        assert!(out.contains("A.md  2/2"));
        assert!(out.contains("## B"));
        assert!(out.ends_with("body text\n"));
    }

    #[test]
    fn toc_indents_by_level() {
        plain();
        let toc = vec![
            TocEntry {
                number: 1,
                level: 1,
                title: "Top".into(),
                is_current: true,
            },
            TocEntry {
                number: 2,
                level: 3,
                title: "Deep".into(),
                is_current: false,
            },
        ];
        assert_eq!(render_toc(&toc), "1. Top\n2.     Deep\n");
    }

    #[test]
    fn search_block_has_title_and_snippet() {
        plain();
        let docs = vec![Document::from_text(
            None,
            "# Borrowing\nA shared borrow is &T.",
            "untitled.md",
        )];
        let results = search(&docs, "borrow", MatchMode::Literal);
        let out = render_search_results(&results);
        assert!(out.contains("Borrowing.md #1"));
        assert!(out.contains("  Borrowing\n"));
        assert!(out.contains("A shared borrow is &T."));
    }

    #[test]
    fn snippet_trims_long_content() {
        let content = format!("{}needle{}", "a".repeat(100), "b".repeat(100));
        let spans = vec![Span::new(100, 106)];
        plain();
        let s = snippet(&content, &spans).unwrap();
        assert!(s.starts_with('…'));
        assert!(s.ends_with('…'));
        assert!(s.contains("needle"));
    }

    #[test]
    fn snippet_respects_char_boundaries() {
        let content = "ééééé match ééééé";
        let start = content.find("match").unwrap();
        let spans = vec![Span::new(start, start + 5)];
        assert!(snippet(content, &spans).is_some());
    }

    #[test]
    fn truncation_adds_ellipsis() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("ab", 4), "ab");
    }
}
