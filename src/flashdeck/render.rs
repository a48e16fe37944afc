//! # Card Rendering
//!
//! Cards hold raw markdown. Turning that into something displayable is the
//! job of a [`Renderer`]; the core never interprets markdown beyond heading
//! detection in the parser.
//!
//! [`TerminalRenderer`] is a plain-text rendering for terminals built on
//! pulldown-cmark. Math is kept verbatim between `$` delimiters.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

pub trait Renderer {
    fn render(&self, content: &str) -> String;
}

/// Passes content through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawRenderer;

impl Renderer for RawRenderer {
    fn render(&self, content: &str) -> String {
        content.to_string()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TerminalRenderer {
    pub code_indent: usize,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self { code_indent: 4 }
    }
}

/// List nesting: `None` for bullets, `Some(n)` for the next ordered number.
type ListStack = Vec<Option<u64>>;

impl TerminalRenderer {
    fn options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_MATH
    }
}

impl Renderer for TerminalRenderer {
    fn render(&self, content: &str) -> String {
        let mut out = String::new();
        let mut lists: ListStack = Vec::new();
        let mut in_code = false;
        let mut link_dest: Vec<String> = Vec::new();
        let code_pad = " ".repeat(self.code_indent);

        for event in Parser::new_ext(content, Self::options()) {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    ensure_blank_line(&mut out);
                    out.push_str(&"#".repeat(level as usize));
                    out.push(' ');
                }
                Event::End(TagEnd::Heading(_)) => out.push('\n'),
                Event::Start(Tag::Paragraph) => {
                    if lists.is_empty() {
                        ensure_blank_line(&mut out);
                    }
                }
                Event::End(TagEnd::Paragraph) => {
                    if lists.is_empty() {
                        out.push('\n');
                    }
                }
                Event::Start(Tag::BlockQuote(_)) => {
                    ensure_blank_line(&mut out);
                    out.push_str("> ");
                }
                Event::Start(Tag::CodeBlock(kind)) => {
                    ensure_blank_line(&mut out);
                    if let CodeBlockKind::Fenced(lang) = kind {
                        if !lang.is_empty() {
                            out.push_str(&format!("{}[{}]\n", code_pad, lang));
                        }
                    }
                    in_code = true;
                }
                Event::End(TagEnd::CodeBlock) => in_code = false,
                Event::Start(Tag::List(start)) => {
                    if lists.is_empty() {
                        ensure_blank_line(&mut out);
                    } else if !out.ends_with('\n') {
                        out.push('\n');
                    }
                    lists.push(start);
                }
                Event::End(TagEnd::List(_)) => {
                    lists.pop();
                }
                Event::Start(Tag::Item) => {
                    let depth = lists.len().saturating_sub(1);
                    out.push_str(&"  ".repeat(depth));
                    match lists.last_mut() {
                        Some(Some(n)) => {
                            out.push_str(&format!("{}. ", n));
                            *n += 1;
                        }
                        _ => out.push_str("• "),
                    }
                }
                Event::End(TagEnd::Item) => {
                    if !out.ends_with('\n') {
                        out.push('\n');
                    }
                }
                Event::TaskListMarker(done) => out.push_str(if done { "[x] " } else { "[ ] " }),
                Event::Start(Tag::Link { dest_url, .. }) => link_dest.push(dest_url.to_string()),
                Event::End(TagEnd::Link) => {
                    if let Some(dest) = link_dest.pop() {
                        out.push_str(&format!(" <{}>", dest));
                    }
                }
                Event::Start(Tag::Image { .. }) => out.push_str("[image: "),
                Event::End(TagEnd::Image) => out.push(']'),
                Event::Start(Tag::TableCell) => out.push_str("| "),
                Event::End(TagEnd::TableCell) => out.push(' '),
                Event::End(TagEnd::TableHead) | Event::End(TagEnd::TableRow) => {
                    out.push_str("|\n")
                }
                Event::Text(text) => {
                    if in_code {
                        for line in text.lines() {
                            out.push_str(&code_pad);
                            out.push_str(line);
                            out.push('\n');
                        }
                    } else {
                        out.push_str(&text);
                    }
                }
                Event::Code(code) => {
                    out.push('`');
                    out.push_str(&code);
                    out.push('`');
                }
                Event::InlineMath(math) => {
                    out.push('$');
                    out.push_str(&math);
                    out.push('$');
                }
                Event::DisplayMath(math) => {
                    out.push_str("$$");
                    out.push_str(&math);
                    out.push_str("$$");
                }
                Event::SoftBreak | Event::HardBreak => out.push('\n'),
                Event::Rule => {
                    ensure_blank_line(&mut out);
                    out.push_str("────────\n");
                }
                Event::Html(html) | Event::InlineHtml(html) => out.push_str(&html),
                _ => {}
            }
        }

        out.trim().to_string()
    }
}

fn ensure_blank_line(out: &mut String) {
    if out.is_empty() {
        return;
    }
    while !out.ends_with("\n\n") {
        out.push('\n');
    }
}
