use crate::commands::{CardView, CmdMessage, CmdResult};
use crate::config::FlashdeckConfig;
use crate::model::Document;
use crate::state::AppState;

/// Starter text offered when a note is created in the editor.
pub const NEW_NOTE_TEMPLATE: &str = "# New note\n\nWrite the note here...";

/// Creates a document from free text and makes it the active one.
pub fn run(
    state: &mut AppState,
    config: &FlashdeckConfig,
    text: &str,
    name: Option<String>,
) -> CmdResult {
    let doc = Document::from_text(name, text, &config.fallback_name);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document created: {} ({} cards)",
        doc.name,
        doc.cards.len()
    )));
    if doc.cards.is_empty() {
        result.add_message(CmdMessage::warning(
            "No headings found; start a card with a line beginning with '#'",
        ));
    }

    let view = CardView::of(&doc);
    state.active = Some(state.add_document(doc.clone()));
    result
        .with_affected_documents(vec![doc])
        .with_card_view(view)
}
