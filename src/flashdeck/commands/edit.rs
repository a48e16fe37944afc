use crate::commands::{CardView, CmdMessage, CmdResult};
use crate::config::FlashdeckConfig;
use crate::error::{FlashdeckError, Result};
use crate::index::DocSelector;
use crate::model::derive_name;
use crate::parser;
use crate::state::AppState;

use super::helpers::target_document;

/// Round-trips a document through `edit`, which receives the serialized text
/// and returns the new text. The cards are replaced wholesale.
///
/// A name that was derived from the first card follows the new first card; an
/// explicit or imported name is kept.
pub fn run<F>(
    state: &mut AppState,
    config: &FlashdeckConfig,
    selectors: &[DocSelector],
    edit: F,
) -> Result<CmdResult>
where
    F: FnOnce(&str) -> Result<String>,
{
    let id = target_document(state, selectors)?;
    let source = state
        .document(&id)
        .map(|d| d.to_text())
        .ok_or(FlashdeckError::DocumentNotFound(id))?;

    let edited = edit(&source)?;
    let mut result = CmdResult::default();
    if edited.trim_end() == source.trim_end() {
        result.add_message(CmdMessage::info("No changes."));
        return Ok(result);
    }

    let cards = parser::parse(&edited);
    let doc = state.document_mut(&id)?;
    if doc.name == derive_name(&doc.cards, &config.fallback_name) {
        doc.name = derive_name(&cards, &config.fallback_name);
    }
    doc.replace_cards(cards);

    result.add_message(CmdMessage::success(format!(
        "Document saved: {} ({} cards)",
        doc.name,
        doc.cards.len()
    )));
    let view = CardView::of(doc);
    let doc = doc.clone();
    Ok(result
        .with_affected_documents(vec![doc])
        .with_card_view(view))
}
