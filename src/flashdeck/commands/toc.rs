use crate::commands::{CmdResult, TocEntry};
use crate::error::{FlashdeckError, Result};
use crate::index::DocSelector;
use crate::state::AppState;

use super::helpers::target_document;

/// Table of contents of the selected or active document.
pub fn run(state: &AppState, selectors: &[DocSelector]) -> Result<CmdResult> {
    let id = target_document(state, selectors)?;
    let doc = state
        .document(&id)
        .ok_or(FlashdeckError::DocumentNotFound(id))?;

    let toc = doc
        .cards
        .iter()
        .enumerate()
        .map(|(i, card)| TocEntry {
            number: i + 1,
            level: card.level,
            title: card.title.clone(),
            is_current: doc.current_index == Some(i),
        })
        .collect();

    Ok(CmdResult::default().with_toc(toc))
}
