use crate::commands::{CardView, CmdMessage, CmdResult};
use crate::error::{FlashdeckError, Result};
use crate::index::DocSelector;
use crate::state::{AppState, Step};

use super::helpers::target_document;

pub fn next(state: &mut AppState) -> Result<CmdResult> {
    let step = state.next_card()?;
    Ok(step_result(state, step, "Already at the last card."))
}

pub fn prev(state: &mut AppState) -> Result<CmdResult> {
    let step = state.prev_card()?;
    Ok(step_result(state, step, "Already at the first card."))
}

/// Jumps to card `number` (one-based) of the selected or active document.
///
/// User input is checked here; [`AppState::jump_to`] itself expects a valid
/// position.
pub fn jump(state: &mut AppState, selectors: &[DocSelector], number: usize) -> Result<CmdResult> {
    let id = target_document(state, selectors)?;
    let total = state
        .document(&id)
        .map(|d| d.cards.len())
        .ok_or(FlashdeckError::DocumentNotFound(id))?;
    if number == 0 || number > total {
        return Err(FlashdeckError::Api(format!(
            "Card {} out of range (document has {} cards)",
            number, total
        )));
    }

    state.jump_to(&id, number - 1)?;
    let view = state.active_document().and_then(CardView::of);
    Ok(CmdResult::default().with_card_view(view))
}

fn step_result(state: &AppState, step: Step, boundary_msg: &str) -> CmdResult {
    let mut result = CmdResult::default();
    match step {
        Step::Moved(_) => {}
        Step::AtBoundary(_) => result.add_message(CmdMessage::info(boundary_msg)),
        Step::NoCards => result.add_message(CmdMessage::info("This document has no cards.")),
    }
    result.with_card_view(state.active_document().and_then(CardView::of))
}
