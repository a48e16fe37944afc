use crate::commands::{CardView, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DocSelector;
use crate::state::AppState;

use super::helpers::target_document;

/// Shows the current card of the selected (or active) document. Selecting a
/// document makes it active.
pub fn run(state: &mut AppState, selectors: &[DocSelector]) -> Result<CmdResult> {
    let id = target_document(state, selectors)?;
    state.set_active(&id)?;

    let mut result = CmdResult::default();
    let view = state.active_document().and_then(CardView::of);
    if view.is_none() {
        result.add_message(CmdMessage::info("This document has no cards."));
    }
    Ok(result.with_card_view(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StateFixture;

    #[test]
    fn selecting_makes_document_active() {
        let mut state = StateFixture::new()
            .with_document("# First\none")
            .with_document("# Second\ntwo")
            .state;
        // by name, creation timestamps may tie
        let result = run(&mut state, &[DocSelector::Name("second".into())]).unwrap();
        let view = result.card_view.unwrap();
        assert_eq!(view.card.title, "Second");
        assert_eq!(view.position, 0);
        assert_eq!(view.total, 1);
        assert_eq!(state.active, Some(state.documents[1].id));
    }

    #[test]
    fn defaults_to_active_document() {
        let mut state = StateFixture::new()
            .with_document("# A\n# B")
            .with_active(0)
            .state;
        state.documents[0].current_index = Some(1);
        let view = run(&mut state, &[]).unwrap().card_view.unwrap();
        assert_eq!(view.card.title, "B");
    }

    #[test]
    fn empty_document_has_no_view() {
        let mut state = StateFixture::new().with_document("text only").state;
        let result = run(&mut state, &[DocSelector::Index(DisplayIndex::Regular(1))]).unwrap();
        assert!(result.card_view.is_none());
        assert_eq!(result.messages.len(), 1);
    }
}
