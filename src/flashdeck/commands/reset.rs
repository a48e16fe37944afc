use crate::commands::{CmdMessage, CmdResult};
use crate::state::AppState;

/// Drops every document and the selection.
pub fn run(state: &mut AppState) -> CmdResult {
    let removed = state.clear();
    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::info("Nothing to reset."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed {} document(s).",
            removed.len()
        )));
    }
    result.with_affected_documents(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StateFixture;

    #[test]
    fn clears_everything() {
        let mut state = StateFixture::new()
            .with_document("# A")
            .with_document("# B")
            .with_active(0)
            .state;
        let result = run(&mut state);
        assert_eq!(result.affected_documents.len(), 2);
        assert!(state.documents.is_empty());
        assert_eq!(state.active, None);
    }
}
