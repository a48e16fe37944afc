use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DocSelector;
use crate::state::AppState;
use chrono::Utc;

use super::helpers::documents_by_selectors;

pub fn pin(state: &mut AppState, selectors: &[DocSelector]) -> Result<CmdResult> {
    pin_state(state, selectors, true)
}

pub fn unpin(state: &mut AppState, selectors: &[DocSelector]) -> Result<CmdResult> {
    pin_state(state, selectors, false)
}

fn pin_state(state: &mut AppState, selectors: &[DocSelector], is_pinned: bool) -> Result<CmdResult> {
    let resolved = documents_by_selectors(state, selectors)?;
    let mut result = CmdResult::default();

    for dd in resolved {
        let doc = state.document_mut(&dd.document.id)?;
        if doc.pinned == is_pinned {
            continue;
        }
        doc.pinned = is_pinned;
        doc.pinned_at = if is_pinned { Some(Utc::now()) } else { None };

        let verb = if is_pinned { "pinned" } else { "unpinned" };
        result.add_message(CmdMessage::success(format!(
            "Document {} ({}): {}",
            verb, dd.index, doc.name
        )));
        result.affected_documents.push(doc.clone());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StateFixture;

    #[test]
    fn pinning_assigns_p_index() {
        let mut state = StateFixture::new()
            .with_document("# A")
            .with_document("# B")
            .state;
        pin(&mut state, &[DocSelector::Name("b.md".into())]).unwrap();

        let listed = list::run(&state).listed_documents;
        assert_eq!(listed[0].index, DisplayIndex::Pinned(1));
        assert_eq!(listed[0].document.name, "B.md");
        assert!(listed[0].document.pinned_at.is_some());
    }

    #[test]
    fn unpinning_clears_flag_and_timestamp() {
        let mut state = StateFixture::new().with_pinned_document("# A").state;
        let result = unpin(&mut state, &[DocSelector::Index(DisplayIndex::Pinned(1))]).unwrap();
        assert_eq!(result.affected_documents.len(), 1);
        assert!(!state.documents[0].pinned);
        assert_eq!(state.documents[0].pinned_at, None);
    }

    #[test]
    fn pinning_twice_is_quiet() {
        let mut state = StateFixture::new().with_pinned_document("# A").state;
        let result = pin(&mut state, &[DocSelector::Index(DisplayIndex::Pinned(1))]).unwrap();
        assert!(result.messages.is_empty());
    }
}
