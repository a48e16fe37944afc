use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DocSelector;
use crate::state::AppState;

use super::helpers::documents_by_selectors;

/// Removes the selected documents. Deleting the active document leaves no
/// document active.
pub fn run(state: &mut AppState, selectors: &[DocSelector]) -> Result<CmdResult> {
    let resolved = documents_by_selectors(state, selectors)?;
    let mut result = CmdResult::default();

    for dd in resolved {
        // a name selector may list a document twice
        if state.document(&dd.document.id).is_none() {
            continue;
        }
        let doc = state.remove_document(&dd.document.id)?;
        result.add_message(CmdMessage::success(format!(
            "Document deleted ({}): {}",
            dd.index, doc.name
        )));
        result.affected_documents.push(doc);
    }

    Ok(result)
}
