use crate::commands::CmdResult;
use crate::index::index_documents;
use crate::state::AppState;

pub fn run(state: &AppState) -> CmdResult {
    CmdResult::default().with_listed_documents(index_documents(&state.documents))
}
