use crate::error::{FlashdeckError, Result};
use crate::index::{index_documents, DisplayDocument, DocSelector};
use crate::state::AppState;
use uuid::Uuid;

/// Resolves selectors to documents, in selector order.
///
/// A name selector matches every document whose name contains the term,
/// ignoring case, and fails when none does.
pub fn documents_by_selectors(
    state: &AppState,
    selectors: &[DocSelector],
) -> Result<Vec<DisplayDocument>> {
    let indexed = index_documents(&state.documents);
    let mut found = Vec::new();

    for selector in selectors {
        match selector {
            DocSelector::Index(idx) => {
                let dd = indexed.iter().find(|dd| &dd.index == idx).ok_or_else(|| {
                    FlashdeckError::Api(format!("Index {} not found", idx))
                })?;
                found.push(dd.clone());
            }
            DocSelector::Name(term) => {
                let term_lower = term.to_lowercase();
                let matches: Vec<_> = indexed
                    .iter()
                    .filter(|dd| dd.document.name.to_lowercase().contains(&term_lower))
                    .cloned()
                    .collect();
                if matches.is_empty() {
                    return Err(FlashdeckError::Api(format!(
                        "No document matches {}",
                        selector
                    )));
                }
                found.extend(matches);
            }
        }
    }

    Ok(found)
}

pub fn resolve_ids(state: &AppState, selectors: &[DocSelector]) -> Result<Vec<Uuid>> {
    let mut ids: Vec<Uuid> = Vec::new();
    for dd in documents_by_selectors(state, selectors)? {
        if !ids.contains(&dd.document.id) {
            ids.push(dd.document.id);
        }
    }
    Ok(ids)
}

/// The single document a per-document command acts on: the selected one, or
/// the active one when nothing was selected.
pub fn target_document(state: &AppState, selectors: &[DocSelector]) -> Result<Uuid> {
    if selectors.is_empty() {
        return state
            .active
            .ok_or_else(|| FlashdeckError::Api("No active document; pick one by index".into()));
    }
    let ids = resolve_ids(state, selectors)?;
    match ids.as_slice() {
        [id] => Ok(*id),
        _ => Err(FlashdeckError::Api(format!(
            "Expected one document, {} match",
            ids.len()
        ))),
    }
}
