//! # Storage Layer
//!
//! flashdeck persists through a plain key-value interface, [`KeyValueStore`].
//! The whole collection is one JSON blob under [`DOCUMENTS_KEY`]; the active
//! document id is kept separately under [`SELECTION_KEY`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one `<key>.json` file per key in a data directory
//! - [`memory::InMemoryStore`]: a `HashMap`, for tests
//!
//! ## Loading is forgiving
//!
//! A missing key is the normal first-run state. A value that does not
//! deserialize is logged and treated as missing, so a corrupted file never
//! prevents startup. Write errors, on the other hand, are propagated.

use crate::error::Result;
use crate::model::Document;
use crate::state::AppState;
use uuid::Uuid;

pub mod fs;
pub mod memory;

pub const DOCUMENTS_KEY: &str = "flashdeck-files";
pub const SELECTION_KEY: &str = "flashdeck-selection";

/// Abstract string key-value storage.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

pub fn load_documents<S: KeyValueStore>(store: &S) -> Result<Vec<Document>> {
    let Some(raw) = store.get(DOCUMENTS_KEY)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(documents) => Ok(documents),
        Err(e) => {
            tracing::warn!(key = DOCUMENTS_KEY, error = %e, "discarding unreadable document data");
            Ok(Vec::new())
        }
    }
}

/// Writes the collection, removing the key entirely when it is empty.
pub fn save_documents<S: KeyValueStore>(store: &mut S, documents: &[Document]) -> Result<()> {
    if documents.is_empty() {
        return store.remove(DOCUMENTS_KEY);
    }
    let json = serde_json::to_string(documents)?;
    store.set(DOCUMENTS_KEY, &json)
}

pub fn load_selection<S: KeyValueStore>(store: &S) -> Result<Option<Uuid>> {
    let Some(raw) = store.get(SELECTION_KEY)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(id) => Ok(id),
        Err(e) => {
            tracing::warn!(key = SELECTION_KEY, error = %e, "discarding unreadable selection");
            Ok(None)
        }
    }
}

pub fn save_selection<S: KeyValueStore>(store: &mut S, active: Option<Uuid>) -> Result<()> {
    match active {
        Some(id) => store.set(SELECTION_KEY, &serde_json::to_string(&id)?),
        None => store.remove(SELECTION_KEY),
    }
}

pub fn load_state<S: KeyValueStore>(store: &S) -> Result<AppState> {
    let documents = load_documents(store)?;
    let active = load_selection(store)?;
    Ok(AppState::new(documents, active))
}

pub fn save_state<S: KeyValueStore>(store: &mut S, state: &AppState) -> Result<()> {
    save_documents(store, &state.documents)?;
    save_selection(store, state.active)
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryStore;
    use super::*;

    #[test]
    fn missing_data_loads_empty() {
        let store = InMemoryStore::new();
        assert!(load_documents(&store).unwrap().is_empty());
        assert_eq!(load_selection(&store).unwrap(), None);
    }

    #[test]
    fn malformed_data_loads_empty() {
        let mut store = InMemoryStore::new();
        store.set(DOCUMENTS_KEY, "{ not json").unwrap();
        store.set(SELECTION_KEY, "42").unwrap();
        assert!(load_documents(&store).unwrap().is_empty());
        assert_eq!(load_selection(&store).unwrap(), None);
    }

    #[test]
    fn state_survives_save_and_load() {
        let mut store = InMemoryStore::new();
        let doc = Document::from_text(None, "# A\nbody\n## B", "untitled.md");
        let id = doc.id;
        let state = AppState::new(vec![doc], Some(id));
        save_state(&mut store, &state).unwrap();

        let loaded = load_state(&store).unwrap();
        assert_eq!(loaded.active, Some(id));
        assert_eq!(loaded.documents.len(), 1);
        assert_eq!(loaded.documents[0].cards, state.documents[0].cards);
    }

    #[test]
    fn empty_collection_removes_keys() {
        let mut store = InMemoryStore::new();
        store.set(DOCUMENTS_KEY, "[]").unwrap();
        store.set(SELECTION_KEY, "\"x\"").unwrap();
        save_state(&mut store, &AppState::default()).unwrap();
        assert_eq!(store.get(DOCUMENTS_KEY).unwrap(), None);
        assert_eq!(store.get(SELECTION_KEY).unwrap(), None);
    }
}
