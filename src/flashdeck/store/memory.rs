use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Document;
    use crate::state::AppState;

    /// Builds an [`AppState`] from markdown snippets, one document each.
    pub struct StateFixture {
        pub state: AppState,
    }

    impl Default for StateFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StateFixture {
        pub fn new() -> Self {
            Self {
                state: AppState::default(),
            }
        }

        pub fn with_document(mut self, text: &str) -> Self {
            let doc = Document::from_text(None, text, "untitled.md");
            self.state.add_document(doc);
            self
        }

        pub fn with_named_document(mut self, name: &str, text: &str) -> Self {
            let doc = Document::from_text(Some(name.to_string()), text, "untitled.md");
            self.state.add_document(doc);
            self
        }

        pub fn with_pinned_document(mut self, text: &str) -> Self {
            let mut doc = Document::from_text(None, text, "untitled.md");
            doc.pinned = true;
            doc.pinned_at = Some(chrono::Utc::now());
            self.state.add_document(doc);
            self
        }

        pub fn with_active(mut self, position: usize) -> Self {
            self.state.active = Some(self.state.documents[position].id);
            self
        }
    }
}
