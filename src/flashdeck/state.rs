//! # Application State
//!
//! All mutable state of a flashdeck session lives in [`AppState`]: the
//! document collection and which document is active. It is owned by a single
//! controller (the API facade), which loads it from and saves it to a store at
//! explicit points.
//!
//! Navigation is saturating: moving past either end of a document is a no-op.

use crate::error::{FlashdeckError, Result};
use crate::model::Document;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub documents: Vec<Document>,
    pub active: Option<Uuid>,
}

/// Outcome of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(usize),
    AtBoundary(usize),
    NoCards,
}

impl AppState {
    pub fn new(documents: Vec<Document>, active: Option<Uuid>) -> Self {
        // a stale selection from the store is dropped
        let active = active.filter(|id| documents.iter().any(|d| &d.id == id));
        Self { documents, active }
    }

    pub fn document(&self, id: &Uuid) -> Option<&Document> {
        self.documents.iter().find(|d| &d.id == id)
    }

    pub fn document_mut(&mut self, id: &Uuid) -> Result<&mut Document> {
        self.documents
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or(FlashdeckError::DocumentNotFound(*id))
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active.as_ref().and_then(|id| self.document(id))
    }

    pub fn add_document(&mut self, document: Document) -> Uuid {
        let id = document.id;
        self.documents.push(document);
        id
    }

    /// Removes a document. The selection is cleared when it pointed at it.
    pub fn remove_document(&mut self, id: &Uuid) -> Result<Document> {
        let pos = self
            .documents
            .iter()
            .position(|d| &d.id == id)
            .ok_or(FlashdeckError::DocumentNotFound(*id))?;
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        Ok(self.documents.remove(pos))
    }

    pub fn clear(&mut self) -> Vec<Document> {
        self.active = None;
        std::mem::take(&mut self.documents)
    }

    pub fn set_active(&mut self, id: &Uuid) -> Result<()> {
        if self.document(id).is_none() {
            return Err(FlashdeckError::DocumentNotFound(*id));
        }
        self.active = Some(*id);
        Ok(())
    }

    /// Makes `document_id` active and moves it to `card_index`.
    ///
    /// `card_index` must be a valid card position of that document.
    pub fn jump_to(&mut self, document_id: &Uuid, card_index: usize) -> Result<()> {
        let doc = self.document_mut(document_id)?;
        debug_assert!(card_index < doc.cards.len(), "card index out of range");
        doc.current_index = Some(card_index);
        self.active = Some(*document_id);
        Ok(())
    }

    pub fn next_card(&mut self) -> Result<Step> {
        self.step(|i, len| if i + 1 < len { Some(i + 1) } else { None })
    }

    pub fn prev_card(&mut self) -> Result<Step> {
        self.step(|i, _| i.checked_sub(1))
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> Option<usize>) -> Result<Step> {
        let id = self
            .active
            .ok_or_else(|| FlashdeckError::Api("No active document".to_string()))?;
        let doc = self.document_mut(&id)?;
        let Some(current) = doc.current_index else {
            return Ok(Step::NoCards);
        };
        match advance(current, doc.cards.len()) {
            Some(next) => {
                doc.current_index = Some(next);
                Ok(Step::Moved(next))
            }
            None => Ok(Step::AtBoundary(current)),
        }
    }
}
