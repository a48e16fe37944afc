use crate::config::FlashdeckConfig;
use crate::index::DisplayDocument;
use crate::model::{Card, Document};
use crate::search::SearchResult;
use std::path::PathBuf;
use uuid::Uuid;

pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod navigate;
pub mod pinning;
pub mod reset;
pub mod search;
pub mod toc;
pub mod view;

#[derive(Debug, Clone)]
pub struct FlashdeckPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The card a document currently shows, with its position.
#[derive(Debug, Clone)]
pub struct CardView {
    pub document_id: Uuid,
    pub document_name: String,
    /// Zero-based.
    pub position: usize,
    pub total: usize,
    pub card: Card,
}

impl CardView {
    pub fn of(document: &Document) -> Option<Self> {
        let position = document.current_index?;
        let card = document.cards.get(position)?.clone();
        Some(Self {
            document_id: document.id,
            document_name: document.name.clone(),
            position,
            total: document.cards.len(),
            card,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// One-based, as shown to users.
    pub number: usize,
    pub level: usize,
    pub title: String,
    pub is_current: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_documents: Vec<Document>,
    pub listed_documents: Vec<DisplayDocument>,
    pub search_results: Vec<SearchResult>,
    pub card_view: Option<CardView>,
    pub toc: Vec<TocEntry>,
    pub exported_paths: Vec<PathBuf>,
    pub config: Option<FlashdeckConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_documents(mut self, documents: Vec<Document>) -> Self {
        self.affected_documents = documents;
        self
    }

    pub fn with_listed_documents(mut self, documents: Vec<DisplayDocument>) -> Self {
        self.listed_documents = documents;
        self
    }

    pub fn with_search_results(mut self, results: Vec<SearchResult>) -> Self {
        self.search_results = results;
        self
    }

    pub fn with_card_view(mut self, view: Option<CardView>) -> Self {
        self.card_view = view;
        self
    }

    pub fn with_toc(mut self, toc: Vec<TocEntry>) -> Self {
        self.toc = toc;
        self
    }

    pub fn with_exported_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.exported_paths = paths;
        self
    }

    pub fn with_config(mut self, config: FlashdeckConfig) -> Self {
        self.config = Some(config);
        self
    }
}
