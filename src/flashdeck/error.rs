use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum FlashdeckError {
    #[error("Document not found: {0}")]
    DocumentNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FlashdeckError>;
