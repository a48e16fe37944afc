use crate::commands::{CmdMessage, CmdResult};
use crate::config::FlashdeckConfig;
use crate::error::{FlashdeckError, Result};
use crate::model::Document;
use crate::state::AppState;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Imports files (and files in directories) as one document each.
///
/// Directories are scanned one level deep for the configured extensions.
/// Files given explicitly are imported whatever their extension. When exactly
/// one document comes in it becomes the active document.
pub fn run(state: &mut AppState, config: &FlashdeckConfig, paths: Vec<PathBuf>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut imported = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut files: Vec<PathBuf> = fs::read_dir(&path)
                .map_err(FlashdeckError::Io)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && config.accepts_extension(p))
                .collect();
            files.sort();
            for file in files {
                import_one(&file, config, &mut imported, &mut result);
            }
        } else if path.is_file() {
            import_one(&path, config, &mut imported, &mut result);
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Path not found: {}",
                path.display()
            )));
        }
    }

    if let [only] = imported.as_slice() {
        state.active = Some(only.id);
    }
    for doc in &imported {
        state.add_document(doc.clone());
    }

    tracing::info!(count = imported.len(), "imported documents");
    result.add_message(CmdMessage::success(format!(
        "Total imported: {}",
        imported.len()
    )));
    Ok(result.with_affected_documents(imported))
}

fn import_one(
    path: &Path,
    config: &FlashdeckConfig,
    imported: &mut Vec<Document>,
    result: &mut CmdResult,
) {
    match read_document(path, config) {
        Ok(doc) => {
            result.add_message(CmdMessage::info(format!(
                "Imported: {} ({} cards)",
                path.display(),
                doc.cards.len()
            )));
            imported.push(doc);
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "import failed");
            result.add_message(CmdMessage::warning(format!(
                "Failed to import {}: {}",
                path.display(),
                e
            )));
        }
    }
}

/// Reads a file into a document named after the file. Invalid UTF-8 is
/// replaced rather than rejected.
pub fn read_document(path: &Path, config: &FlashdeckConfig) -> Result<Document> {
    let bytes = fs::read(path).map_err(FlashdeckError::Io)?;
    let text = String::from_utf8_lossy(&bytes);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.fallback_name.clone());

    let mut doc = Document::from_text(Some(name), &text, &config.fallback_name);
    if let Ok(modified) = fs::metadata(path).and_then(|m| m.modified()) {
        doc.last_modified = DateTime::<Utc>::from(modified);
    }
    Ok(doc)
}
