use crate::commands::{CmdMessage, CmdResult};
use crate::config::FlashdeckConfig;
use crate::error::{FlashdeckError, Result};
use crate::index::{index_documents, DisplayDocument, DocSelector};
use crate::state::AppState;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use super::helpers::documents_by_selectors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One markdown file per document.
    Files,
    /// A single `flashdeck-<timestamp>.tar.gz`.
    Archive,
}

/// Exports the selected documents (all documents when none are selected) into
/// `out_dir`.
pub fn run(
    state: &AppState,
    config: &FlashdeckConfig,
    selectors: &[DocSelector],
    out_dir: &Path,
    format: ExportFormat,
) -> Result<CmdResult> {
    let documents = resolve_documents(state, selectors)?;

    if documents.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No documents to export."));
        return Ok(res);
    }

    fs::create_dir_all(out_dir).map_err(FlashdeckError::Io)?;
    let entries = export_entries(&documents, &config.fallback_name);

    let paths = match format {
        ExportFormat::Files => {
            let mut paths = Vec::new();
            for (name, text) in &entries {
                let path = out_dir.join(name);
                fs::write(&path, text).map_err(FlashdeckError::Io)?;
                paths.push(path);
            }
            paths
        }
        ExportFormat::Archive => {
            let now = Utc::now();
            let filename = format!("flashdeck-{}.tar.gz", now.format("%Y-%m-%d_%H-%M-%S"));
            let path = out_dir.join(filename);
            let file = File::create(&path).map_err(FlashdeckError::Io)?;
            write_archive(file, &entries)?;
            vec![path]
        }
    };

    tracing::info!(documents = entries.len(), files = paths.len(), "exported");
    let mut result = CmdResult::default();
    for path in &paths {
        result.add_message(CmdMessage::success(format!(
            "Exported to {}",
            path.display()
        )));
    }
    Ok(result.with_exported_paths(paths))
}

fn resolve_documents(state: &AppState, selectors: &[DocSelector]) -> Result<Vec<DisplayDocument>> {
    if selectors.is_empty() {
        Ok(index_documents(&state.documents))
    } else {
        let mut seen = HashSet::new();
        Ok(documents_by_selectors(state, selectors)?
            .into_iter()
            .filter(|dd| seen.insert(dd.document.id))
            .collect())
    }
}

/// File name and text per document. Clashing names get a `-2`, `-3`, ...
/// suffix before the extension.
fn export_entries(documents: &[DisplayDocument], fallback_name: &str) -> Vec<(String, String)> {
    let mut used = HashSet::new();
    documents
        .iter()
        .map(|dd| {
            let base = dd.document.export_file_name(fallback_name);
            let mut name = base.clone();
            let mut n = 2;
            while !used.insert(name.to_lowercase()) {
                name = numbered(&base, n);
                n += 1;
            }
            (name, dd.document.to_text())
        })
        .collect()
}

fn numbered(name: &str, n: usize) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{}-{}.{}", stem, n, ext),
        _ => format!("{}-{}", name, n),
    }
}

fn write_archive<W: Write>(writer: W, entries: &[(String, String)]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for (name, text) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(text.len() as u64);
        header.set_mode(0o644);
        header.set_mtime(Utc::now().timestamp().max(0) as u64);
        header.set_cksum();

        tar.append_data(&mut header, format!("flashdeck/{}", name), text.as_bytes())
            .map_err(FlashdeckError::Io)?;
    }

    tar.into_inner()
        .and_then(|enc| enc.finish())
        .map_err(FlashdeckError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StateFixture;

    #[test]
    fn exports_every_document_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateFixture::new()
            .with_document("# Rust\nownership")
            .with_named_document("notes", "## Sub\ntext")
            .state;

        let result = run(
            &state,
            &FlashdeckConfig::default(),
            &[],
            dir.path(),
            ExportFormat::Files,
        )
        .unwrap();

        assert_eq!(result.exported_paths.len(), 2);
        let rust = fs::read_to_string(dir.path().join("Rust.md")).unwrap();
        assert_eq!(rust, "# Rust\n\nownership");
        assert!(dir.path().join("notes.md").exists());
    }

    #[test]
    fn clashing_names_are_numbered() {
        let state = StateFixture::new()
            .with_document("# Same\none")
            .with_document("# Same\ntwo")
            .state;
        let docs = index_documents(&state.documents);
        let names: Vec<_> = export_entries(&docs, "untitled.md")
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["Same.md", "Same-2.md"]);
    }

    #[test]
    fn selected_documents_only() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateFixture::new()
            .with_document("# A")
            .with_pinned_document("# B")
            .state;
        let result = run(
            &state,
            &FlashdeckConfig::default(),
            &[DocSelector::Index(DisplayIndex::Pinned(1))],
            dir.path(),
            ExportFormat::Files,
        )
        .unwrap();
        assert_eq!(result.exported_paths, vec![dir.path().join("B.md")]);
    }

    #[test]
    fn archive_is_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateFixture::new().with_document("# A\nbody").state;
        let result = run(
            &state,
            &FlashdeckConfig::default(),
            &[],
            dir.path(),
            ExportFormat::Archive,
        )
        .unwrap();

        assert_eq!(result.exported_paths.len(), 1);
        let bytes = fs::read(&result.exported_paths[0]).unwrap();
        assert_eq!(bytes[0], 0x1f);
        assert_eq!(bytes[1], 0x8b);
    }

    #[test]
    fn nothing_to_export() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            &AppState::default(),
            &FlashdeckConfig::default(),
            &[],
            dir.path().join("out").as_path(),
            ExportFormat::Files,
        )
        .unwrap();
        assert!(result.exported_paths.is_empty());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn numbered_keeps_extension() {
        assert_eq!(numbered("a.md", 2), "a-2.md");
        assert_eq!(numbered("README", 3), "README-3");
        assert_eq!(numbered(".hidden", 2), ".hidden-2");
    }
}
