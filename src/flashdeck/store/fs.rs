use super::KeyValueStore;
use crate::error::{FlashdeckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: each key is `<root>/<key>.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(FlashdeckError::Store(format!("Invalid store key: {}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FlashdeckError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(FlashdeckError::Io)?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;
        // replace atomically
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(FlashdeckError::Io)?;
        fs::rename(&tmp, &path).map_err(FlashdeckError::Io)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(FlashdeckError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn set_creates_root_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("data");
        let mut store = FileStore::new(root.clone());

        store.set("flashdeck-files", "[1,2]").unwrap();
        assert!(root.join("flashdeck-files.json").exists());
        assert_eq!(store.get("flashdeck-files").unwrap().as_deref(), Some("[1,2]"));

        store.remove("flashdeck-files").unwrap();
        assert_eq!(store.get("flashdeck-files").unwrap(), None);
        store.remove("flashdeck-files").unwrap();
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
    }
}
