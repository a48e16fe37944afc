use crate::api::{FlashdeckApi, FlashdeckPaths};
use crate::config::FlashdeckConfig;
use crate::error::{FlashdeckError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "FLASHDECK_HOME";

pub struct FlashdeckContext {
    pub api: FlashdeckApi<FileStore>,
    pub config: FlashdeckConfig,
}

/// The data directory: `override_dir` when set and non-empty, otherwise the
/// platform data directory.
pub fn resolve_data_dir(override_dir: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "flashdeck", "flashdeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            FlashdeckError::Store(format!(
                "Could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

pub fn initialize() -> Result<FlashdeckContext> {
    let data_dir = resolve_data_dir(std::env::var_os(HOME_ENV))?;
    initialize_in(data_dir)
}

/// Builds the file-backed API rooted at `data_dir`. An unreadable config falls
/// back to defaults.
pub fn initialize_in(data_dir: PathBuf) -> Result<FlashdeckContext> {
    let config = FlashdeckConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        FlashdeckConfig::default()
    });
    tracing::debug!(data_dir = %data_dir.display(), "initializing");

    let store = FileStore::new(data_dir.clone());
    let paths = FlashdeckPaths { data_dir };
    let api = FlashdeckApi::open(store, config.clone(), paths)?;

    Ok(FlashdeckContext { api, config })
}
