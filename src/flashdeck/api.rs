//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for every flashdeck operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session state**: the [`AppState`] is loaded from the store once,
//!   in [`FlashdeckApi::open`], and written back after every mutating call
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw argument strings become [`DocSelector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and no formatting; that is the CLI's job.
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `FlashdeckApi<FileStore>`
//! - Testing: `FlashdeckApi<InMemoryStore>`
//!
//! Command logic is tested in the command modules; tests here check that calls
//! reach the store.

use crate::commands;
use crate::config::FlashdeckConfig;
use crate::error::Result;
use crate::index::{parse_selectors, DocSelector};
use crate::search::MatchMode;
use crate::state::AppState;
use crate::store::{load_state, save_state, KeyValueStore};
use std::path::{Path, PathBuf};

pub struct FlashdeckApi<S: KeyValueStore> {
    store: S,
    state: AppState,
    config: FlashdeckConfig,
    paths: commands::FlashdeckPaths,
}

impl<S: KeyValueStore> FlashdeckApi<S> {
    /// Loads the persisted state from `store`.
    pub fn open(store: S, config: FlashdeckConfig, paths: commands::FlashdeckPaths) -> Result<Self> {
        let state = load_state(&store)?;
        Ok(Self {
            store,
            state,
            config,
            paths,
        })
    }

    pub fn create_document(&mut self, text: &str, name: Option<String>) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.state, &self.config, text, name);
        self.persist()?;
        Ok(result)
    }

    pub fn import_documents(&mut self, paths: Vec<PathBuf>) -> Result<CmdResult> {
        let result = commands::import::run(&mut self.state, &self.config, paths)?;
        self.persist()?;
        Ok(result)
    }

    pub fn list_documents(&self) -> CmdResult {
        commands::list::run(&self.state)
    }

    pub fn view_document<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<CmdResult> {
        let selectors = selectors(indexes);
        let result = commands::view::run(&mut self.state, &selectors)?;
        self.persist()?;
        Ok(result)
    }

    pub fn next_card(&mut self) -> Result<CmdResult> {
        let result = commands::navigate::next(&mut self.state)?;
        self.persist()?;
        Ok(result)
    }

    pub fn prev_card(&mut self) -> Result<CmdResult> {
        let result = commands::navigate::prev(&mut self.state)?;
        self.persist()?;
        Ok(result)
    }

    /// `number` is one-based.
    pub fn jump_to_card<I: AsRef<str>>(&mut self, indexes: &[I], number: usize) -> Result<CmdResult> {
        let selectors = selectors(indexes);
        let result = commands::navigate::jump(&mut self.state, &selectors, number)?;
        self.persist()?;
        Ok(result)
    }

    pub fn table_of_contents<I: AsRef<str>>(&self, indexes: &[I]) -> Result<CmdResult> {
        commands::toc::run(&self.state, &selectors(indexes))
    }

    /// Searches all cards. Without an explicit `mode` the configured one is used.
    pub fn search(&self, query: &str, mode: Option<MatchMode>) -> CmdResult {
        let mode = mode.unwrap_or(self.config.match_mode);
        commands::search::run(&self.state, query, mode)
    }

    pub fn edit_document<I, F>(&mut self, indexes: &[I], edit: F) -> Result<CmdResult>
    where
        I: AsRef<str>,
        F: FnOnce(&str) -> Result<String>,
    {
        let selectors = selectors(indexes);
        let result = commands::edit::run(&mut self.state, &self.config, &selectors, edit)?;
        if !result.affected_documents.is_empty() {
            self.persist()?;
        }
        Ok(result)
    }

    pub fn pin_documents<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<CmdResult> {
        let result = commands::pinning::pin(&mut self.state, &selectors(indexes))?;
        self.persist()?;
        Ok(result)
    }

    pub fn unpin_documents<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<CmdResult> {
        let result = commands::pinning::unpin(&mut self.state, &selectors(indexes))?;
        self.persist()?;
        Ok(result)
    }

    pub fn delete_documents<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.state, &selectors(indexes))?;
        self.persist()?;
        Ok(result)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        let result = commands::reset::run(&mut self.state);
        self.persist()?;
        Ok(result)
    }

    pub fn export_documents<I: AsRef<str>>(
        &self,
        indexes: &[I],
        out_dir: &Path,
        format: ExportFormat,
    ) -> Result<CmdResult> {
        commands::export::run(
            &self.state,
            &self.config,
            &selectors(indexes),
            out_dir,
            format,
        )
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let changes = matches!(action, ConfigAction::Set(..));
        let result = commands::config::run(&self.paths, action)?;
        if changes {
            if let Some(config) = &result.config {
                self.config = config.clone();
            }
        }
        Ok(result)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn paths(&self) -> &commands::FlashdeckPaths {
        &self.paths
    }

    fn persist(&mut self) -> Result<()> {
        save_state(&mut self.store, &self.state)
    }
}

fn selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<DocSelector> {
    if inputs.is_empty() {
        Vec::new()
    } else {
        parse_selectors(inputs)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportFormat;
pub use commands::{CardView, CmdMessage, CmdResult, FlashdeckPaths, MessageLevel, TocEntry};
