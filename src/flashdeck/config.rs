use crate::error::{FlashdeckError, Result};
use crate::search::MatchMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FALLBACK_NAME: &str = "untitled.md";

/// Configuration for flashdeck, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashdeckConfig {
    /// Extensions to look for when importing directories (e.g. ".md", ".txt")
    #[serde(default = "default_import_ext")]
    pub import_extensions: Vec<String>,

    /// Name given to documents whose first card is not a level-1 heading
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,

    /// How search queries are interpreted unless overridden per search
    #[serde(default)]
    pub match_mode: MatchMode,
}

fn default_import_ext() -> Vec<String> {
    vec![".md".to_string(), ".markdown".to_string(), ".txt".to_string()]
}

fn default_fallback_name() -> String {
    DEFAULT_FALLBACK_NAME.to_string()
}

impl Default for FlashdeckConfig {
    fn default() -> Self {
        Self {
            import_extensions: default_import_ext(),
            fallback_name: default_fallback_name(),
            match_mode: MatchMode::default(),
        }
    }
}

impl FlashdeckConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FlashdeckError::Io)?;
        let config: FlashdeckConfig =
            serde_json::from_str(&content).map_err(FlashdeckError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FlashdeckError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FlashdeckError::Serialization)?;
        fs::write(config_path, content).map_err(FlashdeckError::Io)?;
        Ok(())
    }

    /// Names accepted by [`get`](Self::get) and [`set`](Self::set).
    pub const KEYS: [&'static str; 3] = ["import_extensions", "fallback_name", "match_mode"];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "import_extensions" => Some(self.import_extensions.join(",")),
            "fallback_name" => Some(self.fallback_name.clone()),
            "match_mode" => Some(self.match_mode.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "import_extensions" => {
                self.set_import_extensions(value);
                Ok(())
            }
            "fallback_name" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("fallback_name cannot be empty".to_string());
                }
                self.fallback_name = value.to_string();
                Ok(())
            }
            "match_mode" => {
                self.match_mode = value.parse()?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// Sets the import extensions from a comma separated list, normalizing
    /// each to start with a dot.
    pub fn set_import_extensions(&mut self, list: &str) {
        self.import_extensions = list
            .split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(|e| {
                if e.starts_with('.') {
                    e.to_string()
                } else {
                    format!(".{}", e)
                }
            })
            .collect();
    }

    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .is_some_and(|ext| {
                self.import_extensions
                    .iter()
                    .any(|e| e.eq_ignore_ascii_case(&ext))
            })
    }
}
