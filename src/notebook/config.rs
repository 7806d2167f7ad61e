use crate::error::{NotebookError, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Keys accepted by `notebook config`.
pub const CONFIG_KEYS: &[&str] = &["notes-file", "date-format"];

/// Configuration for notebook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotebookConfig {
    /// Where the notes live. Relative paths resolve against the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_file: Option<PathBuf>,

    /// strftime-style format for timestamps in listings
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            notes_file: None,
            date_format: default_date_format(),
        }
    }
}

impl NotebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NotebookConfig = serde_json::from_str(&content)?;
        validate_date_format(&config.date_format)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "notes-file" => Ok(self
                .notes_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "date-format" => Ok(self.date_format.clone()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "notes-file" if value.is_empty() => self.notes_file = None,
            "notes-file" => self.notes_file = Some(PathBuf::from(value)),
            "date-format" => {
                validate_date_format(value)?;
                self.date_format = value.to_string();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn validate_date_format(format: &str) -> Result<()> {
    if format.trim().is_empty() {
        return Err(NotebookError::Config("date-format cannot be empty".into()));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(NotebookError::Config(format!(
            "invalid date-format: {}",
            format
        )));
    }
    Ok(())
}

fn unknown_key(key: &str) -> NotebookError {
    NotebookError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
