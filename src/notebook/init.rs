use crate::config::NotebookConfig;
use crate::error::{NotebookError, Result};
use crate::manager::NoteManager;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use log::debug;
use std::path::{Path, PathBuf};

/// Overrides the config directory.
pub const HOME_ENV: &str = "NOTEBOOK_HOME";
/// Overrides the notes file (below `--file`, above the config file).
pub const FILE_ENV: &str = "NOTEBOOK_FILE";
pub const DEFAULT_NOTES_FILE: &str = "notes.json";

pub struct NotebookContext {
    pub manager: NoteManager<FileStore>,
    pub config: NotebookConfig,
}

/// Where `config.json` lives: `$NOTEBOOK_HOME`, else the platform config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "notebook", "notebook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            NotebookError::Config(format!(
                "could not determine a config directory; set {}",
                HOME_ENV
            ))
        })
}

/// Picks the notes file: `--file`, then `$NOTEBOOK_FILE`, then the config,
/// then `notes.json` in `cwd`. Relative paths resolve against `cwd`.
pub fn resolve_notes_path(
    cwd: &Path,
    file_override: Option<&Path>,
    env_file: Option<PathBuf>,
    config: &NotebookConfig,
) -> PathBuf {
    let chosen = file_override
        .map(Path::to_path_buf)
        .or(env_file)
        .or_else(|| config.notes_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_FILE));
    cwd.join(chosen)
}

/// Loads config, opens (creating if needed) the notes file and loads the collection.
pub fn initialize(cwd: &Path, file_override: Option<&Path>) -> Result<NotebookContext> {
    let config = NotebookConfig::load(config_dir()?)?;

    let env_file = std::env::var_os(FILE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let notes_path = resolve_notes_path(cwd, file_override, env_file, &config);
    debug!("using notes file {}", notes_path.display());

    let store = FileStore::init(&notes_path)?;
    let manager = NoteManager::load(store)?;

    Ok(NotebookContext { manager, config })
}
