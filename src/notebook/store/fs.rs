use super::{decode, encode, NoteStore};
use crate::error::StorageError;
use crate::model::Note;
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

/// Notes persisted as one JSON array in a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens the store at `path`, creating an empty notes file if none exists.
    ///
    /// An existing file is never touched, whatever its contents.
    pub fn init(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let io_err = |source| StorageError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(b"[]\n").map_err(io_err)?;
                debug!("created empty notes file at {}", path.display());
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(io_err(e)),
        }

        Ok(Self { path })
    }

}

impl NoteStore for FileStore {
    fn load_all(&self) -> Result<Vec<Note>, StorageError> {
        let text = fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => StorageError::Missing(self.path.clone()),
            _ => StorageError::Io {
                path: self.path.clone(),
                source,
            },
        })?;
        let notes = decode(&self.path, &text)?;
        debug!("loaded {} notes from {}", notes.len(), self.path.display());
        Ok(notes)
    }

    fn save_all(&mut self, notes: &[Note]) -> Result<(), StorageError> {
        let text = encode(notes)?;
        fs::write(&self.path, text).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("saved {} notes to {}", notes.len(), self.path.display());
        Ok(())
    }
}
