use std::path::PathBuf;
use thiserror::Error;

/// A persisted note record that cannot be turned back into a [`Note`](crate::model::Note).
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("unknown status `{0}` (expected active, completed or archived)")]
    UnknownStatus(String),

    #[error("unknown priority `{0}` (expected low, medium or high)")]
    UnknownPriority(String),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("note title is empty")]
    EmptyTitle,

    #[error("invalid timestamp in `{field}`: `{value}`")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("updated_at ({updated_at}) is earlier than created_at ({created_at})")]
    TimestampOrder {
        created_at: String,
        updated_at: String,
    },

    #[error("note id must be positive, got {0}")]
    InvalidId(u64),

    #[error("duplicate note id {0}")]
    DuplicateId(u64),

    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("notes file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is corrupt{}: {source}", path.display(), record_suffix(*index))]
    Format {
        path: PathBuf,
        index: Option<usize>,
        #[source]
        source: FormatError,
    },

    #[error("cannot encode notes: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn record_suffix(index: Option<usize>) -> String {
    match index {
        Some(i) => format!(" (record {})", i),
        None => String::new(),
    }
}

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, NotebookError>;
