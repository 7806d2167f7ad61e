//! # Storage Layer
//!
//! Storage is the only part of notebook that knows how the collection is
//! persisted. It is deliberately coarse: the whole collection is read in one
//! call and the whole collection is written back in one call. There is no
//! per-note update, no merge and no locking.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file holding an array of note records
//!   (see [`NoteRecord`](crate::model::NoteRecord)).
//! - [`memory::InMemoryStore`]: keeps the encoded records in memory, for tests.
//!
//! Stores do not retain the notes they are handed. Whoever calls
//! [`NoteStore::load_all`] owns the returned collection.
//!
//! ## Identifiers
//!
//! Ids are allocated by [`next_id`] against the caller's collection, not by
//! the store. The allocator is gap-unaware: deleting a note in the middle
//! never frees its id for reuse, and ids only grow. Once `u64::MAX` is taken
//! there is nothing left to allocate.

use crate::error::{FormatError, StorageError};
use crate::model::{Note, NoteRecord};
use std::collections::HashSet;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait NoteStore {
    /// Read every persisted note, in file order.
    fn load_all(&self) -> Result<Vec<Note>, StorageError>;

    /// Replace the persisted collection with `notes`, preserving their order.
    fn save_all(&mut self, notes: &[Note]) -> Result<(), StorageError>;
}

/// The id the next inserted note should get: one past the highest id in use,
/// or `None` when the highest id is already `u64::MAX`.
pub fn next_id(notes: &[Note]) -> Option<u64> {
    match notes.iter().filter_map(|n| n.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Encodes the collection as a pretty-printed JSON array, newline terminated.
pub(crate) fn encode(notes: &[Note]) -> Result<String, StorageError> {
    let records: Vec<NoteRecord> = notes.iter().map(Note::to_record).collect();
    let mut text = serde_json::to_string_pretty(&records)?;
    text.push('\n');
    Ok(text)
}

/// Decodes a persisted collection. `origin` only labels errors.
///
/// Every persisted note must carry a positive id, unique in the file.
pub(crate) fn decode(origin: &Path, text: &str) -> Result<Vec<Note>, StorageError> {
    let corrupt = |index: Option<usize>, source: FormatError| StorageError::Format {
        path: origin.to_path_buf(),
        index,
        source,
    };

    let values: Vec<serde_json::Value> =
        serde_json::from_str(text).map_err(|e| corrupt(None, e.into()))?;

    let mut seen = HashSet::with_capacity(values.len());
    let mut notes = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let note = serde_json::from_value::<NoteRecord>(value)
            .map_err(FormatError::from)
            .and_then(Note::from_record)
            .and_then(|note| match note.id {
                None => Err(FormatError::MissingField("id")),
                Some(0) => Err(FormatError::InvalidId(0)),
                Some(id) if !seen.insert(id) => Err(FormatError::DuplicateId(id)),
                Some(_) => Ok(note),
            })
            .map_err(|e| corrupt(Some(index), e))?;
        notes.push(note);
    }
    Ok(notes)
}
