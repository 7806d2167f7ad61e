//! # Note Manager
//!
//! The manager is the single entry point for every notebook operation,
//! whatever the UI. It owns the collection: notes are loaded once in
//! [`NoteManager::load`] and live in memory for the lifetime of the manager.
//!
//! Every mutating operation runs its command against the in-memory
//! collection and then rewrites the whole store synchronously. Operations
//! that change nothing (a delete of an unknown id, say) do not write.
//!
//! ## Save failures
//!
//! There is no rollback. When `save_all` fails after a mutation, the error is
//! returned but the in-memory collection keeps the change, so memory is ahead
//! of disk until the next successful save rewrites the whole file.
//!
//! `NoteManager<S: NoteStore>` is generic over the store so tests can run it
//! against [`InMemoryStore`](crate::store::memory::InMemoryStore).

use crate::commands::{self, CmdResult, NewNote, NoteFilter};
use crate::error::Result;
use crate::model::{Note, Status};
use crate::store::NoteStore;
use log::{debug, warn};

pub struct NoteManager<S: NoteStore> {
    store: S,
    notes: Vec<Note>,
}

impl<S: NoteStore> NoteManager<S> {
    /// Loads the full collection from `store`.
    pub fn load(store: S) -> Result<Self> {
        let notes = store.load_all()?;
        Ok(Self { store, notes })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_note(&mut self, new: NewNote) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.notes, new)?;
        debug!("added note {:?}", result.new_id());
        self.persist(&result)?;
        Ok(result)
    }

    pub fn list_notes(&self, filter: &NoteFilter) -> CmdResult {
        commands::list::run(&self.notes, filter)
    }

    pub fn search_notes(&self, query: &str) -> CmdResult {
        commands::search::run(&self.notes, query)
    }

    pub fn delete_note(&mut self, id: u64) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.notes, id);
        debug!("delete note {}: found={}", id, result.found());
        self.persist(&result)?;
        Ok(result)
    }

    pub fn update_status(&mut self, id: u64, status: Status) -> Result<CmdResult> {
        let result = commands::status::run(&mut self.notes, id, status);
        debug!("set status of note {} to {}: found={}", id, status, result.found());
        self.persist(&result)?;
        Ok(result)
    }

    fn persist(&mut self, result: &CmdResult) -> Result<()> {
        if !result.changed() {
            return Ok(());
        }
        self.store.save_all(&self.notes).map_err(|e| {
            warn!("save failed, in-memory notes are ahead of the store: {}", e);
            e.into()
        })
    }
}
