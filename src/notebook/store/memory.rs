use super::{decode, encode, NoteStore};
use crate::error::StorageError;
use crate::model::Note;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for tests.
///
/// Notes are kept encoded, exactly as `FileStore` would write them, so a
/// load always hands back fresh values and never aliases the caller's notes.
#[derive(Debug)]
pub struct InMemoryStore {
    text: String,
    fail_next_save: bool,
    saves: usize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            text: "[]".to_string(),
            fail_next_save: false,
            saves: 0,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `save_all` fail without changing the stored notes.
    pub fn fail_next_save(&mut self) {
        self.fail_next_save = true;
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// The encoded collection, as it would appear on disk.
    pub fn contents(&self) -> &str {
        &self.text
    }

    fn origin() -> &'static Path {
        Path::new("<memory>")
    }
}

impl NoteStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<Note>, StorageError> {
        decode(Self::origin(), &self.text)
    }

    fn save_all(&mut self, notes: &[Note]) -> Result<(), StorageError> {
        if std::mem::take(&mut self.fail_next_save) {
            return Err(StorageError::Io {
                path: PathBuf::from(Self::origin()),
                source: io::Error::other("simulated write failure"),
            });
        }
        self.text = encode(notes)?;
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Priority, Status};
    use crate::store::next_id;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        notes: Vec<Note>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                notes: Vec::new(),
            }
        }

        fn push(mut self, mut note: Note) -> Self {
            note.id = next_id(&self.notes);
            self.notes.push(note);
            self.store.save_all(&self.notes).unwrap();
            self
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Note {}", i + 1);
                let content = format!("Content for note {}", i + 1);
                self = self.push(Note::new(title, content));
            }
            self
        }

        pub fn with_note(self, title: &str, priority: Priority, tags: &[&str]) -> Self {
            let tags = tags.iter().map(|t| t.to_string()).collect();
            self.push(
                Note::new(title, "Some content")
                    .with_priority(priority)
                    .with_tags(tags),
            )
        }

        pub fn with_status_note(self, title: &str, status: Status) -> Self {
            self.push(Note::new(title, "Some content").with_status(status))
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
