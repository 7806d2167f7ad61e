//! # Command Layer
//!
//! Each command is a plain function over the in-memory collection. Commands
//! never touch storage and never print: they mutate (or read) the slice they
//! are handed and describe what happened in a [`CmdResult`]. Persisting the
//! collection afterwards is the manager's job.

use crate::model::{Note, Priority, Status};

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a command did.
///
/// `affected_notes` holds the notes a mutating command created, changed or
/// removed (as they were after the change, or just before removal).
/// `listed_notes` holds the output of read-only commands, in collection order.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<Note>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.add_message(message);
        self
    }

    /// Whether the collection was mutated and needs saving.
    pub fn changed(&self) -> bool {
        !self.affected_notes.is_empty()
    }

    /// For id-addressed commands: whether a note with that id existed.
    pub fn found(&self) -> bool {
        self.changed()
    }

    /// The id assigned by `add`.
    pub fn new_id(&self) -> Option<u64> {
        self.affected_notes.first().and_then(|n| n.id)
    }
}

/// Input for [`add::run`].
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub tags: Vec<String>,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            priority: Priority::default(),
            tags: Vec::new(),
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Filters for [`list::run`], combined with AND. `None` means "any".
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub tag: Option<String>,
    pub include_archived: bool,
}

impl NoteFilter {
    pub fn matches(&self, note: &Note) -> bool {
        (self.include_archived || note.status != Status::Archived)
            && self.status.is_none_or(|s| note.status == s)
            && self.priority.is_none_or(|p| note.priority == p)
            && self.tag.as_deref().is_none_or(|t| note.has_tag(t))
    }
}

pub(crate) fn not_found(id: u64) -> CmdMessage {
    CmdMessage::warning(format!("Note {} not found", id))
}
