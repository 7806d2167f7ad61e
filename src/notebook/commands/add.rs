use crate::commands::{CmdMessage, CmdResult, NewNote};
use crate::error::{NotebookError, Result};
use crate::model::Note;
use crate::store::next_id;

/// Appends a new note to the end of the collection with the next free id.
pub fn run(notes: &mut Vec<Note>, new: NewNote) -> Result<CmdResult> {
    if new.title.trim().is_empty() {
        return Err(NotebookError::InvalidInput("Title cannot be empty".into()));
    }
    let id = next_id(notes)
        .ok_or_else(|| NotebookError::InvalidInput("Note id space exhausted".into()))?;

    let mut note = Note::new(new.title, new.content)
        .with_priority(new.priority)
        .with_tags(new.tags);
    note.id = Some(id);
    notes.push(note.clone());

    Ok(CmdResult::default()
        .with_affected_notes(vec![note])
        .with_message(CmdMessage::success(format!("Note added with ID: {}", id))))
}
