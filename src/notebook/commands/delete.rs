use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::model::Note;

/// Removes the note with `id`. A missing id is a normal outcome, not an error.
pub fn run(notes: &mut Vec<Note>, id: u64) -> CmdResult {
    match notes.iter().position(|n| n.id == Some(id)) {
        Some(pos) => {
            let removed = notes.remove(pos);
            CmdResult::default()
                .with_message(CmdMessage::success(format!("Note {} deleted", id)))
                .with_affected_notes(vec![removed])
        }
        None => CmdResult::default().with_message(not_found(id)),
    }
}
