use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::model::{Note, Status};

/// Sets the status of note `id` and refreshes its `updated_at`.
///
/// Setting the status a note already has still counts as an update.
pub fn run(notes: &mut [Note], id: u64, status: Status) -> CmdResult {
    let Some(note) = notes.iter_mut().find(|n| n.id == Some(id)) else {
        return CmdResult::default().with_message(not_found(id));
    };

    note.set_status(status);
    CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Note {} status set to {}",
            id, status
        )))
        .with_affected_notes(vec![note.clone()])
}
