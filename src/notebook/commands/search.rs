use crate::commands::{CmdMessage, CmdResult};
use crate::model::Note;

/// Case-insensitive substring search over title, content and tags.
///
/// Unlike `list`, archived notes are searched too. Matches keep collection order.
pub fn run(notes: &[Note], query: &str) -> CmdResult {
    let listed: Vec<Note> = notes
        .iter()
        .filter(|n| n.matches_query(query))
        .cloned()
        .collect();

    let message = match listed.len() {
        0 => CmdMessage::info("No notes found."),
        1 => CmdMessage::info("Found 1 note"),
        n => CmdMessage::info(format!("Found {} notes", n)),
    };
    CmdResult::default()
        .with_listed_notes(listed)
        .with_message(message)
}
