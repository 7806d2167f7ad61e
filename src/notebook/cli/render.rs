use chrono::{DateTime, Local, Utc};
use colored::{ColoredString, Colorize};
use notebook::commands::{CmdMessage, MessageLevel};
use notebook::model::{Note, Priority, Status};
use std::fmt::Write;

const SEPARATOR_WIDTH: usize = 40;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Every field of every note, one block per note.
pub(super) fn render_full_notes(notes: &[Note], date_format: &str) -> String {
    let mut out = String::new();
    for note in notes {
        let _ = writeln!(out, "{} {}", "ID:".bold(), id_label(note).yellow());
        let _ = writeln!(out, "{} {}", "Title:".bold(), note.title.bold());
        if !note.content.is_empty() {
            let _ = writeln!(out, "{} {}", "Content:".bold(), note.content);
        }
        let _ = writeln!(out, "{} {}", "Status:".bold(), status_label(note.status));
        let _ = writeln!(
            out,
            "{} {}",
            "Priority:".bold(),
            priority_label(note.priority)
        );
        let _ = writeln!(out, "{} {}", "Tags:".bold(), note.tags.join(", "));
        let _ = writeln!(
            out,
            "{} {}",
            "Created:".bold(),
            format_time(&note.created_at, date_format).dimmed()
        );
        let _ = writeln!(
            out,
            "{} {}",
            "Updated:".bold(),
            format_time(&note.updated_at, date_format).dimmed()
        );
        let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH).dimmed());
    }
    out
}

/// One summary line per note plus tags and creation time, for search hits.
pub(super) fn render_note_lines(notes: &[Note], date_format: &str) -> String {
    let mut out = String::new();
    for note in notes {
        let _ = writeln!(
            out,
            "{} {} | {} | {} | {}",
            "ID:".bold(),
            id_label(note).yellow(),
            note.title.bold(),
            status_label(note.status),
            priority_label(note.priority)
        );
        if !note.tags.is_empty() {
            let _ = writeln!(out, "{} {}", "Tags:".bold(), note.tags.join(", "));
        }
        let _ = writeln!(
            out,
            "{} {}",
            "Created:".bold(),
            format_time(&note.created_at, date_format).dimmed()
        );
        let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH).dimmed());
    }
    out
}

fn id_label(note: &Note) -> String {
    note.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into())
}

fn status_label(status: Status) -> ColoredString {
    match status {
        Status::Active => status.as_str().normal(),
        Status::Completed => status.as_str().green(),
        Status::Archived => status.as_str().dimmed(),
    }
}

fn priority_label(priority: Priority) -> ColoredString {
    match priority {
        Priority::Low => priority.as_str().dimmed(),
        Priority::Medium => priority.as_str().normal(),
        Priority::High => priority.as_str().red().bold(),
    }
}

fn format_time(timestamp: &DateTime<Utc>, date_format: &str) -> String {
    timestamp.with_timezone(&Local).format(date_format).to_string()
}
