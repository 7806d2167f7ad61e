use crate::commands::{CmdMessage, CmdResult, NoteFilter};
use crate::model::Note;

pub fn run(notes: &[Note], filter: &NoteFilter) -> CmdResult {
    let listed: Vec<Note> = notes.iter().filter(|n| filter.matches(n)).cloned().collect();

    let mut result = CmdResult::default().with_listed_notes(listed);
    if result.listed_notes.is_empty() {
        result.add_message(CmdMessage::info("No notes found."));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Status};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::NoteStore;

    fn titles(result: &CmdResult) -> Vec<&str> {
        result
            .listed_notes
            .iter()
            .map(|n| n.title.as_str())
            .collect()
    }

    fn sample() -> Vec<Note> {
        StoreFixture::new()
            .with_note("errand", Priority::Medium, &["home", "Shop"])
            .with_status_note("shelved", Status::Archived)
            .with_note("urgent", Priority::High, &["work"])
            .with_status_note("done", Status::Completed)
            .build()
            .load_all()
            .unwrap()
    }

    #[test]
    fn excludes_archived_by_default_in_insertion_order() {
        let result = run(&sample(), &NoteFilter::default());
        assert_eq!(titles(&result), ["errand", "urgent", "done"]);
    }

    #[test]
    fn includes_archived_when_asked() {
        let filter = NoteFilter {
            include_archived: true,
            ..NoteFilter::default()
        };
        let result = run(&sample(), &filter);
        assert_eq!(titles(&result), ["errand", "shelved", "urgent", "done"]);
    }

    #[test]
    fn archived_status_filter_still_needs_include_archived() {
        let mut filter = NoteFilter {
            status: Some(Status::Archived),
            ..NoteFilter::default()
        };
        assert!(run(&sample(), &filter).listed_notes.is_empty());

        filter.include_archived = true;
        assert_eq!(titles(&run(&sample(), &filter)), ["shelved"]);
    }

    #[test]
    fn filters_by_priority_and_status() {
        let by_priority = NoteFilter {
            priority: Some(Priority::High),
            ..NoteFilter::default()
        };
        assert_eq!(titles(&run(&sample(), &by_priority)), ["urgent"]);

        let by_status = NoteFilter {
            status: Some(Status::Completed),
            ..NoteFilter::default()
        };
        assert_eq!(titles(&run(&sample(), &by_status)), ["done"]);
    }

    #[test]
    fn tag_filter_is_exact_and_case_sensitive() {
        let filter = |tag: &str| NoteFilter {
            tag: Some(tag.to_string()),
            ..NoteFilter::default()
        };
        assert_eq!(titles(&run(&sample(), &filter("Shop"))), ["errand"]);
        assert!(run(&sample(), &filter("shop")).listed_notes.is_empty());
        assert!(run(&sample(), &filter("Sho")).listed_notes.is_empty());
    }

    #[test]
    fn empty_result_is_reported_not_failed() {
        let result = run(&[], &NoteFilter::default());
        assert!(result.listed_notes.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "No notes found.");
    }
}
