use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A command running inside `dir`, isolated from the user's config and env.
fn notebook_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("notebook").unwrap();
    cmd.current_dir(dir)
        .env("NOTEBOOK_HOME", dir.join("config"))
        .env("NO_COLOR", "1")
        .env_remove("NOTEBOOK_FILE")
        .env_remove("NOTEBOOK_LOG");
    cmd
}

fn read_records(path: &Path) -> Vec<serde_json::Value> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_end_to_end_scenario() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    notebook_cmd(dir)
        .args(["add", "--title", "Buy milk", "--content", "2%", "--priority", "medium"])
        .args(["--tags", "errand"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added with ID: 1"));

    notebook_cmd(dir)
        .args(["add", "--title", "Plan trip", "--content", "", "--priority", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added with ID: 2"));

    notebook_cmd(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)ID: 1\n.*Buy milk.*ID: 2\n.*Plan trip").unwrap());

    notebook_cmd(dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note 1 deleted"));

    notebook_cmd(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan trip"))
        .stdout(predicate::str::contains("Buy milk").not());

    let records = read_records(&dir.join("notes.json"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], 2);
    assert_eq!(records[0]["title"], "Plan trip");
    assert_eq!(records[0]["priority"], "high");
    assert_eq!(records[0]["status"], "active");
}

#[test]
fn test_no_subcommand_prints_help_without_creating_a_file() {
    let temp = TempDir::new().unwrap();

    notebook_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("add"));

    assert!(!temp.path().join("notes.json").exists());
}

#[test]
fn test_first_run_creates_an_empty_file() {
    let temp = TempDir::new().unwrap();

    notebook_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));

    assert_eq!(
        fs::read_to_string(temp.path().join("notes.json"))
            .unwrap()
            .trim(),
        "[]"
    );
}

#[test]
fn test_not_found_outcomes_exit_zero() {
    let temp = TempDir::new().unwrap();

    notebook_cmd(temp.path())
        .args(["delete", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note 99 not found"));

    notebook_cmd(temp.path())
        .args(["status", "99", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note 99 not found"));
}

#[test]
fn test_status_change_and_archived_filtering() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    for title in ["Keep me", "Archive me"] {
        notebook_cmd(dir)
            .args(["add", "--title", title])
            .assert()
            .success();
    }

    notebook_cmd(dir)
        .args(["status", "2", "archived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note 2 status set to archived"));

    notebook_cmd(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep me"))
        .stdout(predicate::str::contains("Archive me").not());

    notebook_cmd(dir)
        .args(["list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive me"));

    notebook_cmd(dir)
        .args(["list", "--status", "archived", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive me"))
        .stdout(predicate::str::contains("Keep me").not());

    let records = read_records(&dir.join("notes.json"));
    assert_eq!(records[1]["status"], "archived");
}

#[test]
fn test_list_filters_by_tag_and_priority() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    notebook_cmd(dir)
        .args(["add", "--title", "Report", "--priority", "high", "--tags", "work, q3"])
        .assert()
        .success();
    notebook_cmd(dir)
        .args(["add", "--title", "Laundry", "--priority", "low", "--tags", "home"])
        .assert()
        .success();

    notebook_cmd(dir)
        .args(["list", "--tag", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report"))
        .stdout(predicate::str::contains("Tags: work, q3"))
        .stdout(predicate::str::contains("Laundry").not());

    notebook_cmd(dir)
        .args(["list", "--priority", "low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Laundry"))
        .stdout(predicate::str::contains("Report").not());

    notebook_cmd(dir)
        .args(["list", "--tag", "Work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn test_search_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    notebook_cmd(dir)
        .args(["add", "--title", "Example", "--content", "first"])
        .assert()
        .success();
    notebook_cmd(dir)
        .args(["add", "--title", "Other", "--tags", "TEXT"])
        .assert()
        .success();

    notebook_cmd(dir)
        .args(["search", "EX"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 notes"))
        .stdout(predicate::str::contains("ID: 1 | Example | active | medium"));

    notebook_cmd(dir)
        .args(["search", "nowhere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn test_file_flag_and_env_select_the_notes_file() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    notebook_cmd(dir)
        .args(["--file", "work/notes.json", "add", "--title", "Flagged"])
        .assert()
        .success();
    assert!(dir.join("work").join("notes.json").exists());
    assert!(!dir.join("notes.json").exists());

    notebook_cmd(dir)
        .env("NOTEBOOK_FILE", "work/notes.json")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flagged"));
}

#[test]
fn test_config_sets_the_notes_file() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    notebook_cmd(dir)
        .args(["config", "notes-file", "configured.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes-file set to configured.json"));

    notebook_cmd(dir)
        .args(["config", "notes-file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes-file = configured.json"));

    notebook_cmd(dir)
        .args(["add", "--title", "Configured"])
        .assert()
        .success();
    assert!(dir.join("configured.json").exists());

    notebook_cmd(dir)
        .args(["config", "colour", "red"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn test_corrupt_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("notes.json"),
        r#"[{"id": 1, "title": "x", "content": "", "status": "done", "priority": "low",
            "tags": [], "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z"}]"#,
    )
    .unwrap();

    notebook_cmd(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("unknown status `done`"));
}

#[test]
fn test_title_is_stored_as_given() {
    let temp = TempDir::new().unwrap();

    notebook_cmd(temp.path())
        .args(["add", "--title", "  Buy milk "])
        .assert()
        .success();

    let records = read_records(&temp.path().join("notes.json"));
    assert_eq!(records[0]["title"], "  Buy milk ");
}

#[test]
fn test_exhausted_ids_are_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("notes.json"),
        r#"[{"id": 18446744073709551615, "title": "last", "content": "", "status": "active",
            "priority": "low", "tags": [], "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"}]"#,
    )
    .unwrap();

    notebook_cmd(temp.path())
        .args(["add", "--title", "one more"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("id space exhausted"));

    notebook_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 18446744073709551615"));
}

#[test]
fn test_blank_title_is_rejected() {
    let temp = TempDir::new().unwrap();

    notebook_cmd(temp.path())
        .args(["add", "--title", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title cannot be empty"));

    assert_eq!(read_records(&temp.path().join("notes.json")).len(), 0);
}

#[test]
fn test_invalid_arguments_are_rejected_by_the_parser() {
    let temp = TempDir::new().unwrap();

    notebook_cmd(temp.path())
        .args(["add", "--title", "T", "--priority", "urgent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("urgent"));
}
