use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const DECK: &str = "# Ownership\n\nEvery value has one owner.\n\n## Borrowing\n\nShared borrows are `&T`.\n\n## Moves\n\nAssignment moves the value.\n";

fn flashdeck(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flashdeck").unwrap();
    cmd.current_dir(home)
        .env("FLASHDECK_HOME", home.join("data"))
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("FLASHDECK_LOG");
    cmd
}

fn import_deck(home: &Path) {
    let file = home.join("rust.md");
    fs::write(&file, DECK).unwrap();
    flashdeck(home)
        .arg("import")
        .arg(file.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total imported: 1"));
}

#[test]
fn empty_collection_lists_hint() {
    let temp_dir = tempfile::tempdir().unwrap();
    flashdeck(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No documents yet"));
}

#[test]
fn import_then_list_and_view() {
    let temp_dir = tempfile::tempdir().unwrap();
    import_deck(temp_dir.path());

    flashdeck(temp_dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. rust.md  (1/3)"));

    flashdeck(temp_dir.path())
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains("rust.md  1/3"))
        .stdout(predicate::str::contains("# Ownership"))
        .stdout(predicate::str::contains("Every value has one owner."));
}

#[test]
fn next_and_prev_stop_at_the_ends() {
    let temp_dir = tempfile::tempdir().unwrap();
    import_deck(temp_dir.path());

    flashdeck(temp_dir.path())
        .arg("prev")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already at the first card."));

    flashdeck(temp_dir.path())
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Borrowing"));

    flashdeck(temp_dir.path()).arg("next").assert().success();

    flashdeck(temp_dir.path())
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("3/3"))
        .stdout(predicate::str::contains("Already at the last card."));
}

#[test]
fn jump_and_toc() {
    let temp_dir = tempfile::tempdir().unwrap();
    import_deck(temp_dir.path());

    flashdeck(temp_dir.path())
        .args(["jump", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Moves"));

    flashdeck(temp_dir.path())
        .arg("toc")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Ownership"))
        .stdout(predicate::str::contains("2.   Borrowing"));

    flashdeck(temp_dir.path())
        .args(["jump", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: "));
}

#[test]
fn search_is_literal_by_default() {
    let temp_dir = tempfile::tempdir().unwrap();
    import_deck(temp_dir.path());

    flashdeck(temp_dir.path())
        .args(["search", "BORROW"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust.md #2"))
        .stdout(predicate::str::contains("Shared borrows"));

    flashdeck(temp_dir.path())
        .args(["search", "mo.es"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cards match"));

    flashdeck(temp_dir.path())
        .args(["search", "--regex", "mo.es"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust.md #3"));
}

#[test]
fn create_from_stdin_names_after_first_heading() {
    let temp_dir = tempfile::tempdir().unwrap();
    flashdeck(temp_dir.path())
        .arg("create")
        .write_stdin("# Lifetimes\n\n'a annotations\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Document created: Lifetimes.md (1 cards)"));

    flashdeck(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lifetimes.md"));
}

#[test]
fn export_writes_markdown_and_archives() {
    let temp_dir = tempfile::tempdir().unwrap();
    import_deck(temp_dir.path());
    let out = temp_dir.path().join("out");

    flashdeck(temp_dir.path())
        .args(["export", "--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));
    let exported = fs::read_to_string(out.join("Ownership.md")).unwrap();
    assert!(exported.starts_with("# Ownership\n\nEvery value has one owner."));

    flashdeck(temp_dir.path())
        .args(["export", "--archive", "--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(".tar.gz"));
    let archives = fs::read_dir(&out)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tar.gz"))
        .count();
    assert_eq!(archives, 1);
}

#[test]
fn pin_delete_and_reset() {
    let temp_dir = tempfile::tempdir().unwrap();
    import_deck(temp_dir.path());

    flashdeck(temp_dir.path())
        .args(["pin", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Document pinned (1): rust.md"));

    flashdeck(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("p1. rust.md"));

    flashdeck(temp_dir.path())
        .args(["rm", "p1"])
        .assert()
        .success();

    flashdeck(temp_dir.path())
        .arg("next")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active document"));

    import_deck(temp_dir.path());
    flashdeck(temp_dir.path())
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 document(s)."));
    assert!(!temp_dir.path().join("data/flashdeck-files.json").exists());
}

#[test]
fn config_set_changes_default_search_mode() {
    let temp_dir = tempfile::tempdir().unwrap();
    import_deck(temp_dir.path());

    flashdeck(temp_dir.path())
        .args(["config", "match_mode", "pattern"])
        .assert()
        .success()
        .stdout(predicate::str::contains("match_mode set to pattern"));

    flashdeck(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("match_mode = pattern"));

    flashdeck(temp_dir.path())
        .args(["search", "mo.es"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust.md #3"));
}

#[test]
fn corrupted_store_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("flashdeck-files.json"), "{{ not json").unwrap();

    flashdeck(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No documents yet"));
}
