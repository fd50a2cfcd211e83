//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn exam() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("exam").unwrap();
    cmd.env_remove("EXAM_BANK_PATH").env_remove("EXAM_STRICT_BANK");
    cmd
}

fn seeded() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("data").join("bank.json");
    exam()
        .arg("seed")
        .arg("--out")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote demo question bank"));
    (dir, bank)
}

fn with_bank(bank: &Path) -> Command {
    let mut cmd = exam();
    cmd.arg("--bank").arg(bank);
    cmd
}

#[test]
fn subjects_lists_only_subjects_with_questions() {
    let (_dir, bank) = seeded();
    with_bank(&bank)
        .arg("subjects")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mathematics"))
        .stdout(predicate::str::contains("Computer Science"));
}

#[test]
fn topics_show_slugs_and_counts() {
    let (_dir, bank) = seeded();
    with_bank(&bank)
        .args(["topics", "--subject", "Computer Science"])
        .assert()
        .success()
        .stdout(predicate::str::contains("summary/data-structures"))
        .stdout(predicate::str::contains("Compilers"))
        .stdout(predicate::str::contains("Algebra").not());
}

#[test]
fn books_lists_linked_topics() {
    let (_dir, bank) = seeded();
    with_bank(&bank)
        .arg("books")
        .assert()
        .success()
        .stdout(predicate::str::contains("Euclid"))
        .stdout(predicate::str::contains("principia.pdf"));
}

#[test]
fn read_titles_named_topic_with_author() {
    let (_dir, bank) = seeded();
    with_bank(&bank)
        .args(["read", "--subject", "Physics", "--topic", "Mechanics", "--show-answers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mechanics (Isaac Newton)"))
        .stdout(predicate::str::contains(" * 2) Newton"));
}

#[test]
fn check_passes_on_demo_bank() {
    let (_dir, bank) = seeded();
    with_bank(&bank)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All questions valid."));
}

#[test]
fn check_fails_on_bad_answer_and_strict_load_refuses() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("bad.json");
    std::fs::write(
        &bank,
        r#"{"syllabus":[{"subject":"S","topics":[{"name":"T","author":"A","bookLink":null,
        "questions":[{"id":7,"question":"Q","options":["x","y"],"answer":"z"}]}]}]}"#,
    )
    .unwrap();

    with_bank(&bank)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("[S/T #7]"))
        .stderr(predicate::str::contains("1 malformed question(s) found"));

    with_bank(&bank).arg("subjects").assert().success();
    with_bank(&bank).args(["--strict", "subjects"]).assert().failure();
}

#[test]
fn missing_bank_is_an_error() {
    let dir = TempDir::new().unwrap();
    with_bank(&dir.path().join("absent.json"))
        .arg("subjects")
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading question bank"));
}

#[test]
fn interactive_test_submits_and_reports() {
    let (_dir, bank) = seeded();
    with_bank(&bank)
        .args(["test", "--subject", "Mathematics", "--topic", "Algebra"])
        .write_stdin("2\nn\n9\ns\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mathematics - Algebra"))
        .stdout(predicate::str::contains("33%"))
        .stdout(predicate::str::contains("1. Solve for x: 2x + 3 = 7 [Correct]"))
        .stdout(predicate::str::contains("[Unattempted]"));
}

#[test]
fn submit_requires_an_answer_and_eof_abandons() {
    let (_dir, bank) = seeded();
    with_bank(&bank)
        .args(["test", "--subject", "Physics", "--questions", "1"])
        .write_stdin("s\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Answer at least one question"))
        .stdout(predicate::str::contains("Test abandoned."));
}

#[test]
fn test_on_empty_topic_fails() {
    let (_dir, bank) = seeded();
    with_bank(&bank)
        .args(["test", "--subject", "Computer Science", "--topic", "Compilers"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no questions available"));
}

#[test]
fn zero_questions_is_rejected_before_starting() {
    let (_dir, bank) = seeded();
    with_bank(&bank)
        .args(["test", "--subject", "Physics", "--questions", "0"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("number of questions must be at least 1"));
}
