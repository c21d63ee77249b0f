use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn file_with(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

fn spellward() -> Command {
    Command::cargo_bin("spellward").unwrap()
}

#[test]
fn test_misspelling_reported_with_suggestions() {
    let dict = file_with("hello\nhelp\nworld\n");
    let text = file_with("helo there");

    spellward()
        .arg(dict.path())
        .arg(text.path())
        .arg("--no-color")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("helo"))
        .stdout(predicate::str::contains("hello"))
        .stdout(predicate::str::contains("help"));
}

#[test]
fn test_clean_document_passes() {
    let dict = file_with("hello\nworld\n");
    let text = file_with("hello world\nworld hello");

    spellward()
        .arg(dict.path())
        .arg(text.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("No spelling errors found"));
}

#[test]
fn test_no_fail_keeps_exit_code_zero() {
    let dict = file_with("hello\n");
    let text = file_with("helo");

    spellward()
        .arg(dict.path())
        .arg(text.path())
        .arg("--no-color")
        .arg("--no-fail")
        .assert()
        .success();
}

#[test]
fn test_json_output() {
    let dict = file_with("cat\n");
    let text = file_with("bat");

    spellward()
        .arg(dict.path())
        .arg(text.path())
        .arg("--format")
        .arg("json")
        .arg("--no-fail")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word\": \"bat\""))
        .stdout(predicate::str::contains("\"cat\""));
}

#[test]
fn test_empty_dictionary_is_hard_failure() {
    let dict = file_with("\n!!!\n12345\n");
    let text = file_with("anything");

    spellward()
        .arg(dict.path())
        .arg(text.path())
        .arg("--no-color")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no valid words"));
}

#[test]
fn test_proper_noun_skipped_by_default() {
    let dict = file_with("went\nto\n");
    let text = file_with("went to Portland");

    spellward()
        .arg(dict.path())
        .arg(text.path())
        .arg("--no-color")
        .assert()
        .success();

    spellward()
        .arg(dict.path())
        .arg(text.path())
        .arg("--no-color")
        .arg("--include-proper-nouns")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("portland"));
}
