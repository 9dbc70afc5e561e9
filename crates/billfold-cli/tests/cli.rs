//! End-to-end tests for the billfold binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn billfold() -> Command {
    Command::cargo_bin("billfold").unwrap()
}

#[test]
fn parse_english_receipt_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    std::fs::write(&input, "TOTAL: $42.50\nStarbucks\n01/15/2024\n").unwrap();

    billfold()
        .args([
            "parse",
            input.to_str().unwrap(),
            "--language",
            "eng",
            "--confidence",
            "80",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("42.50"))
        .stdout(predicate::str::contains("2024-01-15"))
        .stdout(predicate::str::contains("Dining Out"));
}

#[test]
fn parse_falls_back_to_reference_date() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    std::fs::write(&input, "nothing useful here\n").unwrap();

    billfold()
        .args([
            "parse",
            input.to_str().unwrap(),
            "--reference-date",
            "2024-06-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-01"))
        .stdout(predicate::str::contains("Miscellaneous"));
}

#[test]
fn parse_text_format_summarizes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    std::fs::write(&input, "Gesamtbetrag: 15,50€\nEDEKA\n12.03.2024\n").unwrap();

    billfold()
        .args([
            "parse",
            input.to_str().unwrap(),
            "--language",
            "deu",
            "--format",
            "text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category:    Groceries"))
        .stdout(predicate::str::contains("2024-03-12"));
}

#[test]
fn parse_rejects_unknown_language() {
    billfold()
        .args(["parse", "whatever.txt", "--language", "pol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language code"));
}

#[test]
fn parse_fails_on_missing_input() {
    billfold()
        .args(["parse", "/no/such/file.txt"])
        .assert()
        .failure();
}

#[test]
fn categories_lists_every_category() {
    billfold()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Dining Out"))
        .stdout(predicate::str::contains("Miscellaneous"));
}

#[test]
fn batch_writes_per_file_json() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    std::fs::write(dir.path().join("a.txt"), "TOTAL: $10.00\n").unwrap();
    std::fs::write(dir.path().join("b.txt"), "TOTAL: $20.00\n").unwrap();

    let pattern = format!("{}/*.txt", dir.path().display());
    billfold()
        .args([
            "batch",
            pattern.as_str(),
            "--output-dir",
            out.to_str().unwrap(),
            "--reference-date",
            "2024-06-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 parsed"));

    let a = std::fs::read_to_string(out.join("a.json")).unwrap();
    assert!(a.contains("10.00"));
    let b = std::fs::read_to_string(out.join("b.json")).unwrap();
    assert!(b.contains("20.00"));
}

#[test]
fn config_show_prints_effective_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"digital_text_confidence": 90.0}"#).unwrap();

    billfold()
        .args(["config", "show", "--config", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"digital_text_confidence\": 90.0"))
        .stdout(predicate::str::contains("\"low_confidence_threshold\": 50.0"));
}
