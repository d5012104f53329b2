use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/content_letter_soup.txt";

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("letter_soup");
    cmd.env_remove("RUST_LOG").env_remove("LETTER_SOUP_DEBUG");
    cmd
}

#[test]
fn writes_report_file() {
    let tmp = TempDir::new().expect("create temp dir");
    let out = tmp.path().join("result.json");

    cmd()
        .arg(FIXTURE)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Report saved at:"));

    let expected = fs::read_to_string("tests/fixtures/content_letter_soup.expected.json").unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), expected);
}

#[test]
fn overwrites_existing_output() {
    let tmp = TempDir::new().expect("create temp dir");
    let out = tmp.path().join("result.json");
    fs::write(&out, "old").unwrap();

    cmd().arg(FIXTURE).arg("-o").arg(&out).assert().success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["rust"], true);
    assert_eq!(json["Moon"], false);
}

#[test]
fn stdout_mode_prints_json_in_word_order() {
    let output = cmd().args([FIXTURE, "--stdout"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let rust = stdout.find("\"rust\"").unwrap();
    let paris = stdout.find("\"Paris\"").unwrap();
    let cargo = stdout.find("\"cargo\"").unwrap();
    assert!(rust < paris && paris < cargo);
}

#[test]
fn summary_lists_words_on_stderr() {
    cmd()
        .args([FIXTURE, "--stdout", "--summary"])
        .assert()
        .success()
        .stderr(contains("two: found"))
        .stderr(contains("dog: not found"));
}

#[test]
fn custom_separator() {
    let tmp = TempDir::new().expect("create temp dir");
    let input = tmp.path().join("puzzle.txt");
    fs::write(&input, "A B\nC D\n***\nAD\nBC\n").unwrap();

    cmd()
        .arg(&input)
        .args(["--separator", "***", "--stdout"])
        .assert()
        .success()
        .stdout(contains("\"AD\": true"))
        .stdout(contains("\"BC\": true"));
}

#[test]
fn ragged_grid_fails_with_code() {
    cmd()
        .args(["tests/fixtures/ragged.txt", "--stdout"])
        .assert()
        .failure()
        .stderr(contains("P002"))
        .stderr(contains("G002"));
}

#[test]
fn missing_separator_fails_with_help() {
    cmd()
        .args(["tests/fixtures/no_separator.txt", "--stdout"])
        .assert()
        .failure()
        .stderr(contains("P001"))
        .stderr(contains("---"));
}

#[test]
fn missing_input_file_fails() {
    cmd()
        .args(["tests/fixtures/nope.txt", "--stdout"])
        .assert()
        .failure()
        .stderr(contains("failed to read puzzle"));
}

#[test]
fn version_includes_commit_hash() {
    let output = cmd().arg("--version").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = format!("letter_soup {} (", env!("CARGO_PKG_VERSION"));
    assert!(stdout.starts_with(&expected), "unexpected version line: {stdout}");
    assert!(stdout.trim_end().ends_with(')'), "unexpected version line: {stdout}");
}
