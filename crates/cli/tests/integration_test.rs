//! End-to-end tests for the `line_tally` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn line_tally() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_line_tally"));
    cmd.env_remove("ACK_FH").env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    line_tally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("line_tally"))
        .stdout(predicate::str::contains("ACK_FH"));
}

#[test]
fn counts_most_common_first() {
    line_tally()
        .write_stdin("a\nb\na\nc\nb\na\n")
        .assert()
        .success()
        .stdout("a 3\nb 2\nc 1\n");
}

#[test]
fn empty_input_produces_no_output() {
    line_tally().write_stdin("").assert().success().stdout("");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    line_tally()
        .write_stdin("  x  \nx\nx \n")
        .assert()
        .success()
        .stdout("x 3\n");
}

#[test]
fn information_separators_are_stripped() {
    line_tally()
        .write_stdin("a\n\u{1f}a\u{1c}\n")
        .assert()
        .success()
        .stdout("a 2\n");
}

#[test]
fn blank_line_is_empty_key() {
    line_tally()
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(" 1\n");
}

#[test]
fn final_line_without_newline_is_counted() {
    line_tally()
        .write_stdin("a\nb\nb")
        .assert()
        .success()
        .stdout("b 2\na 1\n");
}

#[test]
fn ties_follow_first_appearance() {
    line_tally()
        .write_stdin("z\ny\ny\nz\nx\n")
        .assert()
        .success()
        .stdout("z 2\ny 2\nx 1\n");
}

#[test]
fn env_sink_receives_verbatim_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("acks.log");
    let input = "  x  \r\nx\n\nx ";

    line_tally()
        .env("ACK_FH", &path)
        .write_stdin(input)
        .assert()
        .success()
        .stdout("x 3\n 1\n");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), input);
}

#[test]
fn flag_overrides_env_sink() {
    let dir = tempdir().unwrap();
    let from_env = dir.path().join("env.log");
    let from_flag = dir.path().join("flag.log");

    line_tally()
        .env("ACK_FH", &from_env)
        .arg("--ack-file")
        .arg(&from_flag)
        .write_stdin("a\n")
        .assert()
        .success();

    assert!(!from_env.exists());
    assert_eq!(std::fs::read_to_string(&from_flag).unwrap(), "a\n");
}

#[test]
fn sink_is_truncated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("acks.log");
    std::fs::write(&path, "old run\nold run\n").unwrap();

    line_tally()
        .env("ACK_FH", &path)
        .write_stdin("new\n")
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
}

#[test]
fn empty_env_discards_without_creating_files() {
    let dir = tempdir().unwrap();

    line_tally()
        .current_dir(dir.path())
        .env("ACK_FH", "")
        .write_stdin("a\n")
        .assert()
        .success()
        .stdout("a 1\n");

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unset_env_leaves_no_files_behind() {
    let dir = tempdir().unwrap();

    line_tally()
        .current_dir(dir.path())
        .write_stdin("a\na\n")
        .assert()
        .success()
        .stdout("a 2\n")
        .stderr("");

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unopenable_sink_fails_before_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("acks.log");

    line_tally()
        .env("ACK_FH", &path)
        .write_stdin("a\n")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("acknowledgment sink"));
}

#[test]
fn tsv_format() {
    line_tally()
        .args(["--format", "tsv"])
        .write_stdin("a\nb\nb\n")
        .assert()
        .success()
        .stdout("b\t2\na\t1\n");
}

#[test]
fn json_format() {
    let output = line_tally()
        .args(["--format", "json"])
        .write_stdin("a\nb\nb\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "key": "b", "count": 2 },
            { "key": "a", "count": 1 }
        ])
    );
}

#[test]
fn unknown_flag_is_usage_error() {
    line_tally()
        .arg("--top")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    line_tally()
        .arg("-vv")
        .write_stdin("a\n")
        .assert()
        .success()
        .stdout("a 1\n")
        .stderr(predicate::str::contains("input exhausted"));
}
