//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary, isolated from any user config and run inside `dir`.
fn leetcoach(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("leetcoach").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("LEETCOACH_PROGRESS_FILE")
        .env_remove("LEETCOACH_OFFLINE")
        .env_remove("RUST_LOG");
    cmd
}

fn read_progress(dir: &TempDir) -> serde_json::Value {
    let content = std::fs::read_to_string(dir.path().join("progress.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    leetcoach(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coding-interview practice coach"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    leetcoach(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("leetcoach"));
}

#[test]
fn offline_topics_then_quit() {
    let dir = TempDir::new().unwrap();
    leetcoach(&dir)
        .arg("--offline")
        .write_stdin("topics\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Commands: assess, topics, practice, interview, progress, quit",
        ))
        .stdout(predicate::str::contains(" - arrays\n - linked-lists\n - stack"));

    assert!(!dir.path().join("progress.json").exists());
}

#[test]
fn unknown_command_reprompts() {
    let dir = TempDir::new().unwrap();
    leetcoach(&dir)
        .arg("--offline")
        .write_stdin("dance\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command"))
        .stdout(predicate::str::contains("Choose command: ").count(2));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    leetcoach(&dir)
        .arg("--offline")
        .write_stdin("progress\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Problems solved: 0"));
}

#[test]
fn practice_persists_progress() {
    let dir = TempDir::new().unwrap();
    leetcoach(&dir)
        .arg("--offline")
        .write_stdin("practice\narrays\ny\nn\n\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Two Sum (easy) ---"))
        .stdout(predicate::str::contains("Hint 1: Can you do it in one pass?"))
        .stdout(predicate::str::contains("Hint 2:").not())
        .stdout(predicate::str::contains("Solution:"));

    assert_eq!(read_progress(&dir), serde_json::json!({"Two Sum": true}));

    leetcoach(&dir)
        .arg("--offline")
        .write_stdin("practice\n\nn\n\nprogress\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Contains Duplicate (easy) ---"))
        .stdout(predicate::str::contains("Problems solved: 2"));
}

#[test]
fn assess_is_recorded_once() {
    let dir = TempDir::new().unwrap();
    leetcoach(&dir)
        .arg("--offline")
        .write_stdin("assess\nbeginner\nassess\nadvanced\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skill level recorded as beginner."));

    assert_eq!(
        read_progress(&dir),
        serde_json::json!({"skill_level": "beginner"})
    );
}

#[test]
fn interview_reviews_code() {
    let dir = TempDir::new().unwrap();
    leetcoach(&dir)
        .arg("--offline")
        .write_stdin("interview\n\nreturn []\n\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Mock Interview ---"))
        .stdout(predicate::str::contains("You took"))
        .stdout(predicate::str::contains("Your solution seems short"))
        .stdout(predicate::str::contains("Nested loops").not())
        .stdout(predicate::str::contains("Expected Time Complexity: O(n)"));

    assert_eq!(read_progress(&dir), serde_json::json!({"Two Sum": true}));
}

#[test]
fn progress_file_flag_is_honored() {
    let dir = TempDir::new().unwrap();
    leetcoach(&dir)
        .arg("--offline")
        .arg("--progress-file")
        .arg("state/coach.json")
        .write_stdin("practice\nstack\nn\n\nquit\n")
        .assert()
        .success();

    let saved = std::fs::read_to_string(dir.path().join("state/coach.json")).unwrap();
    assert!(saved.contains("\"Valid Parentheses\": true"));
}

#[test]
fn config_file_disables_network_and_sets_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("leetcoach.toml"),
        "progress_file = \"from-config.json\"\n\n[curriculum]\nenabled = false\n",
    )
    .unwrap();

    leetcoach(&dir)
        .write_stdin("assess\nintermediate\nquit\n")
        .assert()
        .success();

    assert!(dir.path().join("from-config.json").exists());
}

#[test]
fn corrupt_progress_file_fails_fast() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("progress.json"), "{\"Two Sum\": tru").unwrap();

    leetcoach(&dir)
        .arg("--offline")
        .write_stdin("quit\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("corrupt"));

    let untouched = std::fs::read_to_string(dir.path().join("progress.json")).unwrap();
    assert_eq!(untouched, "{\"Two Sum\": tru");
}

#[test]
fn logging_is_quiet_by_default() {
    let dir = TempDir::new().unwrap();
    leetcoach(&dir)
        .arg("--offline")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("progress opened").not());
}

#[test]
fn rust_log_raises_the_level() {
    let dir = TempDir::new().unwrap();
    leetcoach(&dir)
        .arg("--offline")
        .env("RUST_LOG", "leetcoach=debug")
        .write_stdin("practice\nstack\nn\n\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("progress opened"))
        .stderr(predicate::str::contains("saved progress"))
        .stdout(predicate::str::contains("progress opened").not());
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    leetcoach(&dir)
        .arg("--config")
        .arg("nope.toml")
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
