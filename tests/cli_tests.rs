// Integration tests for the taskman binary
// These drive the interactive menu end-to-end through stdin

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use std::fs;

/// Helper to create a new command running inside a temporary home/work directory
fn new_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskman").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(temp_dir.path());
    cmd
}

#[test]
fn test_exit_option() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task Manager Menu"))
        .stdout(predicate::str::contains("7. Exit"))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn test_default_database_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir).write_stdin("7\n").assert().success();

    assert!(temp_dir.path().join("tasks.db").exists());
}

#[test]
fn test_add_and_view_all() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("1\nBuy milk\n\n1\nPay rent\n\"2026-02-01\"\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added successfully!"))
        .stdout(predicate::str::contains("All Tasks:"))
        .stdout(predicate::str::contains(
            "ID: 1, Description: Buy milk, Deadline: N/A, Status: pending",
        ))
        .stdout(predicate::str::contains(
            "ID: 2, Description: Pay rent, Deadline: 2026-02-01, Status: pending",
        ));
}

#[test]
fn test_add_empty_description() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("1\n\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task description cannot be empty."))
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_view_pending_and_completed() {
    let temp_dir = TempDir::new().unwrap();

    // A, B, C added; B marked completed
    let script = "1\nA\n\n1\nB\n\n1\nC\n\n5\n2\n\n\ncompleted\n3\n4\n7\n";
    new_cmd(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Pending Tasks:\nID: 1, Description: A, Deadline: N/A\nID: 3, Description: C, Deadline: N/A\n",
        ))
        .stdout(predicate::str::contains(
            "Completed Tasks:\nID: 2, Description: B, Deadline: N/A\n",
        ));
}

#[test]
fn test_update_invalid_status() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("1\nOriginal\n\n5\n1\nRenamed\n\narchived\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid status! Task not updated."))
        .stdout(predicate::str::contains("Description: Original"))
        .stdout(predicate::str::contains("Renamed").not());
}

#[test]
fn test_delete_nonexistent_task() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("1\nOnly task\n\n6\n9999\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task not found."))
        .stdout(predicate::str::contains("Description: Only task"));
}

#[test]
fn test_delete_task() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("1\nDoomed\n\n6\n1\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task deleted successfully!"))
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_invalid_option() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("abc\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option. Please try again."));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("1\nUnfinished\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added successfully!"));
}

#[test]
fn test_restart_discards_tasks() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("1\nFrom first run\n\n7\n")
        .assert()
        .success();

    new_cmd(&temp_dir)
        .write_stdin("2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."))
        .stdout(predicate::str::contains("From first run").not());
}

#[test]
fn test_keep_preserves_tasks() {
    let temp_dir = TempDir::new().unwrap();

    new_cmd(&temp_dir)
        .write_stdin("1\nFrom first run\n\n7\n")
        .assert()
        .success();

    new_cmd(&temp_dir)
        .arg("--keep")
        .write_stdin("2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Description: From first run"));
}

#[test]
fn test_storage_errors_only_on_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("stale.db");
    {
        // table from an older layout: no deadline or status columns
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute("CREATE TABLE tasks (id INTEGER PRIMARY KEY, description TEXT)", [])
            .unwrap();
    }

    new_cmd(&temp_dir)
        .arg("--db")
        .arg(&db_path)
        .arg("--keep")
        .write_stdin("1\nBuy milk\n\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error adding task: "))
        .stdout(predicate::str::contains("Error fetching tasks: "))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_db_flag() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("data").join("custom.db");

    new_cmd(&temp_dir)
        .arg("--db")
        .arg(&db_path)
        .write_stdin("7\n")
        .assert()
        .success();

    assert!(db_path.exists());
    assert!(!temp_dir.path().join("tasks.db").exists());
}

#[test]
fn test_rc_data_location() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".taskman");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("rc"), "data.location=ledger.db\n").unwrap();

    new_cmd(&temp_dir).write_stdin("7\n").assert().success();

    assert!(config_dir.join("ledger.db").exists());
    assert!(!temp_dir.path().join("tasks.db").exists());
}

#[test]
fn test_open_failure_exits_with_code_1() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "plain file").unwrap();

    new_cmd(&temp_dir)
        .arg("--db")
        .arg(blocker.join("tasks.db"))
        .write_stdin("7\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Database connection error:"))
        .stdout(predicate::str::contains("Task Manager Menu").not());
}

#[test]
fn test_corrupt_database_is_unexpected_error() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("garbage.db");
    fs::write(&db_path, vec![b'x'; 4096]).unwrap();

    new_cmd(&temp_dir)
        .arg("--db")
        .arg(&db_path)
        .write_stdin("7\n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unexpected error:"))
        .stderr(predicate::str::contains("Failed to reset database schema"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("taskman")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
