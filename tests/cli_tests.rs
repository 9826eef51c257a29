use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_activity, alog, journal_of, seed, setup_data_file};

#[test]
fn test_init_creates_data_file_with_header() {
    let data = setup_data_file("cli_init");

    alog()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Data file created"));

    let content = fs::read_to_string(&data).expect("data file");
    assert_eq!(content, "Date,Hours,Title,Description\n");

    // second run leaves the file alone
    alog()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("left untouched"));
}

#[test]
fn test_add_then_list() {
    let data = setup_data_file("cli_add_list");
    seed(&data);

    alog()
        .args(["--data", &data, "list"])
        .assert()
        .success()
        .stdout(contains("01/01/2024"))
        .stdout(contains("Standup"))
        .stdout(contains("Reviewed the parser PR"))
        .stdout(contains("#3"));

    let content = fs::read_to_string(&data).expect("data file");
    assert!(content.contains("2024-01-01,3.5,Review,Reviewed the parser PR"));
}

#[test]
fn test_list_range_filters_records() {
    let data = setup_data_file("cli_list_range");
    seed(&data);

    alog()
        .args(["--data", &data, "list", "--range", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("Docs"))
        .stdout(contains("Standup").not());
}

#[test]
fn test_add_rejects_incomplete_form() {
    let data = setup_data_file("cli_add_invalid");
    seed(&data);
    let before = fs::read(&data).expect("read");

    alog()
        .args(["--data", &data, "add", "--hours", "2", "--title", "No description"])
        .assert()
        .failure()
        .stdout(contains("Fill in all fields correctly"))
        .stdout(contains("description"))
        .stderr(contains("Error:").not());

    alog()
        .args([
            "--data",
            &data,
            "add",
            "--title",
            "t",
            "--description",
            "d",
        ])
        .assert()
        .failure()
        .stdout(contains("hours"));

    assert_eq!(fs::read(&data).expect("read"), before);
}

#[test]
fn test_add_rejects_bad_date() {
    let data = setup_data_file("cli_add_bad_date");

    alog()
        .args([
            "--data",
            &data,
            "add",
            "--date",
            "01/02/2024",
            "--hours",
            "1",
            "--title",
            "t",
            "--description",
            "d",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_edit_changes_only_given_fields() {
    let data = setup_data_file("cli_edit");
    seed(&data);

    alog()
        .args(["--data", &data, "edit", "2", "--hours", "4"])
        .assert()
        .success()
        .stdout(contains("Activity #2 updated"));

    let content = fs::read_to_string(&data).expect("data file");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[2], "2024-01-01,4.0,Review,Reviewed the parser PR");
    assert_eq!(lines[1], "2024-01-01,2.0,Standup,Daily sync");
}

#[test]
fn test_edit_unknown_number_fails() {
    let data = setup_data_file("cli_edit_unknown");
    seed(&data);

    alog()
        .args(["--data", &data, "edit", "9", "--title", "x"])
        .assert()
        .failure()
        .stderr(contains("No activity at position 8"));

    alog()
        .args(["--data", &data, "edit", "0", "--title", "x"])
        .assert()
        .failure();
}

#[test]
fn test_delete_with_confirmation() {
    let data = setup_data_file("cli_del_confirm");
    seed(&data);

    // declined
    alog()
        .args(["--data", &data, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));
    assert_eq!(fs::read_to_string(&data).expect("read").lines().count(), 4);

    // confirmed
    alog()
        .args(["--data", &data, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Activity 'Standup' removed"));

    let content = fs::read_to_string(&data).expect("read");
    assert_eq!(content.lines().count(), 3);
    assert!(!content.contains("Standup"));
}

#[test]
fn test_delete_shifts_numbers() {
    let data = setup_data_file("cli_del_shift");
    seed(&data);

    alog()
        .args(["--data", &data, "del", "2", "--yes"])
        .assert()
        .success();

    // former #3 is now #2
    alog()
        .args(["--data", &data, "del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("Activity 'Docs' removed"));

    let content = fs::read_to_string(&data).expect("read");
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("Standup"));
}

#[test]
fn test_summary_shows_totals_and_chart() {
    let data = setup_data_file("cli_summary");
    seed(&data);

    alog()
        .args(["--data", &data, "summary"])
        .assert()
        .success()
        .stdout(contains("01/01/2024"))
        .stdout(contains("5.5h"))
        .stdout(contains("02/01/2024"))
        .stdout(contains("Total: 6.5h"))
        .stdout(contains("│"));

    alog()
        .args(["--data", &data, "summary", "--no-chart"])
        .assert()
        .success()
        .stdout(contains("│").not());
}

#[test]
fn test_summary_on_empty_log() {
    let data = setup_data_file("cli_summary_empty");

    alog()
        .args(["--data", &data, "summary"])
        .assert()
        .success()
        .stdout(contains("No activities recorded to compute hours"));
}

#[test]
fn test_text_view() {
    let data = setup_data_file("cli_text");
    seed(&data);

    alog()
        .args(["--data", &data, "text"])
        .assert()
        .success()
        .stdout(contains("01/01/2024 | 2 | Standup | Daily sync"))
        .stdout(contains("01/01/2024 | 3 | Review | Reviewed the parser PR"))
        .stdout(contains("02/01/2024 | 1 | Docs | Updated the README"));
}

#[test]
fn test_log_print_lists_operations() {
    let data = setup_data_file("cli_log");
    add_activity(&data, "2024-06-01", "1.5", "Planning", "Sprint planning");

    alog()
        .args(["--data", &data, "del", "1", "--yes"])
        .assert()
        .success();

    assert!(journal_of(&data).exists());

    alog()
        .args(["--data", &data, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"))
        .stdout(contains("del"))
        .stdout(contains("Planning"));
}
