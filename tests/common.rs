#![allow(dead_code)]
use activitylog::models::ActivityRecord;
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn alog() -> Command {
    cargo_bin_cmd!("activitylog")
}

/// Unique data file path inside the system temp dir; any previous data
/// file or journal with the same name is removed.
pub fn setup_data_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_activitylog.csv", name));
    fs::remove_file(&path).ok();
    fs::remove_file(path.with_extension("log")).ok();
    path.to_string_lossy().to_string()
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn journal_of(data_file: &str) -> PathBuf {
    activitylog::store::RecordStore::new(data_file).journal_path()
}

pub fn add_activity(data_file: &str, date: &str, hours: &str, title: &str, description: &str) {
    alog()
        .args([
            "--data",
            data_file,
            "add",
            "--date",
            date,
            "--hours",
            hours,
            "--title",
            title,
            "--description",
            description,
        ])
        .assert()
        .success();
}

/// Three activities over two days:
/// 2024-01-01 2.0 / 2024-01-01 3.5 / 2024-01-02 1.0
pub fn seed(data_file: &str) {
    add_activity(data_file, "2024-01-01", "2", "Standup", "Daily sync");
    add_activity(data_file, "2024-01-01", "3.5", "Review", "Reviewed the parser PR");
    add_activity(data_file, "2024-01-02", "1", "Docs", "Updated the README");
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn rec(date: NaiveDate, hours: f64, title: &str) -> ActivityRecord {
    ActivityRecord::new(date, hours, title, format!("{title} description"))
}
