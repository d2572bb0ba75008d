#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rst() -> Command {
    cargo_bin_cmd!("rschooltimer")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rschooltimer.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and store a small Monday timetable useful for many tests
///
/// Monday ends up with:
///   Homeroom 08:40-09:00 (OTHER)
///   Period 1 09:00-09:50 (CLASS)
///   Period 2 10:00-10:50 (CLASS)   <- note the 09:50-10:00 gap
pub fn init_db_with_schedule(db_path: &str) {
    rst()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rst()
        .args([
            "--db", db_path, "add", "--day", "1", "--name", "Homeroom", "--start", "08:40",
            "--end", "09:00", "--kind", "OTHER",
        ])
        .assert()
        .success();

    rst()
        .args([
            "--db", db_path, "add", "--day", "1", "--name", "Period 1", "--start", "09:00",
            "--end", "09:50", "--kind", "CLASS",
        ])
        .assert()
        .success();

    rst()
        .args([
            "--db", db_path, "add", "--day", "1", "--name", "Period 2", "--start", "10:00",
            "--end", "10:50", "--kind", "CLASS",
        ])
        .assert()
        .success();
}
