#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
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

/// Add one entry row through the CLI.
pub fn add_entry(db_path: &str, date: &str, user: &str, team: &str, loc: &str, seconds: i64) {
    rts()
        .args([
            "--db", db_path, "--test", "add", date, "--user-id", "1", "--user", user, "--team",
            team, "--loc", loc, "--seconds",
        ])
        .arg(seconds.to_string())
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    rts()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // two users, one team, two days in September 2025
    add_entry(db_path, "2025-09-01", "ann", "Alpha", "on-site", 28800);
    add_entry(db_path, "2025-09-02", "ann", "Alpha", "off-site", 27000);
    add_entry(db_path, "2025-09-01", "bob", "Alpha", "on-site", 30600);
}
