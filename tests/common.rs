#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the real home directory and with
/// colours off so assertions can match plain text.
pub fn rci(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rcheckin");
    cmd.env("RCHECKIN_HOME", test_home(name))
        .env_remove("RCHECKIN_LOG")
        .arg("--no-color");
    cmd
}

/// Per-test configuration directory inside the system temp dir.
pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin_home", name));
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the diagnostics DB without writing a config file.
pub fn init_db(name: &str, db_path: &str) {
    rci(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
