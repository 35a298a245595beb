use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rci, setup_test_db, test_home};

#[test]
fn test_init_writes_config_and_log() {
    let home = test_home("init_full");
    fs::remove_file(home.join("rcheckin.conf")).ok();
    let db_path = setup_test_db("init_full");

    rci("init_full")
        .args(["--db", &db_path, "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(home.join("rcheckin.conf").exists());

    rci("init_full")
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_config_check_and_migrate() {
    let home = test_home("config_migrate");
    fs::write(home.join("rcheckin.conf"), "database: /tmp/unused.sqlite\n").unwrap();

    rci("config_migrate")
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing field: default_profile"))
        .stdout(contains("Missing field: provider"));

    rci("config_migrate")
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added default values"));

    rci("config_migrate")
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete"));
}

#[test]
fn test_configured_denied_permission_is_used() {
    let home = test_home("config_denied");
    let db_path = setup_test_db("config_denied");
    fs::write(
        home.join("rcheckin.conf"),
        format!("database: {db_path}\nprovider:\n  permission: denied\n"),
    )
    .unwrap();

    rci("config_denied")
        .args(["checkin", "--confirm"])
        .assert()
        .success()
        .stdout(contains("Permission to access location was denied"));
}

#[test]
fn test_migrate_repairs_file_without_database() {
    let home = test_home("config_no_db");
    let conf = home.join("rcheckin.conf");
    fs::write(&conf, "color: false\n").unwrap();

    rci("config_no_db")
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing field: database"));

    rci("config_no_db")
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added default values"));

    let written = fs::read_to_string(&conf).unwrap();
    assert!(written.contains("database:"));
    assert!(written.contains("color: false"));
}

#[test]
fn test_migrate_fills_empty_file() {
    let home = test_home("config_empty");
    let conf = home.join("rcheckin.conf");
    fs::write(&conf, "").unwrap();

    rci("config_empty")
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing field: database"));

    rci("config_empty")
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added default values"));

    rci("config_empty")
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete"));
}

#[test]
fn test_no_color_flag_plain_messages() {
    let home = test_home("config_plain");
    fs::write(home.join("rcheckin.conf"), "color: true\n").unwrap();

    rci("config_plain")
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing field: database"))
        .stdout(contains("\u{1b}[").not());
}

#[test]
fn test_color_setting_applies_to_messages() {
    let home = test_home("config_color");
    let conf = home.join("rcheckin.conf");

    fs::write(&conf, "color: false\n").unwrap();
    cargo_bin_cmd!("rcheckin")
        .env("RCHECKIN_HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing field: database"))
        .stdout(contains("\u{1b}[").not());

    fs::write(&conf, "color: true\n").unwrap();
    cargo_bin_cmd!("rcheckin")
        .env("RCHECKIN_HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("\u{1b}["));
}
