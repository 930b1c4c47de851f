mod common;

use common::{init_db_with_data, setup_test_db, temp_out, wl};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"))
        .stdout(predicate::str::contains("2 migrations applied"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_init_twice_is_harmless() {
    let db_path = setup_test_db("init_twice");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries:").and(predicate::str::contains("3")));
}

#[test]
fn test_db_info_migrate_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-15"))
        .stdout(predicate::str::contains("2024-01-20"))
        .stdout(predicate::str::contains("11.5"));

    wl().args(["--db", &db_path, "--test", "db", "--migrate", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 applied"))
        .stdout(predicate::str::contains("Integrity check passed"));
}

#[test]
fn test_stats_categories() {
    let db_path = setup_test_db("stats_categories");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "--test", "stats", "--categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eng"))
        .stdout(predicate::str::contains("10.5"))
        .stdout(predicate::str::contains("5.3"))
        .stdout(predicate::str::contains("meetings"))
        .stdout(predicate::str::contains("WEEK").not());
}

#[test]
fn test_stats_weekly() {
    let db_path = setup_test_db("stats_weekly");
    init_db_with_data(&db_path);

    // 2024-01-15 (Mon) and 2024-01-20 (Sat) share Sunday-start week 02
    wl().args(["--db", &db_path, "--test", "stats", "--weekly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02"))
        .stdout(predicate::str::contains("11.5"))
        .stdout(predicate::str::contains("CATEGORY").not());
}

#[test]
fn test_stats_on_empty_database() {
    let db_path = setup_test_db("stats_empty");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "--test", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries recorded yet"))
        .stdout(predicate::str::contains("No categories recorded yet"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);
    let out = temp_out("export_json", "json");

    wl().args([
        "--db", &db_path, "--test", "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("JSON export completed"));

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["date"], "2024-01-20");
    assert_eq!(arr[0]["category"], "meetings");
    assert!(arr[0]["created_at"].is_string());
}

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv", "csv");

    wl().args([
        "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,date,hours,category,description,created_at"
    );
    assert_eq!(lines.count(), 3);
    assert!(content.contains("fix bug"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);
    let out = temp_out("export_force", "json");
    fs::write(&out, "keep me").unwrap();

    wl().args(["--db", &db_path, "--test", "export", "--file", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    wl().args(["--db", &db_path, "--test", "export", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwriting"));
    assert!(fs::read_to_string(&out).unwrap().contains("planning"));
}

#[test]
fn test_serve_rejects_invalid_bind_address() {
    let db_path = setup_test_db("serve_bad_bind");

    wl().args(["--db", &db_path, "--test", "serve", "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid bind address"));
}

#[test]
fn test_invalid_command_fails() {
    wl().arg("frobnicate").assert().failure();
}
