mod common;
use common::{init_db_with_data, populate_week_with_holiday, setup_test_db, wl};
use predicates::prelude::*;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_shows_entry_and_weekly_total() {
    let db_path = setup_test_db("add_and_list");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-09-01"))
        .stdout(predicate::str::contains("7.50"))
        .stdout(predicate::str::contains("Weekly total"));
}

#[test]
fn test_add_holiday_renders_badge_and_dashes() {
    let db_path = setup_test_db("add_holiday");
    wl().args(["--db", &db_path, "--test", "init"]).assert().success();

    wl().args([
        "--db",
        &db_path,
        "add",
        "2025-01-29",
        "--holiday",
        "--name",
        "Chinese New Year",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Chinese New Year"));

    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chinese New Year"))
        .stdout(predicate::str::contains("-"));
}

#[test]
fn test_add_rejects_invalid_date() {
    let db_path = setup_test_db("add_invalid_date");
    wl().args(["--db", &db_path, "--test", "init"]).assert().success();

    wl().args([
        "--db", &db_path, "add", "29-01-2025", "--in", "08:00", "--out", "17:00",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_add_rejects_end_before_start() {
    let db_path = setup_test_db("add_end_before_start");
    wl().args(["--db", &db_path, "--test", "init"]).assert().success();

    wl().args([
        "--db", &db_path, "add", "2025-01-29", "--in", "17:00", "--out", "08:00",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("must be after"));
}

#[test]
fn test_add_rejects_negative_lunch() {
    let db_path = setup_test_db("add_negative_lunch");
    wl().args(["--db", &db_path, "--test", "init"]).assert().success();

    wl().args([
        "--db", &db_path, "add", "2025-01-29", "--in", "08:00", "--out", "17:00", "--lunch",
        "-30",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Lunch break"));
}

#[test]
fn test_add_requires_times_for_working_entry() {
    let db_path = setup_test_db("add_missing_times");
    wl().args(["--db", &db_path, "--test", "init"]).assert().success();

    wl().args(["--db", &db_path, "add", "2025-01-29"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing --in"));
}

#[test]
fn test_checkin_records_today() {
    let db_path = setup_test_db("checkin_records_today");
    wl().args(["--db", &db_path, "--test", "init"]).assert().success();

    wl().args(["--db", &db_path, "checkin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded session"));

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(today));
}

#[test]
fn test_report_on_empty_database() {
    let db_path = setup_test_db("report_empty");
    wl().args(["--db", &db_path, "--test", "init"]).assert().success();

    wl().args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.00 hrs"))
        .stdout(predicate::str::contains("300.00 hrs"))
        .stdout(predicate::str::contains("38 days"))
        .stdout(predicate::str::contains("0%"));
}

#[test]
fn test_report_after_full_week() {
    let db_path = setup_test_db("report_full_week");
    populate_week_with_holiday(&db_path);

    wl().args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("40.00 hrs"))
        .stdout(predicate::str::contains("260.00 hrs"))
        .stdout(predicate::str::contains("5 days"))
        .stdout(predicate::str::contains("33 days"))
        .stdout(predicate::str::contains("Leave days"));
}

#[test]
fn test_list_empty_database() {
    let db_path = setup_test_db("list_empty");
    wl().args(["--db", &db_path, "--test", "init"]).assert().success();

    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_rejects_bad_period() {
    let db_path = setup_test_db("list_bad_period");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "list", "--period", "september"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("internal_log");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("Recorded"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info_check");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries"))
        .stdout(predicate::str::contains("2"));

    wl().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("integrity check passed"));
}
