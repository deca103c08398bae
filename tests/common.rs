#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.sqlite", name));
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

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    wl().args(["--db", db_path, "--test", "init"]).assert().success();

    wl().args([
        "--db", db_path, "add", "2025-09-01", "--in", "09:00", "--out", "17:00", "--lunch", "30",
    ])
    .assert()
    .success();

    wl().args([
        "--db", db_path, "add", "2025-09-15", "--in", "09:00", "--out", "17:00", "--lunch", "30",
    ])
    .assert()
    .success();
}

/// Populate one full working week (Mon-Fri, 8h each) plus a named
/// holiday, directly via the library DB API.
pub fn populate_week_with_holiday(db_path: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    worklog::db::initialize::init_db(&conn).expect("init db");

    let start = chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let end = chrono::NaiveTime::from_hms_opt(17, 0, 0).unwrap();

    for day in 3..=7 {
        // 2025-03-03 is a Monday
        let date = chrono::NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        let entry = worklog::models::entry::TimeEntry::new(0, date, start, end, 60, false, None);
        worklog::db::queries::insert_entry(&conn, &entry).expect("insert entry");
    }

    let holiday = worklog::models::entry::TimeEntry::new(
        0,
        chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        start,
        end,
        0,
        true,
        Some("Araw ng Kagitingan".to_string()),
    );
    worklog::db::queries::insert_entry(&conn, &holiday).expect("insert holiday");
}
