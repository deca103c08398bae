mod common;
use common::{init_db_with_data, populate_week_with_holiday, setup_test_db, temp_out, wl};
use std::fs;

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("total_hours"));
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
    assert!(content.contains("7.50")); // 09:00-17:00 minus 30 min lunch
}

#[test]
fn test_export_json_range() {
    let db_path = setup_test_db("export_json_range");
    init_db_with_data(&db_path);

    // Add one entry outside the requested range.
    wl().args([
        "--db", &db_path, "add", "2025-10-01", "--in", "09:00", "--out", "17:00", "--lunch",
        "30",
    ])
    .assert()
    .success();

    let out = temp_out("export_json_range", "json");

    wl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2025-09",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
    assert!(!content.contains("2025-10-01"));
}

#[test]
fn test_export_csv_holiday_row() {
    let db_path = setup_test_db("export_csv_holiday");
    populate_week_with_holiday(&db_path);

    let out = temp_out("export_csv_holiday", "csv");

    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Araw ng Kagitingan"));

    // Holiday rows export "-" cells, never a zero duration.
    let holiday_line = content
        .lines()
        .find(|l| l.contains("Araw ng Kagitingan"))
        .expect("holiday row present");
    assert!(holiday_line.contains("-"));
}

#[test]
fn test_export_xlsx_creates_file() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_data(&db_path);

    let out = temp_out("export_xlsx", "xlsx");

    wl().args([
        "--db", &db_path, "export", "--format", "xlsx", "--file", &out,
    ])
    .assert()
    .success();

    let meta = fs::metadata(&out).expect("xlsx file exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_pdf_is_valid_and_month_grouped() {
    let db_path = setup_test_db("export_pdf");
    populate_week_with_holiday(&db_path);

    let out = temp_out("export_pdf", "pdf");

    wl().args([
        "--db", &db_path, "export", "--format", "pdf", "--file", &out,
    ])
    .assert()
    .success();

    let bytes = fs::read(&out).expect("pdf file exists");
    assert!(bytes.starts_with(b"%PDF"));

    // The month heading and the table headers are plain text in the
    // content stream (no compression is applied).
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("March 2025"));
    assert!(text.contains("Total Hours"));
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_data(&db_path);

    wl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        "relative_out.csv",
    ])
    .assert()
    .failure();
}

#[test]
fn test_export_empty_range_warns_and_writes_nothing() {
    let db_path = setup_test_db("export_empty_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_empty_range", "csv");

    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2024",
    ])
    .assert()
    .success();

    assert!(!std::path::Path::new(&out).exists());
}
