//! Library-level tests for the aggregation engine: durations, week and
//! month grouping, and the goal projection.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use worklog::core::calculator::duration::{total_display, worked_minutes};
use worklog::core::calculator::months::group_by_month;
use worklog::core::calculator::projection::{add_business_days, project};
use worklog::core::calculator::weeks::{
    group_by_week, parse_week_key, week_key, week_number, week_ordinal_bounds,
};
use worklog::models::entry::TimeEntry;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn entry(d: &str, start: &str, end: &str, lunch: i64) -> TimeEntry {
    TimeEntry::new(0, date(d), time(start), time(end), lunch, false, None)
}

fn holiday(d: &str, name: Option<&str>) -> TimeEntry {
    TimeEntry::new(
        0,
        date(d),
        time("08:00"),
        time("17:00"),
        60,
        true,
        name.map(str::to_string),
    )
}

// ---------------------------------------------------------------
// Duration
// ---------------------------------------------------------------

#[test]
fn test_standard_day_is_480_minutes() {
    let e = entry("2025-02-03", "08:00", "17:00", 60);
    assert_eq!(worked_minutes(&e), 480);
    assert_eq!(total_display(&e), "8.00");
}

#[test]
fn test_holiday_duration_is_zero_regardless_of_times() {
    let h = holiday("2025-01-29", Some("Chinese New Year"));
    assert_eq!(worked_minutes(&h), 0);
    assert_eq!(total_display(&h), "-");

    // Even absurd values contribute nothing once the flag is set.
    let mut weird = entry("2025-01-29", "23:00", "01:00", 9999);
    weird.is_holiday = true;
    assert_eq!(worked_minutes(&weird), 0);
}

#[test]
fn test_negative_duration_passes_through() {
    // Lunch larger than the shift: no clamping, the negative value flows.
    let e = entry("2025-02-03", "08:00", "17:00", 600);
    assert_eq!(worked_minutes(&e), -60);
    assert_eq!(total_display(&e), "-1.00");
}

// ---------------------------------------------------------------
// Week grouping
// ---------------------------------------------------------------

#[test]
fn test_week_key_matches_legacy_formula() {
    // 2025-01-01 is a Wednesday, so weekday_of_jan1 = 3 (Sunday = 0):
    // week(Jan 27) = ceil((27 + 3 + 1) / 7) = ceil(31 / 7) = 5
    assert_eq!(week_key(date("2025-01-27")), "2025-W5");
    assert_eq!(week_number(date("2025-01-01")), 1);
}

#[test]
fn test_week_key_round_trip() {
    let (year, week) = parse_week_key("2025-W5").unwrap();
    assert_eq!((year, week), (2025, 5));

    // Hand-computed: week 5 of 2025 covers ordinals 25..=31 (Jan 25-31).
    let (lo, hi) = week_ordinal_bounds(year, week);
    assert_eq!((lo, hi), (25, 31));

    for ordinal in lo..=hi {
        let d = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        assert_eq!(week_number(d), week, "ordinal {} escaped its week", ordinal);
    }

    assert_eq!(week_key(date("2025-01-25")), "2025-W5");
    assert_ne!(week_key(date("2025-01-24")), "2025-W5");
}

#[test]
fn test_week_grouping_is_idempotent() {
    let entries = vec![
        entry("2025-01-28", "08:00", "17:00", 60),
        entry("2025-01-21", "08:00", "17:00", 60),
        entry("2025-01-27", "08:00", "17:00", 60),
        holiday("2025-01-29", Some("Chinese New Year")),
    ];

    let first = group_by_week(&entries);
    let second = group_by_week(&entries);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.key, b.key);
        assert_eq!(a.total_minutes, b.total_minutes);
        let dates_a: Vec<_> = a.entries.iter().map(|e| e.date).collect();
        let dates_b: Vec<_> = b.entries.iter().map(|e| e.date).collect();
        assert_eq!(dates_a, dates_b);
    }
}

#[test]
fn test_entries_sorted_ascending_within_groups() {
    let entries = vec![
        entry("2025-01-29", "08:00", "17:00", 60),
        entry("2025-01-27", "08:00", "17:00", 60),
        entry("2025-01-28", "08:00", "17:00", 60),
        entry("2025-02-12", "08:00", "17:00", 60),
        entry("2025-02-10", "08:00", "17:00", 60),
    ];

    for group in group_by_week(&entries) {
        let dates: Vec<_> = group.entries.iter().map(|e| e.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted, "week {} not sorted", group.key);
    }

    for group in group_by_month(&entries) {
        let dates: Vec<_> = group.entries.iter().map(|e| e.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted, "month {} not sorted", group.key);
    }
}

#[test]
fn test_week_totals_exclude_holidays() {
    let entries = vec![
        entry("2025-01-27", "08:00", "17:00", 60),
        holiday("2025-01-28", None),
        entry("2025-01-29", "08:00", "17:00", 60),
    ];

    let groups = group_by_week(&entries);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].total_minutes, 960);
    assert!((groups[0].total_hours() - 16.0).abs() < 1e-9);
}

// ---------------------------------------------------------------
// Month grouping
// ---------------------------------------------------------------

#[test]
fn test_month_grouping_keys_and_labels() {
    let entries = vec![
        entry("2025-01-31", "08:00", "17:00", 60),
        entry("2025-02-03", "08:00", "17:00", 60),
        entry("2025-01-21", "08:00", "17:00", 60),
    ];

    let groups = group_by_month(&entries);
    assert_eq!(groups.len(), 2);

    assert_eq!(groups[0].key, "2025-1");
    assert_eq!(groups[0].label, "January 2025");
    assert_eq!(groups[0].entries.len(), 2);

    assert_eq!(groups[1].key, "2025-2");
    assert_eq!(groups[1].label, "February 2025");
}

// ---------------------------------------------------------------
// Goal projection
// ---------------------------------------------------------------

#[test]
fn test_empty_list_projection() {
    let today = date("2025-06-02");
    let p = project(&[], today, 300.0, 8.0);

    assert_eq!(p.total_hours_worked, 0.0);
    assert_eq!(p.remaining_hours, 300.0);
    assert_eq!(p.days_rendered, 0);
    assert_eq!(p.days_left, 38); // ceil(300 / 8)
    assert_eq!(p.leave_days, 0);
    assert_eq!(p.first_day_worked, None);
    assert_eq!(p.progress, 0.0);
}

#[test]
fn test_five_consecutive_weekdays_scenario() {
    // Mon 2025-03-03 .. Fri 2025-03-07, 8 hours each.
    let entries: Vec<TimeEntry> = (3..=7)
        .map(|d| entry(&format!("2025-03-0{}", d), "08:00", "17:00", 60))
        .collect();

    let p = project(&entries, date("2025-03-10"), 300.0, 8.0);

    assert!((p.total_hours_worked - 40.0).abs() < 1e-9);
    assert!((p.remaining_hours - 260.0).abs() < 1e-9);
    assert_eq!(p.days_rendered, 5);
    assert_eq!(p.days_left, 33); // ceil(260 / 8)
    assert_eq!(p.first_day_worked, Some(date("2025-03-03")));
}

#[test]
fn test_single_holiday_scenario() {
    let entries = vec![
        entry("2025-01-28", "08:00", "17:00", 60),
        holiday("2025-01-29", Some("Chinese New Year")),
        entry("2025-01-30", "08:00", "17:00", 60),
    ];

    let p = project(&entries, date("2025-02-03"), 300.0, 8.0);

    assert_eq!(p.leave_days, 1);
    assert!((p.total_hours_worked - 16.0).abs() < 1e-9);
    assert_eq!(p.first_day_worked, Some(date("2025-01-28")));

    let groups = group_by_week(&entries);
    let badge: Vec<_> = groups[0]
        .entries
        .iter()
        .map(|e| e.holiday_display())
        .collect();
    assert_eq!(badge, vec!["", "Chinese New Year", ""]);
}

#[test]
fn test_expected_end_date_never_lands_on_weekend() {
    let today = date("2025-06-04"); // a Wednesday

    for days_left in 1..=60 {
        let end = add_business_days(today, days_left);
        assert_ne!(end.weekday(), Weekday::Sat, "days_left = {}", days_left);
        assert_ne!(end.weekday(), Weekday::Sun, "days_left = {}", days_left);
    }

    // Walking from a Friday skips straight over the weekend.
    assert_eq!(
        add_business_days(date("2025-06-06"), 1),
        date("2025-06-09")
    );
}

#[test]
fn test_projection_short_circuits_when_goal_met() {
    // 40 working days of 8 hours: 320 hours, goal exceeded.
    let mut entries = Vec::new();
    let mut d = date("2025-01-06");
    while entries.len() < 40 {
        if d.weekday() != Weekday::Sat && d.weekday() != Weekday::Sun {
            entries.push(TimeEntry::new(
                0,
                d,
                time("08:00"),
                time("17:00"),
                60,
                false,
                None,
            ));
        }
        d = d.succ_opt().unwrap();
    }

    let today = date("2025-03-10");
    let p = project(&entries, today, 300.0, 8.0);

    assert!(p.remaining_hours < 0.0); // not clamped
    assert!(p.progress > 1.0); // raw fraction, consumer clamps
    assert!(p.days_left <= 0);
    assert_eq!(p.expected_end_date, today); // zero-iteration walk
}

#[test]
fn test_projection_is_referentially_transparent() {
    let entries = vec![
        entry("2025-01-27", "08:00", "17:00", 60),
        holiday("2025-01-29", None),
    ];
    let today = date("2025-02-03");

    let a = project(&entries, today, 300.0, 8.0);
    let b = project(&entries, today, 300.0, 8.0);

    assert_eq!(a.total_hours_worked, b.total_hours_worked);
    assert_eq!(a.days_left, b.days_left);
    assert_eq!(a.expected_end_date, b.expected_end_date);
    assert_eq!(a.leave_days, b.leave_days);
}
