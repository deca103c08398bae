use crate::core::calculator::duration::worked_minutes;
use crate::models::entry::TimeEntry;
use chrono::{Datelike, NaiveDate, Weekday};

/// Progress toward the fixed hours goal, computed from one full snapshot
/// of entries. Pure and idempotent: same snapshot, same result.
#[derive(Debug, Clone)]
pub struct GoalProjection {
    pub total_hours_worked: f64,
    /// Goal minus worked hours; goes negative once the goal is exceeded.
    pub remaining_hours: f64,
    pub days_rendered: i64,
    /// May be zero or negative when the goal is already met.
    pub days_left: i64,
    pub expected_end_date: NaiveDate,
    pub leave_days: usize,
    pub first_day_worked: Option<NaiveDate>,
    /// Raw fraction of the goal, not clamped. Display layers clamp.
    pub progress: f64,
}

/// Compute the goal projection over `entries` as of `today`.
///
/// `goal_hours` and `hours_per_day` come from the configuration
/// (defaults: 300 and 8). No input validation happens here.
pub fn project(
    entries: &[TimeEntry],
    today: NaiveDate,
    goal_hours: f64,
    hours_per_day: f64,
) -> GoalProjection {
    // Holidays already contribute zero minutes, so a plain sum is the
    // "sum over non-holiday entries" the dashboard shows.
    let total_minutes: i64 = entries.iter().map(worked_minutes).sum();
    let total_hours_worked = total_minutes as f64 / 60.0;

    let remaining_hours = goal_hours - total_hours_worked;
    let days_rendered = (total_hours_worked / hours_per_day).floor() as i64;
    let days_left = (remaining_hours / hours_per_day).ceil() as i64;

    GoalProjection {
        total_hours_worked,
        remaining_hours,
        days_rendered,
        days_left,
        expected_end_date: add_business_days(today, days_left),
        leave_days: entries.iter().filter(|e| e.is_holiday).count(),
        first_day_worked: entries.iter().map(|e| e.date).min(),
        progress: total_hours_worked / goal_hours,
    }
}

/// Advance `from` one calendar day at a time, counting only Monday
/// through Friday, until `days` business days have been added. The
/// result therefore never lands on a weekend for `days > 0`, and
/// `days <= 0` short-circuits to `from` unchanged.
pub fn add_business_days(from: NaiveDate, days: i64) -> NaiveDate {
    let mut date = from;
    let mut added = 0;

    while added < days {
        date = date.succ_opt().unwrap();
        if date.weekday() != Weekday::Sat && date.weekday() != Weekday::Sun {
            added += 1;
        }
    }

    date
}
