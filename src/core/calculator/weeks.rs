use crate::core::calculator::duration::worked_minutes;
use crate::models::entry::TimeEntry;
use chrono::{Datelike, NaiveDate};

/// Entries of one calendar week plus the summed worked time.
#[derive(Debug, Clone)]
pub struct WeekGroup {
    pub key: String,
    pub entries: Vec<TimeEntry>,
    pub total_minutes: i64,
}

impl WeekGroup {
    pub fn total_hours(&self) -> f64 {
        self.total_minutes as f64 / 60.0
    }
}

/// Week number in the legacy dashboard scheme:
/// `ceil((day_of_year + weekday_of_jan1 + 1) / 7)` with day_of_year
/// 1-based and weekday Sunday = 0.
///
/// This is NOT ISO-8601: weeks are not Monday-aligned and there is no
/// cross-year boundary correction. Week labels shown to users since the
/// first release depend on this exact formula, so it stays.
pub fn week_number(date: NaiveDate) -> u32 {
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap();
    let jan1_dow = jan1.weekday().num_days_from_sunday();
    (date.ordinal() + jan1_dow + 1).div_ceil(7)
}

/// Week key in the form "YYYY-Wn", e.g. "2025-W5".
pub fn week_key(date: NaiveDate) -> String {
    format!("{}-W{}", date.year(), week_number(date))
}

/// Parse a "YYYY-Wn" key back into (year, week).
pub fn parse_week_key(key: &str) -> Option<(i32, u32)> {
    let (year, week) = key.split_once("-W")?;
    Some((year.parse().ok()?, week.parse().ok()?))
}

/// Inclusive day-of-year bounds covered by a week key, clamped to the
/// year. Inverse of `week_number`: every date whose ordinal falls inside
/// the returned bounds maps back to `week`.
pub fn week_ordinal_bounds(year: i32, week: u32) -> (u32, u32) {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let jan1_dow = jan1.weekday().num_days_from_sunday();

    // ceil((o + d + 1) / 7) = w  <=>  7w - 6 <= o + d + 1 <= 7w
    let lo = (7 * week).saturating_sub(6 + jan1_dow + 1).max(1);
    let days_in_year = NaiveDate::from_ymd_opt(year, 12, 31).unwrap().ordinal();
    let hi = (7 * week).saturating_sub(jan1_dow + 1).min(days_in_year);
    (lo, hi)
}

/// Group entries by calendar week.
///
/// Entries inside each group are sorted ascending by date; groups come
/// out in chronological order (callers decide presentation order). The
/// weekly total sums worked minutes over the group, holidays counting
/// as zero.
pub fn group_by_week(entries: &[TimeEntry]) -> Vec<WeekGroup> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.date);

    let mut groups: Vec<WeekGroup> = Vec::new();

    for entry in sorted {
        let key = week_key(entry.date);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(g) => g.entries.push(entry),
            None => groups.push(WeekGroup {
                key,
                entries: vec![entry],
                total_minutes: 0,
            }),
        }
    }

    for g in &mut groups {
        g.total_minutes = g.entries.iter().map(worked_minutes).sum();
    }

    groups
}
