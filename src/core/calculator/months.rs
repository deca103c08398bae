use crate::models::entry::TimeEntry;
use crate::utils::date::month_name;
use chrono::{Datelike, NaiveDate};

/// Entries of one calendar month, used to lay out the PDF export
/// (one titled table per month).
#[derive(Debug, Clone)]
pub struct MonthGroup {
    pub key: String,
    pub label: String,
    pub entries: Vec<TimeEntry>,
}

/// Month key in the form "YYYY-M" with a 1-indexed, unpadded month.
pub fn month_key(date: NaiveDate) -> String {
    format!("{}-{}", date.year(), date.month())
}

/// Human-readable heading for a month, e.g. "January 2025".
pub fn month_label(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

/// Group entries by calendar month; entries inside each group sorted
/// ascending by date, groups in chronological order.
pub fn group_by_month(entries: &[TimeEntry]) -> Vec<MonthGroup> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.date);

    let mut groups: Vec<MonthGroup> = Vec::new();

    for entry in sorted {
        let key = month_key(entry.date);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(g) => g.entries.push(entry),
            None => groups.push(MonthGroup {
                key,
                label: month_label(entry.date.year(), entry.date.month()),
                entries: vec![entry],
            }),
        }
    }

    groups
}
