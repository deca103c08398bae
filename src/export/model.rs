// src/export/model.rs

use crate::core::calculator::duration::total_display;
use crate::models::entry::TimeEntry;
use serde::Serialize;

/// Flat per-entry view for export: the same computed display fields the
/// dashboard table shows (holiday rows carry "-" cells and the badge).
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    #[serde(rename = "in")]
    pub clock_in: String,
    #[serde(rename = "out")]
    pub clock_out: String,
    pub lunch_break: String,
    pub total_hours: String,
    pub holiday: String,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            clock_in: e.start_display(),
            clock_out: e.end_display(),
            lunch_break: if e.is_holiday {
                "-".to_string()
            } else {
                e.lunch_break.to_string()
            },
            total_hours: total_display(e),
            holiday: e.holiday_display(),
        }
    }
}

/// Header for CSV / JSON / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "in",
        "out",
        "lunch_break",
        "total_hours",
        "holiday",
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.date.clone(),
        e.clock_in.clone(),
        e.clock_out.clone(),
        e.lunch_break.clone(),
        e.total_hours.clone(),
        e.holiday.clone(),
    ]
}
