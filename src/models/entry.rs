use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// One recorded work session or holiday marker for a single date.
///
/// Entries are append-only: once created they are never updated or deleted.
/// `start`/`end`/`lunch_break` are meaningful only when `is_holiday` is
/// false; holiday rows contribute zero worked time and are counted as leave
/// days instead.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub date: NaiveDate,              // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub start: NaiveTime,             // ⇔ entries.start_time (TEXT "HH:MM")
    pub end: NaiveTime,               // ⇔ entries.end_time (TEXT "HH:MM")
    pub lunch_break: i64,             // ⇔ entries.lunch_break (INT minutes)
    pub is_holiday: bool,             // ⇔ entries.is_holiday (INT 0/1)
    pub holiday_name: Option<String>, // ⇔ entries.holiday_name (TEXT, '' = none)

    pub source: String,     // ⇔ entries.source (TEXT, default 'cli')
    pub created_at: String, // ⇔ entries.created_at (TEXT, ISO8601)
}

impl TimeEntry {
    /// High-level constructor for entries created from the CLI.
    /// - Sets `source = "cli"`
    /// - Sets `created_at = now() in ISO8601`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        lunch_break: i64,
        is_holiday: bool,
        holiday_name: Option<String>,
    ) -> Self {
        Self {
            id,
            date,
            start,
            end,
            lunch_break,
            is_holiday,
            holiday_name,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Clock-in cell for tables: holiday rows render as "-".
    pub fn start_display(&self) -> String {
        if self.is_holiday {
            "-".to_string()
        } else {
            self.start.format("%H:%M").to_string()
        }
    }

    /// Clock-out cell for tables: holiday rows render as "-".
    pub fn end_display(&self) -> String {
        if self.is_holiday {
            "-".to_string()
        } else {
            self.end.format("%H:%M").to_string()
        }
    }

    /// Lunch cell for tables: holiday rows render as "-".
    pub fn lunch_display(&self) -> String {
        if self.is_holiday {
            "-".to_string()
        } else {
            format!("{} min", self.lunch_break)
        }
    }

    /// Holiday badge: the holiday name, or "Holiday" when unnamed.
    /// Empty for working entries.
    pub fn holiday_display(&self) -> String {
        if !self.is_holiday {
            return String::new();
        }
        match &self.holiday_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => "Holiday".to_string(),
        }
    }
}
