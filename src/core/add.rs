use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_entry;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::ui::messages::success;
use crate::utils::time::minutes_between;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `add` and `checkin` commands.
pub struct AddLogic;

impl AddLogic {
    /// Validate and append a single entry (all-or-nothing insert).
    ///
    /// This is the creation boundary: inconsistent payloads are rejected
    /// here so the aggregation engine downstream can stay a pure
    /// pass-through. Already-persisted rows are never touched.
    ///
    /// `operation` names the caller in the audit log ("add" or "checkin").
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        pool: &mut DbPool,
        operation: &str,
        date: NaiveDate,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
        lunch_break: i64,
        is_holiday: bool,
        holiday_name: Option<String>,
    ) -> AppResult<()> {
        if lunch_break < 0 {
            return Err(AppError::InvalidEntry(format!(
                "Lunch break must be zero or more minutes, got {}",
                lunch_break
            )));
        }

        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();

        let (start, end) = if is_holiday {
            // Times are display-irrelevant on holiday rows.
            (start.unwrap_or(midnight), end.unwrap_or(midnight))
        } else {
            let s = start.ok_or_else(|| {
                AppError::InvalidEntry("Missing --in time for a working entry".to_string())
            })?;
            let e = end.ok_or_else(|| {
                AppError::InvalidEntry("Missing --out time for a working entry".to_string())
            })?;

            if minutes_between(s, e) <= 0 {
                return Err(AppError::InvalidEntry(format!(
                    "Clock-out {} must be after clock-in {}",
                    e.format("%H:%M"),
                    s.format("%H:%M")
                )));
            }

            (s, e)
        };

        let entry = TimeEntry::new(0, date, start, end, lunch_break, is_holiday, holiday_name);

        insert_entry(&pool.conn, &entry)?;

        let what = if entry.is_holiday {
            format!("holiday '{}' on {}", entry.holiday_display(), entry.date_str())
        } else {
            format!(
                "session {} {}-{} (lunch {} min)",
                entry.date_str(),
                entry.start.format("%H:%M"),
                entry.end.format("%H:%M"),
                entry.lunch_break
            )
        };

        if let Err(e) = ttlog(
            &pool.conn,
            operation,
            &entry.date_str(),
            &format!("Recorded {}", what),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Recorded {}", what));
        Ok(())
    }
}
