use crate::models::entry::TimeEntry;
use crate::utils::hours_2dp;
use crate::utils::time::minutes_between;

/// Worked minutes for a single entry.
///
/// Holidays contribute exactly 0 regardless of their times. Everything
/// else is `(end - start) in minutes - lunch_break`, with no clamping:
/// an inconsistent entry (end before start, oversized lunch) yields a
/// negative duration. Consistency is enforced at creation time, not here.
pub fn worked_minutes(entry: &TimeEntry) -> i64 {
    if entry.is_holiday {
        return 0;
    }
    minutes_between(entry.start, entry.end) - entry.lunch_break
}

/// Table cell for an entry's total: "-" on holiday rows, otherwise hours
/// with two decimals. Negative totals print as-is.
pub fn total_display(entry: &TimeEntry) -> String {
    if entry.is_holiday {
        "-".to_string()
    } else {
        hours_2dp(worked_minutes(entry))
    }
}
