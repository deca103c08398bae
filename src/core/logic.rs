use crate::core::calculator::{projection, weeks};
use crate::models::{dashboard::Dashboard, entry::TimeEntry};
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Build the full dashboard view-model from one entries snapshot.
    /// Both the interactive views and the export path go through here,
    /// so grouping and totals can never diverge between them.
    pub fn build_dashboard(
        entries: &[TimeEntry],
        today: NaiveDate,
        goal_hours: f64,
        hours_per_day: f64,
    ) -> Dashboard {
        Dashboard {
            weeks: weeks::group_by_week(entries),
            projection: projection::project(entries, today, goal_hours, hours_per_day),
        }
    }
}
