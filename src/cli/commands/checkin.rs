use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_time;

/// Quick check-in: record a standard working day for today using the
/// configured defaults (08:00–17:00 with a 60 minute lunch out of the
/// box).
pub fn handle(cfg: &Config) -> AppResult<()> {
    let start = parse_time(&cfg.default_start_time).ok_or_else(|| {
        AppError::Config(format!(
            "Invalid default_start_time '{}'",
            cfg.default_start_time
        ))
    })?;
    let end = parse_time(&cfg.default_end_time).ok_or_else(|| {
        AppError::Config(format!(
            "Invalid default_end_time '{}'",
            cfg.default_end_time
        ))
    })?;

    let mut pool = DbPool::new(&cfg.database)?;

    AddLogic::apply(
        &mut pool,
        "checkin",
        date::today(),
        Some(start),
        Some(end),
        cfg.default_lunch_break,
        false,
        None,
    )
}
