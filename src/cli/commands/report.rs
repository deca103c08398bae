use crate::config::Config;
use crate::core::logic::Core;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::AppResult;
use crate::utils::date;

/// Show the goal summary block: total/remaining hours, day counts,
/// projected end date and the progress bar.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let entries = load_entries(&mut pool)?;

    let dashboard = Core::build_dashboard(
        &entries,
        date::today(),
        cfg.goal_hours,
        cfg.hours_per_day,
    );

    ReportLogic::print_summary(&dashboard.projection, cfg.goal_hours);
    Ok(())
}
