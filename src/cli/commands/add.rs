use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Record one work session or holiday.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        lunch,
        holiday,
        holiday_name,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse IN / OUT times (mandatory unless --holiday)
        //
        let start_parsed = parse_optional_time(start.as_ref())?;
        let end_parsed = parse_optional_time(end.as_ref())?;

        //
        // 3. Lunch break (defaults to none)
        //
        let lunch_break = lunch.unwrap_or(0);

        //
        // 4. Open DB and execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;

        AddLogic::apply(
            &mut pool,
            "add",
            d,
            start_parsed,
            end_parsed,
            lunch_break,
            *holiday,
            holiday_name.clone(),
        )?;
    }

    Ok(())
}
