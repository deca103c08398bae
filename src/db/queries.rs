use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Result, Row, params};

/// Mapping DB → TimeEntry (reused for every query).
pub fn map_row(row: &Row) -> Result<TimeEntry> {
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let start = NaiveTime::parse_from_str(&start_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(start_str.clone())),
        )
    })?;

    let end = NaiveTime::parse_from_str(&end_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(end_str.clone())),
        )
    })?;

    let holiday_name: String = row.get("holiday_name")?;

    Ok(TimeEntry {
        id: row.get("id")?,
        date,
        start,
        end,
        lunch_break: row.get("lunch_break")?,
        is_holiday: row.get::<_, i32>("is_holiday")? == 1,
        holiday_name: if holiday_name.trim().is_empty() {
            None
        } else {
            Some(holiday_name)
        },
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// Single all-or-nothing insert. There is intentionally no UPDATE or
/// DELETE counterpart: the entry log is append-only.
pub fn insert_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (date, start_time, end_time, lunch_break, is_holiday, holiday_name, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            entry.date.format("%Y-%m-%d").to_string(),
            entry.start.format("%H:%M").to_string(),
            entry.end.format("%H:%M").to_string(),
            entry.lunch_break,
            if entry.is_holiday { 1 } else { 0 },
            entry.holiday_name.clone().unwrap_or_default(),
            entry.source,
            entry.created_at,
        ],
    )?;
    Ok(())
}

/// Full snapshot, date ascending. This is the list the aggregation
/// engine consumes per invocation.
pub fn load_entries(pool: &mut DbPool) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM entries
         ORDER BY date ASC, start_time ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Snapshot limited to an inclusive date range, date ascending.
pub fn load_entries_between(
    pool: &mut DbPool,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM entries
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, start_time ASC",
    )?;

    let rows = stmt.query_map(
        params![
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
