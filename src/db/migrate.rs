use crate::db::log::ttlog;
use rusqlite::{Connection, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `entries` table exists.
fn entries_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='entries'")?;
    let exists = stmt.exists([])?;
    Ok(exists)
}

/// Check if the `entries` table has a given column.
fn entries_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('entries')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `entries` table with the modern schema.
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            date         TEXT NOT NULL,
            start_time   TEXT NOT NULL,
            end_time     TEXT NOT NULL,
            lunch_break  INTEGER NOT NULL DEFAULT 0,
            is_holiday   INTEGER NOT NULL DEFAULT 0,
            holiday_name TEXT DEFAULT '',
            source       TEXT NOT NULL DEFAULT 'cli',
            meta         TEXT DEFAULT '',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
        "#,
    )?;
    Ok(())
}

/// Migrate an old `entries` table to include the `holiday_name` column.
/// Databases created before holidays carried a label lack it.
fn migrate_add_holiday_name(conn: &Connection) -> Result<()> {
    if !entries_table_exists(conn)? {
        return Ok(()); // no table → nothing to migrate
    }

    if entries_has_column(conn, "holiday_name")? {
        return Ok(()); // already present → OK
    }

    conn.execute_batch(
        r#"
        ALTER TABLE entries ADD COLUMN holiday_name TEXT DEFAULT '';
        "#,
    )?;

    let _ = ttlog(
        conn,
        "migration_applied",
        "entries",
        "Added 'holiday_name' column to entries table",
    );

    Ok(())
}

/// Run every pending schema migration, in order. Safe to call on every
/// startup: each step is a no-op when the schema is already current.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_entries_table(conn)?;
    migrate_add_holiday_name(conn)?;
    Ok(())
}

/// Lightweight integrity check used by `db --check`.
pub fn check_integrity(conn: &Connection) -> Result<bool> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(result == "ok")
}
