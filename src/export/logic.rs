// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::{load_entries, load_entries_between};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::EntryExport;
use crate::export::range::parse_range;
use crate::models::entry::TimeEntry;
use crate::ui::messages::warning;
use crate::utils::date::month_name;
use crate::utils::path::expand_tilde;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export entries.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or an expression like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path_buf = expand_tilde(file);
        let path = path_buf.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let entries = match date_bounds {
            None => load_entries(pool)?,
            Some((start, end)) => load_entries_between(pool, &start, &end)?,
        };

        if entries.is_empty() {
            warning("⚠️  No entries found for the selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&to_exports(&entries), path)?,
            ExportFormat::Json => export_json(&to_exports(&entries), path)?,
            ExportFormat::Xlsx => export_xlsx(&to_exports(&entries), path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(range);
                export_pdf(&entries, path, &title)?
            }
        }

        Ok(())
    }
}

fn to_exports(entries: &[TimeEntry]) -> Vec<EntryExport> {
    entries.iter().map(EntryExport::from).collect()
}

/// PDF title derived from the selected period.
fn build_pdf_title(period: &Option<String>) -> String {
    let p = match period {
        None => return "Logged sessions".to_string(),
        Some(p) if p.eq_ignore_ascii_case("all") => return "Logged sessions".to_string(),
        Some(p) => p,
    };

    match p.len() {
        4 => {
            // YYYY
            format!("Logged sessions for year {}", p)
        }

        7 => {
            // YYYY-MM
            let parts: Vec<&str> = p.split('-').collect();
            match (parts.first(), parts.get(1).and_then(|m| m.parse::<u32>().ok())) {
                (Some(year), Some(month)) if parts.len() == 2 => {
                    format!("Logged sessions for {} {}", month_name(month), year)
                }
                _ => "Logged sessions".to_string(),
            }
        }

        10 => {
            // YYYY-MM-DD
            format!("Logged sessions for date {}", p)
        }

        21 => {
            // YYYY-MM-DD:YYYY-MM-DD
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                format!("Logged sessions from {} to {}", parts[0], parts[1])
            } else {
                "Logged sessions".to_string()
            }
        }

        _ => "Logged sessions".to_string(),
    }
}
