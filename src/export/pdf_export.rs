// src/export/pdf_export.rs

use crate::core::calculator::duration::total_display;
use crate::core::calculator::months::{MonthGroup, group_by_month};
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::{PdfManager, Section};
use crate::models::entry::TimeEntry;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

const PDF_HEADERS: [&str; 4] = ["Date", "In", "Out", "Total Hours"];

/// Export PDF: one titled table per month, columns Date / In / Out /
/// Total Hours, months in chronological order.
pub(crate) fn export_pdf(entries: &[TimeEntry], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let months = group_by_month(entries);
    let sections: Vec<Section> = months.iter().map(month_section).collect();

    let mut pdf = PdfManager::new();
    pdf.write_sections(title, &PDF_HEADERS, &sections);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}

fn month_section(group: &MonthGroup) -> Section {
    Section {
        heading: group.label.clone(),
        rows: group.entries.iter().map(entry_row).collect(),
    }
}

fn entry_row(e: &TimeEntry) -> Vec<String> {
    let total = match total_display(e).as_str() {
        "-" => "-".to_string(),
        hours => format!("{} hrs", hours),
    };

    vec![
        e.date.format("%B %-d, %Y").to_string(),
        e.start_display(),
        e.end_display(),
        total,
    ]
}
