// src/export/csv_text.rs

use crate::errors::AppResult;
use crate::export::model::{ExportRow, get_headers, row_to_values};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// CSV text: header line, then one line per row, every value quoted.
///
/// Embedded quotes are written as-is, so a task containing `"` yields a
/// malformed line. Lines are joined with '\n' without a trailing newline.
pub fn render_csv(rows: &[ExportRow]) -> String {
    let header = get_headers().join(",");

    let lines = rows.iter().map(|r| {
        row_to_values(r)
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(",")
    });

    std::iter::once(header)
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn export_csv(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    fs::write(path, render_csv(rows))?;

    notify_export_success("CSV", path);
    Ok(())
}
