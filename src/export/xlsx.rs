// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportRow, get_headers, row_to_values};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Worksheet holding the exported rows.
pub const SHEET_NAME: &str = "TimeLog";

/// Column of `Duration_Minutes`, written as a number.
const DURATION_COL: usize = 5;

/// Export XLSX with a styled header, banded rows and auto-sized columns.
pub(crate) fn export_xlsx(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in row_to_values(r).iter().enumerate() {
            if col == DURATION_COL {
                write_number_cell(worksheet, row, col as u16, r.duration_minutes, band_color)?;
            } else {
                write_text_cell(worksheet, row, col as u16, value, band_color)?;
            }

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_text_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    worksheet
        .write_with_format(row, col, s, &cell_format(bg))
        .map_err(to_export_error)?;
    Ok(())
}

fn write_number_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    minutes: u8,
    bg: Color,
) -> AppResult<()> {
    let fmt = cell_format(bg).set_align(FormatAlign::Right);
    worksheet
        .write_with_format(row, col, f64::from(minutes), &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
