// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{get_headers, record_to_row};
use crate::export::{RecordExport, notify_export_success};
use crate::ui::messages::info;
use crate::utils::formatting::decimal_hours;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Widest a text column may grow; longer descriptions wrap inside the cell.
const MAX_COL_WIDTH: usize = 60;

/// XLSX export with a styled header, banded rows and auto-sized columns,
/// plus a second sheet with the daily totals.
pub(crate) fn export_xlsx(
    records: &[RecordExport],
    totals: &[(String, f64)],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    // ---------------------------
    // Activities sheet
    // ---------------------------
    let sheet = workbook.add_worksheet();
    sheet.set_name("Activities").map_err(to_app_error)?;

    let headers = get_headers();
    write_header(sheet, &headers, &header_format)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (row_index, rec) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = band_color(row_index);

        for (col, value) in record_to_row(rec).iter().enumerate() {
            write_cell(sheet, row, col as u16, value, band, col >= 3)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    set_widths(sheet, &col_widths)?;

    // ---------------------------
    // Daily totals sheet
    // ---------------------------
    let sheet = workbook.add_worksheet();
    sheet.set_name("Hours per day").map_err(to_app_error)?;

    let headers = ["day", "total hours"];
    write_header(sheet, &headers, &header_format)?;

    for (i, (label, hours)) in totals.iter().enumerate() {
        let row = (i + 1) as u32;
        let band = band_color(i);
        write_cell(sheet, row, 0, label, band, true)?;
        write_cell(sheet, row, 1, &decimal_hours(*hours), band, false)?;
    }

    set_widths(sheet, &[12, 12])?;

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn band_color(row_index: usize) -> Color {
    if row_index % 2 == 0 {
        Color::RGB(0xEAF3FB)
    } else {
        Color::RGB(0xFFFFFF)
    }
}

fn write_header(sheet: &mut Worksheet, headers: &[&str], fmt: &Format) -> AppResult<()> {
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *header, fmt)
            .map_err(to_app_error)?;
    }
    sheet.set_freeze_panes(1, 0).map_err(to_app_error)?;
    Ok(())
}

fn set_widths(sheet: &mut Worksheet, widths: &[usize]) -> AppResult<()> {
    for (c, w) in widths.iter().enumerate() {
        sheet
            .set_column_width(c as u16, (*w).min(MAX_COL_WIDTH) as f64 + 2.0)
            .map_err(to_app_error)?;
    }
    Ok(())
}

/// Write one cell. Unless `text_only`, ISO dates and numbers are stored as
/// native Excel values.
fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    text_only: bool,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if text_only {
        sheet
            .write_with_format(row, col, s, &base.set_text_wrap())
            .map_err(to_app_error)?;
        return Ok(());
    }

    if let Some(serial) = parse_to_excel_date(s) {
        let fmt = base.set_num_format("yyyy-mm-dd");
        sheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    if let Ok(num) = s.parse::<f64>() {
        let fmt = base.set_align(FormatAlign::Right);
        sheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    let fmt = base.set_text_wrap();
    sheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
