// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::ReportTable;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Fill colour for a leave-code cell, matching the legacy spreadsheet
/// legend: green vacation, grey week off, orange comp-off, amber sick.
fn leave_color(symbol: &str) -> Option<Color> {
    match symbol {
        "V" => Some(Color::RGB(0xC6E0B4)),
        "W" => Some(Color::RGB(0xD0CECE)),
        "C" => Some(Color::RGB(0xFCE4D6)),
        "S" => Some(Color::RGB(0xFFC000)),
        _ => None,
    }
}

/// Export XLSX with styling and auto column widths.
pub(crate) fn export_xlsx(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if table.rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path_str(path)?).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xC9DAF8))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Column widths
    // ---------------------------
    let mut col_widths: Vec<usize> = table
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let data_format = Format::new()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    // ---------------------------
    // Data rows
    // ---------------------------
    for (row_index, row) in table.rows.iter().enumerate() {
        let r = (row_index + 1) as u32;
        let is_totals = row.first().map(|v| v == "Totals").unwrap_or(false);

        for (col, value) in row.iter().enumerate() {
            let v = value.as_str();

            let format = if let Some(color) = leave_color(v) {
                data_format
                    .clone()
                    .set_background_color(color)
                    .set_pattern(FormatPattern::Solid)
            } else if is_totals {
                data_format.clone().set_bold()
            } else {
                data_format.clone()
            };

            worksheet
                .write_with_format(r, col as u16, v, &format)
                .map_err(to_export_error)?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_export_error(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("invalid output path: {}", path.display())))
}
