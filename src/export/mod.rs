// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod model;
mod xlsx;

pub use model::{ReportTable, detail_to_table, pivot_to_table};

use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message helper.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Render a report table to the requested file format.
pub fn write_table(
    table: &ReportTable,
    format: &ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => csv::export_csv(table, path),
        ExportFormat::Json => json::export_json(table, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(table, path),
    }
}
