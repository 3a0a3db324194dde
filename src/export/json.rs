// src/export/json.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::ReportTable;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde_json::json;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
///
/// The table goes out as `{columns, rows}` rather than an array of objects:
/// JSON objects have no key order, and the date columns must stay in range
/// order for consumers that read the table positionally.
pub(crate) fn export_json(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let payload = json!({
        "columns": table.headers,
        "rows": table.rows,
    });

    let json_data = serde_json::to_string_pretty(&payload)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
