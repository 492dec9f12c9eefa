//! CSV rendering for tabular summaries

use serde::Serialize;

use crate::error::{DashboardError, ErrorCode, Result};

/// Render rows as CSV with a header taken from the serialized field names.
/// No rows renders as an empty string.
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        DashboardError::export_with_code(ErrorCode::EXPORT_CSV_FAILED, "Failed to flush CSV")
            .with_source(e.into_error())
    })?;

    String::from_utf8(bytes).map_err(|e| {
        DashboardError::export_with_code(ErrorCode::EXPORT_CSV_FAILED, "CSV output is not UTF-8")
            .with_source(e)
    })
}

/// Pretty-printed JSON for any summary
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        DashboardError::export_with_code(ErrorCode::EXPORT_JSON_FAILED, "Failed to serialize JSON")
            .with_source(e)
    })
}
