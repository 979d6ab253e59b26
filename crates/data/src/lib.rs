//! Export of generated royalty batches.
//!
//! This crate provides:
//! - CSV export with the spreadsheet header row
//! - JSON export keyed by the same column names
//! - Single-sheet XLSX workbook export
//! - A format dispatcher used by the CLI

pub mod csv_storage;
pub mod json_storage;
pub mod xlsx_storage;

pub use csv_storage::CsvStorage;
pub use json_storage::JsonStorage;
pub use xlsx_storage::XlsxStorage;

use anyhow::Result;
use royalty_gen_core::{ExportFormat, RoyaltyRecord};
use tracing::info;

/// Serializes the whole batch once, in the requested format.
///
/// # Errors
/// Returns error if the file cannot be written; nothing is retried.
pub fn export_records(path: &str, format: ExportFormat, records: &[RoyaltyRecord]) -> Result<()> {
    match format {
        ExportFormat::Csv => CsvStorage::write_records(path, records)?,
        ExportFormat::Json => JsonStorage::write_records(path, records)?,
        ExportFormat::Xlsx => XlsxStorage::write_records(path, records)?,
    }
    info!(path, %format, rows = records.len(), "exported royalty batch");
    Ok(())
}
