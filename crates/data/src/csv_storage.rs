use anyhow::{Context, Result};
use csv::Writer;
use royalty_gen_core::RoyaltyRecord;
use std::fs::File;
use std::io::Write;
use tracing::debug;

pub struct CsvStorage;

impl CsvStorage {
    /// Writes royalty records to a CSV file, one header row then one row per record.
    ///
    /// Columns follow `RoyaltyRecord::COLUMNS`.
    ///
    /// # Errors
    /// Returns error if file cannot be created or writing fails
    pub fn write_records(path: &str, records: &[RoyaltyRecord]) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create CSV file: {}", path))?;
        Self::write_records_to(file, records)
            .with_context(|| format!("Failed to write CSV file: {}", path))?;
        debug!(path, rows = records.len(), "wrote CSV export");
        Ok(())
    }

    /// Writes royalty records as CSV to any writer.
    ///
    /// # Errors
    /// Returns error if writing fails
    pub fn write_records_to<W: Write>(writer: W, records: &[RoyaltyRecord]) -> Result<()> {
        let mut writer = Writer::from_writer(writer);

        writer.write_record(RoyaltyRecord::COLUMNS)?;

        // Batch order is generation order
        for record in records {
            writer.write_record(record.to_row())?;
        }

        writer.flush()?;
        Ok(())
    }
}
