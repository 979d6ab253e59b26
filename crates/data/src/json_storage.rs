use anyhow::{Context, Result};
use royalty_gen_core::RoyaltyRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::debug;

pub struct JsonStorage;

impl JsonStorage {
    /// Writes royalty records to a pretty-printed JSON array keyed by column name.
    ///
    /// # Errors
    /// Returns error if file cannot be created or serialization fails
    pub fn write_records(path: &str, records: &[RoyaltyRecord]) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create JSON file: {}", path))?;
        Self::write_records_to(BufWriter::new(file), records)
            .with_context(|| format!("Failed to write JSON file: {}", path))?;
        debug!(path, rows = records.len(), "wrote JSON export");
        Ok(())
    }

    /// # Errors
    /// Returns error if serialization or writing fails
    pub fn write_records_to<W: Write>(mut writer: W, records: &[RoyaltyRecord]) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
