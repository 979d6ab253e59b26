use anyhow::{Context, Result};
use royalty_gen_core::RoyaltyRecord;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::debug;

/// Name of the single sheet in an exported workbook.
pub const SHEET_NAME: &str = "Royalties";

pub struct XlsxStorage;

impl XlsxStorage {
    /// Writes royalty records to a one-sheet workbook with a bold header row.
    ///
    /// # Errors
    /// Returns error if the workbook cannot be built or saved
    pub fn write_records(path: &str, records: &[RoyaltyRecord]) -> Result<()> {
        let mut workbook = Self::workbook(records)?;
        workbook
            .save(path)
            .with_context(|| format!("Failed to write XLSX file: {}", path))?;
        debug!(path, rows = records.len(), "wrote XLSX export");
        Ok(())
    }

    /// Renders the workbook into memory.
    ///
    /// # Errors
    /// Returns error if the workbook cannot be built
    pub fn to_buffer(records: &[RoyaltyRecord]) -> Result<Vec<u8>> {
        let mut workbook = Self::workbook(records)?;
        Ok(workbook.save_to_buffer()?)
    }

    fn workbook(records: &[RoyaltyRecord]) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        let header = Format::new().set_bold();
        for (col, name) in RoyaltyRecord::COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(0, u16::try_from(col)?, *name, &header)?;
        }

        for (index, record) in records.iter().enumerate() {
            let row = u32::try_from(index + 1).context("Too many rows for one sheet")?;
            write_row(sheet, row, record.to_row())?;
        }

        Ok(workbook)
    }
}

fn write_row(sheet: &mut Worksheet, row: u32, cells: Vec<String>) -> Result<()> {
    for (col, cell) in cells.into_iter().enumerate() {
        sheet.write_string(row, u16::try_from(col)?, cell)?;
    }
    Ok(())
}
