use crate::error::Result;
use crate::models::{CombinedTable, Table};
use crate::utils::constants::FIELD_DELIMITER;
use crate::utils::timestamp::format_key;
use csv::{Terminator, WriterBuilder};
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes tables in the semicolon / comma-decimal layout, without an index column.
///
/// Output goes to a temporary file next to the destination and is renamed into
/// place once complete, so a failed write never leaves a truncated file behind.
pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self {
            delimiter: FIELD_DELIMITER,
        }
    }

    pub fn write_combined(&self, combined: &CombinedTable, path: &Path) -> Result<()> {
        self.write_table(&combined.table, path)
    }

    pub fn write_table(&self, table: &Table, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let mut temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = WriterBuilder::new()
                .delimiter(self.delimiter)
                .terminator(Terminator::Any(b'\n'))
                .from_writer(temp.as_file_mut());

            writer.write_record(table.header())?;

            let kinds = table.column_kinds();
            let date_only = table.keys_are_dates();
            let key_position = table.key_position();

            for row in table.rows() {
                let mut fields: Vec<String> = row
                    .cells
                    .iter()
                    .zip(&kinds)
                    .map(|(cell, kind)| cell.render(*kind))
                    .collect();
                fields.insert(key_position, format_key(&row.key, date_only));
                writer.write_record(&fields)?;
            }

            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(path)?;

        debug!(path = %path.display(), rows = table.num_rows(), "wrote table");
        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
