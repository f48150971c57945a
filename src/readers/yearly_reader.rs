use crate::error::{ProcessingError, Result};
use crate::models::{CellValue, Row, Table, YearlyTable};
use crate::utils::constants::{FIELD_DELIMITER, KEY_COLUMN};
use crate::utils::filename::yearly_file_path;
use crate::utils::timestamp::parse_day_first;
use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Result of attempting one year. A missing file is not an error.
#[derive(Debug, Clone)]
pub enum YearStatus {
    Loaded(YearlyTable),
    Missing { year: i32, path: PathBuf },
}

impl YearStatus {
    pub fn year(&self) -> i32 {
        match self {
            YearStatus::Loaded(table) => table.year,
            YearStatus::Missing { year, .. } => *year,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, YearStatus::Loaded(_))
    }
}

pub struct YearlyReader {
    key_column: String,
    delimiter: u8,
}

impl YearlyReader {
    pub fn new() -> Self {
        Self {
            key_column: KEY_COLUMN.to_string(),
            delimiter: FIELD_DELIMITER,
        }
    }

    pub fn with_key_column(key_column: &str) -> Self {
        Self {
            key_column: key_column.to_string(),
            delimiter: FIELD_DELIMITER,
        }
    }

    /// Load one year's export from the raw folder, deduplicated and sorted by key
    pub fn load(&self, raw_dir: &Path, year: i32) -> Result<YearStatus> {
        let path = yearly_file_path(raw_dir, year);
        if !path.is_file() {
            warn!(year, path = %path.display(), "yearly file not found, skipping");
            return Ok(YearStatus::Missing { year, path });
        }

        let mut table = self.read_table(&path)?;
        let dropped = table.dedup_and_sort();
        debug!(
            year,
            rows = table.num_rows(),
            columns = table.num_columns(),
            dropped,
            "loaded yearly table"
        );

        Ok(YearStatus::Loaded(YearlyTable {
            year,
            source: path,
            table,
        }))
    }

    /// Parse a whole file into a table in file order
    pub fn read_table(&self, path: &Path) -> Result<Table> {
        let bytes = fs::read(path)?;
        let text = decode_input(&bytes);
        if text.trim().is_empty() {
            return Err(ProcessingError::EmptyInput(path.to_path_buf()));
        }
        self.parse_table(&text, path)
    }

    fn parse_table(&self, text: &str, path: &Path) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(false)
            .from_reader(text.as_bytes());

        let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut table = Table::from_header(&header, &self.key_column).ok_or_else(|| {
            ProcessingError::MissingKeyColumn {
                path: path.to_path_buf(),
                column: self.key_column.clone(),
            }
        })?;
        let key_position = table.key_position();

        for result in reader.records() {
            let record = result?;
            let raw_key = record.get(key_position).unwrap_or_default();
            let key = parse_day_first(raw_key).ok_or_else(|| ProcessingError::InvalidTimestamp {
                path: path.to_path_buf(),
                line: record.position().map(|p| p.line()).unwrap_or(0),
                value: raw_key.to_string(),
            })?;

            let cells = record
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != key_position)
                .map(|(_, field)| CellValue::parse(field))
                .collect();
            table.push_row(Row::new(key, cells))?;
        }

        Ok(table)
    }
}

impl Default for YearlyReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode raw file bytes: UTF-8 (BOM stripped) when valid, Windows-1252 otherwise
pub fn decode_input(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            debug!("input is not valid UTF-8, decoding as Windows-1252");
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text
        }
    }
}
