use crate::error::{ProcessingError, Result};
use crate::models::value::{CellValue, ColumnKind};
use crate::utils::timestamp::is_midnight;
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

/// One record: the temporal key plus one cell per non-key column
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: NaiveDateTime,
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(key: NaiveDateTime, cells: Vec<CellValue>) -> Self {
        Self { key, cells }
    }
}

/// Row and column count, including the key column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.columns)
    }
}

/// A keyed table. The key column is stored apart from the other columns and
/// re-inserted at `key_position` when the header is rebuilt.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    key_column: String,
    key_position: usize,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(key_column: impl Into<String>, key_position: usize, columns: Vec<String>) -> Self {
        let key_position = key_position.min(columns.len());
        Self {
            key_column: key_column.into(),
            key_position,
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from a full header, locating the key column in it
    pub fn from_header(header: &[String], key_column: &str) -> Option<Self> {
        let key_position = header.iter().position(|name| name == key_column)?;
        let columns = header
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != key_position)
            .map(|(_, name)| name.clone())
            .collect();
        Some(Self::new(key_column, key_position, columns))
    }

    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    pub fn key_position(&self) -> usize {
        self.key_position
    }

    /// Non-key column names in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Add a non-key column (if absent) and return its index. Existing rows
    /// get a missing cell for it.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.cells.push(CellValue::Missing);
        }
        self.columns.len() - 1
    }

    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if row.cells.len() != self.columns.len() {
            return Err(ProcessingError::InvalidFormat(format!(
                "Row at {} has {} fields, expected {}",
                row.key,
                row.cells.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Full header with the key column at its original position
    pub fn header(&self) -> Vec<&str> {
        let mut header: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        header.insert(self.key_position, &self.key_column);
        header
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len() + 1
    }

    pub fn shape(&self) -> Shape {
        Shape {
            rows: self.num_rows(),
            columns: self.num_columns(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop every row whose key was already seen (first occurrence wins),
    /// then order ascending by key. Returns the number of rows dropped.
    pub fn dedup_and_sort(&mut self) -> usize {
        let before = self.rows.len();
        let mut seen = HashSet::with_capacity(before);
        self.rows.retain(|row| seen.insert(row.key));
        self.rows.sort_by_key(|row| row.key);
        before - self.rows.len()
    }

    /// True when keys are unique and ascending
    pub fn is_strictly_sorted(&self) -> bool {
        self.rows.windows(2).all(|pair| pair[0].key < pair[1].key)
    }

    /// Output rendering for every non-key column
    pub fn column_kinds(&self) -> Vec<ColumnKind> {
        (0..self.columns.len())
            .map(|i| ColumnKind::infer(self.rows.iter().map(|row| &row.cells[i])))
            .collect()
    }

    /// Whether every key carries no time of day
    pub fn keys_are_dates(&self) -> bool {
        self.rows.iter().all(|row| is_midnight(&row.key))
    }
}

/// The cleaned contents of one year's export
#[derive(Debug, Clone)]
pub struct YearlyTable {
    pub year: i32,
    pub source: PathBuf,
    pub table: Table,
}

impl YearlyTable {
    pub fn shape(&self) -> Shape {
        self.table.shape()
    }
}

/// The deduplicated, sorted union of all loaded years
#[derive(Debug, Clone)]
pub struct CombinedTable {
    pub years: Vec<i32>,
    pub table: Table,
}

impl CombinedTable {
    pub fn shape(&self) -> Shape {
        self.table.shape()
    }
}
