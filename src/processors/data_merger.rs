use crate::config::MergerConfig;
use crate::error::{ProcessingError, Result};
use crate::models::{CellValue, CombinedTable, Row, Shape, YearlyTable};
use crate::readers::{YearStatus, YearlyReader};
use crate::utils::filename::combined_file_path;
use crate::writers::CsvWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How a run ended. Loading nothing is a clean no-op, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Written {
        path: PathBuf,
        shape: Shape,
        years: Vec<i32>,
    },
    NothingLoaded,
}

pub struct DataMerger {
    config: MergerConfig,
    reader: YearlyReader,
    writer: CsvWriter,
}

impl DataMerger {
    pub fn new(config: MergerConfig) -> Self {
        Self {
            config,
            reader: YearlyReader::new(),
            writer: CsvWriter::new(),
        }
    }

    pub fn config(&self) -> &MergerConfig {
        &self.config
    }

    /// Destination of the combined dataset
    pub fn output_path(&self) -> PathBuf {
        combined_file_path(&self.config.interim_dir)
    }

    /// Load one configured year from the raw folder
    pub fn load(&self, year: i32) -> Result<YearStatus> {
        self.reader.load(&self.config.raw_dir, year)
    }

    /// Load every configured year in order, reporting each status as it is
    /// known. Stops at the first malformed file.
    pub fn load_all<F>(&self, mut on_status: F) -> Result<Vec<YearlyTable>>
    where
        F: FnMut(&YearStatus),
    {
        let mut tables = Vec::with_capacity(self.config.years.len());
        for &year in &self.config.years {
            let status = self.load(year)?;
            on_status(&status);
            if let YearStatus::Loaded(table) = status {
                tables.push(table);
            }
        }
        Ok(tables)
    }

    /// Concatenate yearly tables, then drop repeated keys (earliest table wins)
    /// and sort ascending. Returns `None` when there is nothing to merge.
    pub fn merge(&self, tables: Vec<YearlyTable>) -> Result<Option<CombinedTable>> {
        let mut tables = tables.into_iter();
        let Some(first) = tables.next() else {
            return Ok(None);
        };

        let mut years = vec![first.year];
        let mut combined = first.table;
        let mut input_rows = combined.num_rows();

        for yearly in tables {
            if yearly.table.key_column() != combined.key_column() {
                return Err(ProcessingError::KeyColumnMismatch {
                    expected: combined.key_column().to_string(),
                    found: yearly.table.key_column().to_string(),
                });
            }

            // Position of each of this year's columns in the union
            let mapping: Vec<usize> = yearly
                .table
                .columns()
                .iter()
                .map(|name| combined.ensure_column(name))
                .collect();
            let width = combined.columns().len();

            years.push(yearly.year);
            input_rows += yearly.table.num_rows();

            for row in yearly.table.into_rows() {
                let mut cells = vec![CellValue::Missing; width];
                for (index, cell) in row.cells.into_iter().enumerate() {
                    cells[mapping[index]] = cell;
                }
                combined.push_row(Row::new(row.key, cells))?;
            }
        }

        let dropped = combined.dedup_and_sort();
        debug!(
            input_rows,
            dropped,
            rows = combined.num_rows(),
            columns = combined.num_columns(),
            "merged yearly tables"
        );

        Ok(Some(CombinedTable {
            years,
            table: combined,
        }))
    }

    /// Write the combined table; either the whole file lands or nothing does
    pub fn persist(&self, combined: &CombinedTable, destination: &Path) -> Result<()> {
        self.writer.write_combined(combined, destination)?;
        info!(
            path = %destination.display(),
            rows = combined.table.num_rows(),
            "combined dataset written"
        );
        Ok(())
    }

    /// Load, merge and persist in one pass
    pub fn run<F>(&self, on_status: F) -> Result<RunOutcome>
    where
        F: FnMut(&YearStatus),
    {
        let tables = self.load_all(on_status)?;

        let Some(combined) = self.merge(tables)? else {
            info!("no yearly tables loaded, nothing written");
            return Ok(RunOutcome::NothingLoaded);
        };

        let path = self.output_path();
        self.persist(&combined, &path)?;

        Ok(RunOutcome::Written {
            path,
            shape: combined.shape(),
            years: combined.years,
        })
    }
}
