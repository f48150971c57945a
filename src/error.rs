use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid timestamp '{value}' in {} at line {line}", path.display())]
    InvalidTimestamp {
        path: PathBuf,
        line: u64,
        value: String,
    },

    #[error("Key column '{column}' not found in {} (wrong delimiter?)", path.display())]
    MissingKeyColumn { path: PathBuf, column: String },

    #[error("Key column mismatch: expected '{expected}', found '{found}'")]
    KeyColumnMismatch { expected: String, found: String },

    #[error("Input file {} is empty", .0.display())]
    EmptyInput(PathBuf),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Failed to persist output: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
