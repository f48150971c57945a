/// Field separator used by the yearly exports and the combined output
pub const FIELD_DELIMITER: u8 = b';';

/// Fractional separator for decimal numbers
pub const DECIMAL_SEPARATOR: char = ',';

/// Column holding the day-first timestamp every row is keyed on
pub const KEY_COLUMN: &str = "Datum von";

/// File naming
pub const YEARLY_FILE_PREFIX: &str = "df_";
pub const CSV_EXTENSION: &str = "csv";
pub const COMBINED_FILE_NAME: &str = "df_all_years.csv";

/// Default locations, relative to the working directory
pub const DEFAULT_RAW_DIR: &str = "data/raw";
pub const DEFAULT_INTERIM_DIR: &str = "data/interim";
pub const DEFAULT_YEARS: [i32; 4] = [2021, 2022, 2023, 2024];

/// Configuration sources
pub const CONFIG_FILE_STEM: &str = "dataset-merger";
pub const ENV_PREFIX: &str = "MERGER";

/// Output timestamp renderings
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const OUTPUT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Console message printed when no year could be loaded
pub const NOTHING_LOADED_MESSAGE: &str = "No yearly DataFrames were loaded. Check file paths.";
