use crate::utils::constants::{COMBINED_FILE_NAME, CSV_EXTENSION, YEARLY_FILE_PREFIX};
use std::path::{Path, PathBuf};

/// File name of one year's export: df_{year}.csv
pub fn yearly_file_name(year: i32) -> String {
    format!("{}{}.{}", YEARLY_FILE_PREFIX, year, CSV_EXTENSION)
}

/// Expected location of one year's export inside the raw folder
pub fn yearly_file_path(raw_dir: &Path, year: i32) -> PathBuf {
    raw_dir.join(yearly_file_name(year))
}

/// Location of the combined dataset inside the interim folder
pub fn combined_file_path(interim_dir: &Path) -> PathBuf {
    interim_dir.join(COMBINED_FILE_NAME)
}
