use crate::error::Result;
use crate::utils::constants::{
    CONFIG_FILE_STEM, DEFAULT_INTERIM_DIR, DEFAULT_RAW_DIR, DEFAULT_YEARS, ENV_PREFIX,
};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::{Validate, ValidationError};

/// Which years to merge and where the files live.
///
/// Values not set by any source fall back to [`MergerConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(default)]
pub struct MergerConfig {
    #[validate(length(min = 1), custom(function = "validate_unique_years"))]
    pub years: Vec<i32>,

    /// Folder holding the df_{year}.csv exports
    pub raw_dir: PathBuf,

    /// Folder receiving the combined dataset
    pub interim_dir: PathBuf,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            years: DEFAULT_YEARS.to_vec(),
            raw_dir: PathBuf::from(DEFAULT_RAW_DIR),
            interim_dir: PathBuf::from(DEFAULT_INTERIM_DIR),
        }
    }
}

impl MergerConfig {
    pub fn new(years: Vec<i32>, raw_dir: impl Into<PathBuf>, interim_dir: impl Into<PathBuf>) -> Self {
        Self {
            years,
            raw_dir: raw_dir.into(),
            interim_dir: interim_dir.into(),
        }
    }

    /// Layer the compiled-in defaults, a config file and `MERGER_*` environment
    /// variables, then validate the result.
    ///
    /// Without an explicit `config_file`, `dataset-merger.{toml,json,yaml}` in
    /// the working directory is picked up when present.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file_source = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_FILE_STEM).required(false),
        };

        let settings = Config::builder()
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("years"),
            )
            .build()?;

        let config: MergerConfig = settings.try_deserialize()?;
        config.validate()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }
}

#[allow(clippy::ptr_arg)]
fn validate_unique_years(years: &Vec<i32>) -> std::result::Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(years.len());
    if years.iter().all(|year| seen.insert(*year)) {
        Ok(())
    } else {
        Err(ValidationError::new("duplicate_year"))
    }
}
