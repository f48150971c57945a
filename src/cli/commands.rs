use crate::cli::args::Cli;
use crate::config::MergerConfig;
use crate::error::Result;
use crate::processors::{DataMerger, RunOutcome};
use crate::readers::YearStatus;
use crate::utils::constants::NOTHING_LOADED_MESSAGE;
use crate::utils::filename::yearly_file_name;

pub fn run(cli: Cli) -> Result<()> {
    let config = MergerConfig::load(cli.config.as_deref())?;
    let merger = DataMerger::new(config);

    let outcome = merger.run(|status| println!("{}", status_line(status)))?;

    match outcome {
        RunOutcome::Written { path, shape, .. } => {
            println!("Combined dataset saved to: {}", path.display());
            println!("Final shape: {}", shape);
        }
        RunOutcome::NothingLoaded => {
            println!("{}", NOTHING_LOADED_MESSAGE);
        }
    }

    Ok(())
}

/// Console line reported for one year
pub fn status_line(status: &YearStatus) -> String {
    match status {
        YearStatus::Loaded(table) => format!(
            "Loaded {}: shape {}",
            yearly_file_name(table.year),
            table.shape()
        ),
        YearStatus::Missing { year, path } => format!(
            "Warning: File for year {} not found at {}",
            year,
            path.display()
        ),
    }
}
