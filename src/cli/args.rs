use clap::Parser;
use std::path::PathBuf;

/// With no arguments the tool merges df_2021..df_2024 from data/raw into
/// data/interim/df_all_years.csv.
#[derive(Parser, Debug)]
#[command(name = "dataset-merger")]
#[command(about = "Merge yearly semicolon-delimited CSV exports into one sorted, duplicate-free dataset")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        long,
        help = "Configuration file overriding years and folders [default: ./dataset-merger.toml if present]"
    )]
    pub config: Option<PathBuf>,
}
