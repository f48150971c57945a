pub mod data_merger;

pub use data_merger::{DataMerger, RunOutcome};
