pub mod yearly_reader;

pub use yearly_reader::{decode_input, YearStatus, YearlyReader};
