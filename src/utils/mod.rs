pub mod constants;
pub mod decimal;
pub mod filename;
pub mod timestamp;

pub use constants::*;
pub use decimal::{format_float, parse_decimal, parse_integer};
pub use filename::{combined_file_path, yearly_file_name, yearly_file_path};
pub use timestamp::{format_key, is_midnight, parse_day_first};
