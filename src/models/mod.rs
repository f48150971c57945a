pub mod table;
pub mod value;

pub use table::{CombinedTable, Row, Shape, Table, YearlyTable};
pub use value::{CellValue, ColumnKind};
