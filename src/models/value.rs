use crate::utils::decimal::{format_float, parse_decimal, parse_integer};

/// One non-key field of a row.
///
/// Numeric cells keep the field as it was written, so a column that ends up
/// holding text writes `007` or `1e5` back unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Missing,
    Integer { value: i64, raw: String },
    Float { value: f64, raw: String },
    Text(String),
}

/// How a column is rendered on output, inferred over all of its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// No cell carries a value
    Empty,
    /// Every cell is an integer
    Integer,
    /// Numeric with at least one float, or integers with gaps
    Float,
    /// At least one cell is text; every cell renders as written
    Text,
}

impl CellValue {
    /// Interpret a raw CSV field
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Missing;
        }
        if let Some(value) = parse_integer(trimmed) {
            return CellValue::Integer {
                value,
                raw: raw.to_string(),
            };
        }
        if let Some(value) = parse_decimal(trimmed) {
            return CellValue::Float {
                value,
                raw: raw.to_string(),
            };
        }
        CellValue::Text(raw.to_string())
    }

    /// Integer cell whose written form is its canonical rendering
    pub fn integer(value: i64) -> Self {
        CellValue::Integer {
            value,
            raw: value.to_string(),
        }
    }

    /// Float cell whose written form is its canonical rendering
    pub fn float(value: f64) -> Self {
        CellValue::Float {
            value,
            raw: format_float(value),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn render(&self, kind: ColumnKind) -> String {
        match self {
            CellValue::Missing => String::new(),
            CellValue::Integer { raw, .. } | CellValue::Float { raw, .. }
                if kind == ColumnKind::Text =>
            {
                raw.clone()
            }
            CellValue::Integer { value, .. } if kind == ColumnKind::Float => {
                format_float(*value as f64)
            }
            CellValue::Integer { value, .. } => value.to_string(),
            CellValue::Float { value, .. } => format_float(*value),
            CellValue::Text(value) => value.clone(),
        }
    }
}

impl ColumnKind {
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let mut has_integer = false;
        let mut has_float = false;
        let mut has_missing = false;

        for cell in cells {
            match cell {
                CellValue::Missing => has_missing = true,
                CellValue::Integer { .. } => has_integer = true,
                CellValue::Float { .. } => has_float = true,
                CellValue::Text(_) => return ColumnKind::Text,
            }
        }

        if has_float || (has_integer && has_missing) {
            ColumnKind::Float
        } else if has_integer {
            ColumnKind::Integer
        } else {
            ColumnKind::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_column(cells: &[CellValue]) -> Vec<String> {
        let kind = ColumnKind::infer(cells);
        cells.iter().map(|cell| cell.render(kind)).collect()
    }

    #[test]
    fn test_parse_cells() {
        assert_eq!(CellValue::parse(""), CellValue::Missing);
        assert_eq!(CellValue::parse("  "), CellValue::Missing);
        assert_eq!(CellValue::parse("12"), CellValue::integer(12));
        assert!(matches!(
            CellValue::parse(" 2,5 "),
            CellValue::Float { value, .. } if value == 2.5
        ));
        assert_eq!(
            CellValue::parse("Station Nord"),
            CellValue::Text("Station Nord".to_string())
        );
        assert_eq!(CellValue::parse("1.5"), CellValue::Text("1.5".to_string()));
    }

    #[test]
    fn test_parse_keeps_written_form() {
        assert_eq!(
            CellValue::parse("007"),
            CellValue::Integer {
                value: 7,
                raw: "007".to_string()
            }
        );
        assert_eq!(
            CellValue::parse("1e5"),
            CellValue::Float {
                value: 100000.0,
                raw: "1e5".to_string()
            }
        );
    }

    #[test]
    fn test_default_is_missing() {
        assert_eq!(CellValue::default(), CellValue::Missing);
    }

    #[test]
    fn test_infer_kinds() {
        let ints = [CellValue::integer(1), CellValue::integer(2)];
        assert_eq!(ColumnKind::infer(&ints), ColumnKind::Integer);

        let mixed = [CellValue::integer(1), CellValue::float(2.5)];
        assert_eq!(ColumnKind::infer(&mixed), ColumnKind::Float);

        let gappy = [CellValue::integer(1), CellValue::Missing];
        assert_eq!(ColumnKind::infer(&gappy), ColumnKind::Float);

        let text = [CellValue::float(1.0), CellValue::Text("x".to_string())];
        assert_eq!(ColumnKind::infer(&text), ColumnKind::Text);

        let empty = [CellValue::Missing, CellValue::Missing];
        assert_eq!(ColumnKind::infer(&empty), ColumnKind::Empty);
    }

    #[test]
    fn test_render() {
        assert_eq!(CellValue::integer(3).render(ColumnKind::Integer), "3");
        assert_eq!(CellValue::integer(3).render(ColumnKind::Float), "3,0");
        assert_eq!(CellValue::integer(3).render(ColumnKind::Text), "3");
        assert_eq!(CellValue::float(1.5).render(ColumnKind::Float), "1,5");
        assert_eq!(CellValue::Missing.render(ColumnKind::Float), "");
    }

    #[test]
    fn test_numeric_column_renders_canonical() {
        let cells = [CellValue::parse("007"), CellValue::parse("1,50")];
        assert_eq!(render_column(&cells), vec!["7,0", "1,5"]);
    }

    #[test]
    fn test_text_column_renders_as_written() {
        let code = [
            CellValue::parse("007"),
            CellValue::parse("A1"),
            CellValue::parse("1e5"),
        ];
        assert_eq!(render_column(&code), vec!["007", "A1", "1e5"]);

        let value = [
            CellValue::parse("1,50"),
            CellValue::parse("2,25"),
            CellValue::parse("x"),
        ];
        assert_eq!(render_column(&value), vec!["1,50", "2,25", "x"]);
    }
}
