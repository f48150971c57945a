use crate::utils::constants::DECIMAL_SEPARATOR;

/// Parse an optionally signed run of ASCII digits
pub fn parse_integer(value: &str) -> Option<i64> {
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<i64>().ok()
}

/// Parse a number written with a comma as fractional separator (`1,5`, `-0,25`, `1,5e-3`).
///
/// A dot is never accepted, so values such as `1.5` or `1.234,5` stay text.
pub fn parse_decimal(value: &str) -> Option<f64> {
    if !value.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut separators = 0;
    for c in value.chars() {
        match c {
            '0'..='9' | '+' | '-' | 'e' | 'E' => {}
            c if c == DECIMAL_SEPARATOR => separators += 1,
            _ => return None,
        }
    }
    if separators > 1 {
        return None;
    }

    value
        .replace(DECIMAL_SEPARATOR, ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Render a float with the comma fractional separator, in the shortest form
/// that reads back to the same value.
///
/// Magnitudes in `[1e-4, 1e16)` are positional and whole numbers keep one
/// fractional digit (`3,0`). Outside that range the exponent is signed and at
/// least two digits wide (`1e-05`, `1,5e+16`), the layout dataframe exports use.
pub fn format_float(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let rendered = if !value.is_finite() || (-4..16).contains(&exponent) {
        let positional = value.to_string();
        if value.is_finite() && !positional.contains('.') {
            format!("{}.0", positional)
        } else {
            positional
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    };

    rendered.replace('.', &DECIMAL_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("-7"), Some(-7));
        assert_eq!(parse_integer("+3"), Some(3));
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer("1,5"), None);
        assert_eq!(parse_integer("12a"), None);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1,5"), Some(1.5));
        assert_eq!(parse_decimal("-0,25"), Some(-0.25));
        assert_eq!(parse_decimal("1,5e-3"), Some(0.0015));
        assert_eq!(parse_decimal("3"), Some(3.0));
    }

    #[test]
    fn test_parse_decimal_rejects_dot_and_text() {
        assert_eq!(parse_decimal("1.5"), None);
        assert_eq!(parse_decimal("1.234,5"), None);
        assert_eq!(parse_decimal("1,2,3"), None);
        assert_eq!(parse_decimal("n/a"), None);
        assert_eq!(parse_decimal(","), None);
        assert_eq!(parse_decimal("e"), None);
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.5), "1,5");
        assert_eq!(format_float(3.0), "3,0");
        assert_eq!(format_float(-0.25), "-0,25");
        assert_eq!(format_float(0.0001), "0,0001");
        assert_eq!(format_float(1e15), "1000000000000000,0");
    }

    #[test]
    fn test_format_float_exponents() {
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(0.00005), "5e-05");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(-1.5e16), "-1,5e+16");
        assert_eq!(format_float(2.5e-123), "2,5e-123");
        assert_eq!(parse_decimal(&format_float(1.5e16)), Some(1.5e16));
    }
}
