// src/core/number.rs
//
// Numeric coercion for CSV cells. Loose on purpose: exports carry things like
// " 12 ", "1e3", "0x1F" or "Infinity", and every one of them should sort as a
// number. Anything that isn't a number (including the empty string) is NaN, so
// it lands after the real numbers in either sort direction.

use super::sanitize::trim_cell;

pub fn to_number(raw: &str) -> f64 {
    let s = trim_cell(raw);
    if s.is_empty() {
        return f64::NAN;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(v) = parse_radix_literal(s) {
        return v;
    }

    // Rust accepts "inf", "nan", "infinity" in any case; those are text here.
    let bytes = s.as_bytes();
    let plausible = bytes
        .iter()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !plausible {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// "0x1f", "0o17", "0b101" (unsigned only). Accumulated in f64, so literals
/// wider than 64 bits still read as large finite numbers.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(to_number("5"), 5.0);
        assert_eq!(to_number(" 12.5 "), 12.5);
        assert_eq!(to_number("-3"), -3.0);
        assert_eq!(to_number("1e3"), 1000.0);
        assert_eq!(to_number(".5"), 0.5);
    }

    #[test]
    fn literals() {
        assert_eq!(to_number("0x1F"), 31.0);
        assert_eq!(to_number("0b101"), 5.0);
        assert_eq!(to_number("Infinity"), f64::INFINITY);
        assert_eq!(to_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn wide_literals_stay_finite() {
        let wide = to_number("0xFFFFFFFFFFFFFFFFF");
        assert!(wide.is_finite());
        assert_eq!(wide, 2f64.powi(68));
        assert_eq!(to_number("0o777"), 511.0);
        assert!(to_number("0x1G").is_nan());
    }

    #[test]
    fn non_numbers_are_nan() {
        assert!(to_number("").is_nan());
        assert!(to_number("   ").is_nan());
        assert!(to_number("abc").is_nan());
        assert!(to_number("NaN").is_nan());
        assert!(to_number("inf").is_nan());
        assert!(to_number("12abc").is_nan());
        assert!(to_number("0x").is_nan());
        assert!(to_number("1,5").is_nan());
    }
}
