// src/core/format.rs
//
// Display formatting for numbers in cells, badges and KPIs.
// Every formatter renders a non-number as the placeholder, never as "NaN" or "".

use crate::config::consts::PLACEHOLDER;
use super::number::to_number;

/// Fixed decimals with thousands grouping: 1234.5 → "1,234.5".
pub fn format_number(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return s!(PLACEHOLDER);
    }
    group_thousands(&round_decimal(v, decimals))
}

/// Same as `format_number` with a unit appended ("12.0%", "3.50 KDA").
pub fn format_number_suffixed(v: f64, decimals: usize, suffix: &str) -> String {
    if !v.is_finite() {
        return s!(PLACEHOLDER);
    }
    join!(format_number(v, decimals), suffix)
}

/// Rounded (half up) integer with grouping.
pub fn format_int(v: f64) -> String {
    if !v.is_finite() {
        return s!(PLACEHOLDER);
    }
    let rounded = (v + 0.5).floor();
    format_number(rounded, 0)
}

pub fn format_percent(v: f64, decimals: usize) -> String {
    format_number_suffixed(v, decimals, "%")
}

/* ---------------- Cell formatters (raw CSV text in) ---------------- */

pub fn int_cell(raw: &str) -> String {
    format_int(to_number(raw))
}

pub fn number_cell(raw: &str, decimals: usize) -> String {
    format_number(to_number(raw), decimals)
}

pub fn percent_cell(raw: &str, decimals: usize) -> String {
    format_percent(to_number(raw), decimals)
}

/// Plain decimal rendering with `decimals` digits after the point. Rounds the
/// shortest representation of `v` (what `{}` prints), half away from zero, so
/// 71.25 gives "71.3" even though its binary value sits just below the tie.
fn round_decimal(v: f64, decimals: usize) -> String {
    let shortest = format!("{}", v.abs());
    let (int_part, frac_part) = match shortest.split_once('.') {
        Some((i, f)) => (i, f),
        None => (shortest.as_str(), ""),
    };

    let kept = frac_part.len().min(decimals);
    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part[..kept].bytes()).collect();
    digits.resize(int_part.len() + decimals, b'0');

    let round_up = frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5');
    let mut int_len = int_part.len();
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if v.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|&b| b as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&b| b as char));
    }
    out
}

/// "-1234567.25" → "-1,234,567.25". Input must be a plain decimal rendering.
fn group_thousands(plain: &str) -> String {
    let (sign, rest) = match plain.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", plain),
    };
    let (int_part, frac_part) = match rest.find('.') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };

    // "-0" / "-0.0" read as zero
    let is_zero = int_part.bytes().chain(frac_part.bytes()).all(|b| b == b'0' || b == b'.');
    let sign = if is_zero { "" } else { sign };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    join!(sign, &grouped, frac_part)
}
