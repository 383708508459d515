// src/kpi.rs
//! KPIs: single summary numbers shown above a page's tables.
//!
//! Aggregates skip cells that aren't numbers (empty, `NaN`, text). `max_of`
//! starts from 0 so an empty or all-blank column reads as 0 rather than -∞.

use crate::record::RowRecord;

#[derive(Clone, Debug, PartialEq)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    /// Highlighted (orange) in the KPI strip.
    pub accent: bool,
}

impl Kpi {
    pub fn new(label: &str, value: String) -> Self {
        Self { label: s!(label), value, accent: false }
    }

    pub fn accent(label: &str, value: String) -> Self {
        Self { label: s!(label), value, accent: true }
    }
}

fn numbers<'a>(rows: &'a [RowRecord], key: &'a str) -> impl Iterator<Item = f64> + 'a {
    rows.iter().map(move |r| r.number(key)).filter(|v| !v.is_nan())
}

/// Largest value in a column, floored at 0.
pub fn max_of(rows: &[RowRecord], key: &str) -> f64 {
    numbers(rows, key).fold(0.0, f64::max)
}

pub fn sum_of(rows: &[RowRecord], key: &str) -> f64 {
    numbers(rows, key).sum()
}

/// Mean over the numeric cells only; NaN when there are none.
pub fn mean_of(rows: &[RowRecord], key: &str) -> f64 {
    let (sum, n) = numbers(rows, key).fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

pub fn count(rows: &[RowRecord]) -> f64 {
    rows.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RowRecord> {
        vec![
            record! { "score" => "10.5", "matches" => "3" },
            record! { "score" => "", "matches" => "2" },
            record! { "score" => "7", "matches" => "abc" },
        ]
    }

    #[test]
    fn aggregates_skip_non_numbers() {
        let rs = rows();
        assert_eq!(max_of(&rs, "score"), 10.5);
        assert_eq!(sum_of(&rs, "matches"), 5.0);
        assert_eq!(mean_of(&rs, "score"), 8.75);
        assert_eq!(count(&rs), 3.0);
    }

    #[test]
    fn empty_columns() {
        let rs = rows();
        assert_eq!(max_of(&rs, "missing"), 0.0);
        assert_eq!(sum_of(&[], "x"), 0.0);
        assert!(mean_of(&rs, "missing").is_nan());
    }

    #[test]
    fn max_is_floored_at_zero() {
        let rs = vec![record! { "delta" => "-4" }];
        assert_eq!(max_of(&rs, "delta"), 0.0);
    }
}
