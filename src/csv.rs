// src/csv.rs
//! CSV decoding for the dashboard exports.
//!
//! Exports come from more than one tool: most are comma-separated, some regional
//! ones use `;`, a few are tab-separated, and some carry a BOM or CRLF endings.
//! `decode` handles all of that without a format flag.
//!
//! Rules worth knowing:
//! - The delimiter is sniffed from the first non-blank line only.
//! - Quotes may open anywhere in a field; `""` inside quotes is one literal `"`.
//! - A delimiter or line feed inside quotes is ordinary text.
//! - A blank line mid-file is a row of empty values; trailing blank lines are dropped.
//! - Header-only (or empty) input decodes to no records.

use std::mem::take;

use crate::core::sanitize::trim_cell;
use crate::record::RowRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Comma,
    Semicolon,
    Tab,
}

impl Delim {
    pub fn as_char(self) -> char {
        match self {
            Delim::Comma => ',',
            Delim::Semicolon => ';',
            Delim::Tab => '\t',
        }
    }
}

/* ---------------- Decoding ---------------- */

/// Text of one CSV resource → records, in source order.
pub fn decode(text: &str) -> Vec<RowRecord> {
    if text.is_empty() {
        return Vec::new();
    }
    let text = normalize_newlines(strip_bom(text));
    let delim = detect_delimiter(&text);
    let rows = parse_rows(&text, delim);
    rows_to_records(rows)
}

/// Sniff the delimiter from the first non-blank line.
/// Semicolon wins only when it outnumbers commas and ties-or-beats tabs;
/// tab must strictly beat both; otherwise comma.
pub fn detect_delimiter(text: &str) -> Delim {
    let first = text
        .split('\n')
        .find(|l| !trim_cell(l).is_empty())
        .unwrap_or("");

    let count = |c: char| first.chars().filter(|&x| x == c).count();
    let (comma, semi, tab) = (count(','), count(';'), count('\t'));

    if semi > comma && semi >= tab {
        Delim::Semicolon
    } else if tab > comma && tab > semi {
        Delim::Tab
    } else {
        Delim::Comma
    }
}

/// Raw row scan over LF-normalized text. Trailing all-empty rows are dropped.
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.as_char();
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if matches!(chars.peek(), Some('"')) {
                    chars.next(); // doubled quote
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            '\n' => {
                row.push(take(&mut field));
                rows.push(take(&mut row));
            }
            c if c == sep => row.push(take(&mut field)),
            _ => field.push(ch),
        }
    }

    // Input without a trailing newline (or with an unterminated quote)
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    while rows.last().is_some_and(|r| r.iter().all(|v| v.is_empty())) {
        rows.pop();
    }
    rows
}

fn rows_to_records(rows: Vec<Vec<String>>) -> Vec<RowRecord> {
    let mut it = rows.into_iter();
    let Some(header) = it.next() else {
        return Vec::new();
    };
    let header: Vec<String> = header.iter().map(|h| s!(trim_cell(h))).collect();

    it.map(|cells| {
        header
            .iter()
            .enumerate()
            .map(|(c, key)| {
                let v = cells.get(c).map(|v| trim_cell(v)).unwrap_or("");
                let v = if v == "NaN" { "" } else { v };
                (key.clone(), s!(v))
            })
            .collect()
    })
    .collect()
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// CRLF and lone CR → LF.
fn normalize_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if matches!(chars.peek(), Some('\n')) {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newline_normalization() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_newlines("\r\r\n"), "\n\n");
    }

    #[test]
    fn detect_skips_blank_leading_lines() {
        assert_eq!(detect_delimiter("\n   \na;b;c\n1;2;3"), Delim::Semicolon);
    }

    #[test]
    fn detect_tie_rules() {
        // semicolon ties tab and beats comma → semicolon
        assert_eq!(detect_delimiter("a;b\tc"), Delim::Semicolon);
        // tab must strictly beat both
        assert_eq!(detect_delimiter("a\tb\tc,d,e"), Delim::Comma);
        assert_eq!(detect_delimiter("a\tb\tc;d"), Delim::Tab);
        // no delimiter at all
        assert_eq!(detect_delimiter("single"), Delim::Comma);
        assert_eq!(detect_delimiter(""), Delim::Comma);
    }

    #[test]
    fn blank_line_in_the_middle_is_a_row() {
        let rows = parse_rows("h1,h2\n\nx,y\n", Delim::Comma);
        assert_eq!(rows, vec![vec!["h1", "h2"], vec![""], vec!["x", "y"]]);
    }

    #[test]
    fn trailing_empty_rows_dropped() {
        let rows = parse_rows("h\nv\n\n,\n\n", Delim::Comma);
        assert_eq!(rows, vec![vec!["h"], vec!["v"]]);
    }

    #[test]
    fn quote_opens_mid_field() {
        let rows = parse_rows("ab\"c,d\"e,f", Delim::Comma);
        assert_eq!(rows, vec![vec!["abc,de", "f"]]);
    }

    #[test]
    fn unterminated_quote_swallows_rest() {
        let rows = parse_rows("a,\"b,c\nd", Delim::Comma);
        assert_eq!(rows, vec![vec!["a", "b,c\nd"]]);
    }
}
