// src/core/sanitize.rs

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Decompose (NFD) and drop combining marks: "José" → "Jose".
pub fn fold_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Search/sort key for free text: diacritics folded, lower-cased.
/// Used for both the query and the haystack so the two always agree.
pub fn normalize_text(s: &str) -> String {
    fold_diacritics(s).to_lowercase()
}

/// Trim like a browser does: Unicode whitespace plus a stray BOM.
pub fn trim_cell(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(normalize_text("José"), "jose");
        assert_eq!(normalize_text("ÁÉÍÓÚ ãõ ç"), "aeiou ao c");
        assert_eq!(normalize_text("Vitórias"), "vitorias");
    }

    #[test]
    fn leaves_plain_ascii_alone() {
        assert_eq!(normalize_text("abc#123"), "abc#123");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn trim_cell_strips_bom_and_spaces() {
        assert_eq!(trim_cell("\u{feff} nick \t"), "nick");
        assert_eq!(trim_cell("   "), "");
    }
}
