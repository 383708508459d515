// src/record.rs
//! `RowRecord`: one decoded CSV data row, keyed by header name.
//!
//! Records are immutable once built. Typed access goes through views
//! (`number`, `value`) and derived copies (`with_value`); nothing hands out a
//! mutable reference to the underlying fields.
//!
//! Key order follows the header. A header that repeats a name keeps the first
//! position and the value of the last occurrence.

use indexmap::IndexMap;

use crate::core::number::to_number;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowRecord {
    fields: IndexMap<String, String>,
}

impl RowRecord {
    /// Field value, if the column exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Field value, or `""` for a column this record doesn't have.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Numeric view of a field; NaN when missing or not a number.
    pub fn number(&self, key: &str) -> f64 {
        to_number(self.value(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copy of this record with `key` set to `value` (appended if new).
    pub fn with_value(&self, key: &str, value: impl Into<String>) -> RowRecord {
        let mut fields = self.fields.clone();
        fields.insert(s!(key), value.into());
        RowRecord { fields }
    }
}

impl FromIterator<(String, String)> for RowRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut fields = IndexMap::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        RowRecord { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_empty() {
        let r = record! { "nick" => "Ana" };
        assert_eq!(r.get("tag"), None);
        assert_eq!(r.value("tag"), "");
        assert!(r.number("tag").is_nan());
    }

    #[test]
    fn with_value_leaves_original_untouched() {
        let r = record! { "team_position" => "JUNGLE", "nick" => "Ana" };
        let r2 = r.with_value("team_position", "JG");
        assert_eq!(r.value("team_position"), "JUNGLE");
        assert_eq!(r2.value("team_position"), "JG");
        assert_eq!(r2.keys().collect::<Vec<_>>(), vec!["team_position", "nick"]);
    }

    #[test]
    fn duplicate_keys_keep_first_slot_last_value() {
        let r: RowRecord = vec![
            (s!("a"), s!("1")),
            (s!("b"), s!("2")),
            (s!("a"), s!("3")),
        ]
        .into_iter()
        .collect();
        assert_eq!(r.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(r.value("a"), "3");
    }
}
