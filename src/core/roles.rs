// src/core/roles.rs
//
// Role names arrive in several spellings: Riot's own (JUNGLE, BOTTOM, UTILITY),
// short forms (JG, ADC, SUP) and the odd synonym (BOT, SUPPORT). Everything is
// mapped onto the short form used across the dashboards.

use crate::config::consts::PLACEHOLDER;
use super::sanitize::trim_cell;

/// Canonical short role name. Unknown roles pass through trimmed;
/// blank input becomes the placeholder.
pub fn role_label(raw: &str) -> String {
    let raw = trim_cell(raw);
    if raw.is_empty() {
        return s!(PLACEHOLDER);
    }
    match canonical_role(raw) {
        Some(short) => s!(short),
        None => s!(raw),
    }
}

/// Known role → short form, case-insensitive.
pub fn canonical_role(raw: &str) -> Option<&'static str> {
    let short = match trim_cell(raw).to_uppercase().as_str() {
        "TOP" => "TOP",
        "JG" | "JUNGLE" => "JG",
        "MID" | "MIDDLE" => "MID",
        "ADC" | "BOTTOM" | "BOT" => "ADC",
        "SUP" | "UTILITY" | "SUPPORT" => "SUP",
        _ => return None,
    };
    Some(short)
}
