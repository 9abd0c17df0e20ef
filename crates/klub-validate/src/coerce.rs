//! Cell-level coercions. Every function is total: bad input becomes either
//! a default (for permissive fields) or a message for the row's problem
//! list, never a panic.

use chrono::NaiveDate;

/// Permissive count parsing: blank or unparsable cells coerce to zero.
/// Only use for fields where zero is a safe business default.
pub fn optional_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Permissive year parsing, same contract as [`optional_count`].
pub fn optional_year(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}

/// Strict positive-integer parsing for natural-key fields. Defaulting a
/// key to zero would silently collide records, so failure rejects the row.
pub fn required_key(label: &str, raw: &str) -> Result<u32, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{label}: value is required"));
    }
    match trimmed.parse::<u32>() {
        Ok(0) => Err(format!("{label}: must be 1 or greater")),
        Ok(value) => Ok(value),
        Err(_) => Err(format!("{label}: '{trimmed}' is not a whole number")),
    }
}

/// Date parsing for the formats club documents actually contain:
/// `DD.MM.YYYY` (non-padded tolerated) and ISO `YYYY-MM-DD`. Blank is not
/// an error; requiredness is the caller's rule.
pub fn parse_date(label: &str, raw: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = raw.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return Ok(None);
    }
    for format in ["%d.%m.%Y", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(Some(date));
        }
    }
    Err(format!(
        "{label}: '{trimmed}' is not a date (expected DD.MM.YYYY)"
    ))
}

/// Split a multi-line cell into an ordered list, discarding empty lines.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Attendance-style yes/no cell. Blank reads as "not present".
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "da" | "yes" | "y" | "x" | "1" | "true" | "+"
    )
}

/// Shallow email shape check; returns a problem message when the value is
/// present but clearly not an address.
pub fn check_email(label: &str, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains('@') {
        None
    } else {
        Some(format!("{label}: '{trimmed}' is not an e-mail address"))
    }
}
