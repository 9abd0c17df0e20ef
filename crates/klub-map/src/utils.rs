/// Normalizes a header for comparison: strips a UTF-8 BOM, trims, lowercases
/// and collapses internal whitespace. Punctuation is kept so that legacy
/// column names like `dat_od` stay matchable by their own fragments.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
