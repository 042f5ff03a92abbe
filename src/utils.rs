//! Utility functions for string processing.

/// Normalize a keyword or query for lookup: lowercase and trim.
///
/// Deliberately minimal. No stemming, no diacritic stripping, no whitespace
/// collapsing: `"React  Native"` stays two spaces apart, so it will only ever
/// match a keyword authored the same way.
///
/// - "React" → "react"
/// - "  Web App " → "web app"
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Case-insensitive substring test against an already-lowercased needle.
#[inline]
pub fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
