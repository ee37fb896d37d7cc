//! Similarity scoring for header-to-field matching.
//!
//! Jaro-Winkler similarity over normalized strings. The score is symmetric,
//! lands in `[0, 1]`, and identical inputs score exactly 1.

use rapidfuzz::distance::jaro_winkler;

/// Minimum similarity for the auto-mapper to accept a header/field pair.
///
/// A fixed constant of the algorithm, not configuration surface: callers
/// depend on the exact set of matches this threshold admits.
pub const MATCH_THRESHOLD: f64 = 0.9;

/// Similarity between two strings, in `[0, 1]`.
pub fn score(a: &str, b: &str) -> f64 {
    jaro_winkler::similarity(a.chars(), b.chars())
}

/// Normalize a string for comparison: trimmed, lowercased, word separators
/// replaced with single spaces. `"first_name"` and `"First Name"` normalize
/// to the same string.
pub fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether an upload header plausibly denotes a template field key.
pub fn header_matches_key(template_key: &str, upload_header: &str) -> bool {
    score(&normalize(template_key), &normalize(upload_header)) > MATCH_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(score("first name", "first name"), 1.0);
    }

    #[test]
    fn separator_and_case_are_ignored() {
        assert!(header_matches_key("first_name", "First Name"));
        assert!(header_matches_key("e-mail", "E Mail"));
    }

    #[test]
    fn unrelated_headers_do_not_match() {
        assert!(!header_matches_key("first_name", "Zip Code"));
        assert!(!header_matches_key("age", "Email Address"));
    }

    #[test]
    fn near_misses_stay_under_the_threshold() {
        // Close but not close enough for an automatic assignment.
        assert!(!header_matches_key("phone_number", "Phone Type"));
    }
}
