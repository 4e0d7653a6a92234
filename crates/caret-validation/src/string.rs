// File: src/string.rs
// Purpose: Presence, length and pattern predicates over raw field input

use regex::Regex;

/// Check that the value is non-empty after trimming surrounding whitespace
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check that the trimmed value has at least `min` characters
///
/// Length is counted in characters, not bytes.
pub fn min_length(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Check that the trimmed value has at most `max` characters
pub fn max_length(value: &str, max: usize) -> bool {
    value.trim().chars().count() <= max
}

/// Check if string matches regex pattern
///
/// The pattern is compiled on every call; an invalid pattern fails the check.
pub fn matches_pattern(value: &str, pattern: &str) -> bool {
    if let Ok(regex) = Regex::new(pattern) {
        regex.is_match(value)
    } else {
        false
    }
}

/// Check that two values are exactly equal (confirmation fields)
pub fn equals(value: &str, other: &str) -> bool {
    value == other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_present() {
        assert!(is_present("hello"));
        assert!(is_present("  x  "));
        assert!(!is_present(""));
        assert!(!is_present("   "));
        assert!(!is_present("\t\n"));
    }

    #[test]
    fn test_min_length_trims_and_counts_chars() {
        assert!(min_length("hello", 5));
        assert!(!min_length("hi", 5));
        assert!(!min_length("  hi  ", 3));
        assert!(min_length("héllo", 5));
        assert!(min_length("", 0));
        assert!(!min_length("", 1));
    }

    #[test]
    fn test_max_length_trims_and_counts_chars() {
        assert!(max_length("hello", 5));
        assert!(!max_length("hello!", 5));
        assert!(max_length("  hello  ", 5));
        assert!(max_length("héllo", 5));
        assert!(!max_length("x", 0));
    }

    #[test]
    fn test_matches_pattern() {
        assert!(matches_pattern("abc123", r"^[a-z]+\d+$"));
        assert!(!matches_pattern("123abc", r"^[a-z]+\d+$"));
        assert!(matches_pattern("anything", ""));
    }

    #[test]
    fn test_invalid_pattern_fails() {
        assert!(!matches_pattern("anything", "["));
        assert!(!matches_pattern("anything", "(unclosed"));
    }

    #[test]
    fn test_equals() {
        assert!(equals("secret", "secret"));
        assert!(!equals("secret", "Secret"));
        assert!(!equals("secret", "secret "));
    }
}
