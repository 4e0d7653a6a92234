// File: src/email.rs
// Purpose: Email shape check

use once_cell::sync::Lazy;
use regex::Regex;

// Minimal local@domain.tld shape, not a full RFC 5322 parse
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validate email format
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
