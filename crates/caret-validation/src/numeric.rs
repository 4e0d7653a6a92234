// File: src/numeric.rs
// Purpose: Numeric predicates over raw field input

/// Check that the trimmed value is a canonical positive base-10 integer
///
/// Canonical means the parsed number formats back to exactly the trimmed
/// input: no sign, no leading zeros, no decimal point, no stray characters.
pub fn is_positive_integer(value: &str) -> bool {
    let trimmed = value.trim();
    match trimmed.parse::<i64>() {
        Ok(n) => n > 0 && n.to_string() == trimmed,
        Err(_) => false,
    }
}

/// Check that the trimmed value is a finite number greater than zero
pub fn is_positive_decimal(value: &str) -> bool {
    parse_finite(value).map(|n| n > 0.0).unwrap_or(false)
}

/// Check that the trimmed value is a finite number
pub fn is_numeric(value: &str) -> bool {
    parse_finite(value).is_some()
}

/// Check that the trimmed value is a finite number within `min..=max`
///
/// Both bounds are inclusive.
pub fn in_range(value: &str, min: f64, max: f64) -> bool {
    parse_finite(value)
        .map(|n| min <= n && n <= max)
        .unwrap_or(false)
}

fn parse_finite(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
