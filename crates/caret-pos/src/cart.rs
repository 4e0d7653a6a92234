// File: src/cart.rs
// Purpose: Cart line checks for the point-of-sale screen

use caret_forms::{ControlKind, FieldConstraints, FieldSchema};
use caret_validation::is_positive_integer;

/// Longest signed decimal prefix of the input, if any
///
/// `"3.5"` reads 3, `"-2kg"` reads -2, `"abc"` reads nothing. The stock
/// and zero checks apply this lenient reading to whatever the quantity box
/// contains, so a malformed entry is still compared against stock.
pub fn leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// Validate one cart line before it is added
///
/// Checks are independent: every failing check contributes its message, so
/// a bad id and a bad quantity both show up.
pub fn validate_cart_item(product_id: i64, quantity: &str, stock: i64) -> Vec<String> {
    let mut errors = Vec::new();

    if product_id <= 0 {
        errors.push("Invalid product id".to_string());
    }

    if !is_positive_integer(quantity) {
        errors.push("Quantity must be a positive integer".to_string());
    }

    if let Some(requested) = leading_int(quantity) {
        if requested > stock {
            errors.push("Requested quantity exceeds available stock".to_string());
        }
        if requested <= 0 {
            errors.push("Quantity must be greater than zero".to_string());
        }
    }

    errors
}

/// Field schema for the POS quantity box: required, whole, and within the
/// available stock
pub fn cart_quantity_field(stock: i64) -> FieldSchema {
    FieldSchema::new("quantity")
        .with_label("Quantity")
        .with_control(ControlKind::Number)
        .with_constraints(
            FieldConstraints::new()
                .required()
                .positive_integer()
                .range(1.0, stock as f64),
        )
}
