// File: src/sale.rs
// Purpose: Sale payload checks before a sale is finalized

use serde::{Deserialize, Serialize};

/// One line of a sale as the POS screen submits it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
}

/// Validate a complete sale payload
///
/// An empty cart short-circuits to a single error. Otherwise every line is
/// checked independently, with 1-based line numbers in the messages.
pub fn validate_sale(items: &[SaleItem]) -> Vec<String> {
    let mut errors = Vec::new();

    if items.is_empty() {
        errors.push("Cart is empty".to_string());
        return errors;
    }

    for (index, item) in items.iter().enumerate() {
        let line = index + 1;

        if item.product_id <= 0 {
            errors.push(format!("Item {}: missing product id", line));
        }
        if item.quantity <= 0 {
            errors.push(format!("Item {}: invalid quantity", line));
        }
        if item.unit_price <= 0.0 {
            errors.push(format!("Item {}: invalid price", line));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: i64, quantity: i64, unit_price: f64) -> SaleItem {
        SaleItem {
            product_id,
            quantity,
            unit_price,
        }
    }

    #[test]
    fn test_empty_cart_is_the_only_error() {
        assert_eq!(validate_sale(&[]), vec!["Cart is empty".to_string()]);
    }

    #[test]
    fn test_valid_sale_has_no_errors() {
        let items = vec![item(1, 2, 9.99), item(4, 1, 150.0)];
        assert!(validate_sale(&items).is_empty());
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let items = vec![item(1, 2, 9.99), item(0, 1, 5.0)];
        assert_eq!(
            validate_sale(&items),
            vec!["Item 2: missing product id".to_string()]
        );
    }

    #[test]
    fn test_each_bad_field_reports_separately() {
        let items = vec![item(0, 0, 0.0)];
        assert_eq!(
            validate_sale(&items),
            vec![
                "Item 1: missing product id".to_string(),
                "Item 1: invalid quantity".to_string(),
                "Item 1: invalid price".to_string(),
            ]
        );
    }

    #[test]
    fn test_negative_values_are_invalid() {
        let items = vec![item(3, -1, 2.5), item(5, 2, -0.5)];
        assert_eq!(
            validate_sale(&items),
            vec![
                "Item 1: invalid quantity".to_string(),
                "Item 2: invalid price".to_string(),
            ]
        );
    }

    #[test]
    fn test_sale_item_serde_round_trip() {
        let original = item(7, 3, 12.5);
        let json = serde_json::to_string(&original).unwrap();
        let back: SaleItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
