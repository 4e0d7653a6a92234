//! Caret POS
//!
//! Validation for the point-of-sale screens: per-line cart checks before an
//! item is added, and whole-sale checks before a sale is finalized. Errors
//! are plain strings for the caller to display; nothing here touches
//! presentation.

pub mod cart;
pub mod sale;

pub use cart::{cart_quantity_field, leading_int, validate_cart_item};
pub use sale::{validate_sale, SaleItem};
