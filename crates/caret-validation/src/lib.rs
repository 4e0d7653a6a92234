//! Caret Validation Core
//!
//! Pure validation predicates shared by the form validator and the
//! point-of-sale checks. Every function takes raw field input and answers
//! yes or no; messages and ordering live in the layers above.

pub mod email;
pub mod numeric;
pub mod string;

// Re-export all predicates
pub use email::*;
pub use numeric::*;
pub use string::*;
