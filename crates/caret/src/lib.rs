//! # caret
//!
//! Client-side form validation and feedback, schema-driven.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use caret::{login_form, FormValues, FormValidator, PresentationState};
//!
//! let mut validator = FormValidator::new(login_form());
//! let mut display = PresentationState::new();
//!
//! let mut values = FormValues::new();
//! values.set("username", "admin");
//!
//! // Blur on the password field: required fails, the message shows
//! validator.evaluate_field("password", &values, &mut display);
//! assert_eq!(display.visible_message("password"), Some("This field is required"));
//!
//! values.set("password", "secret");
//! assert!(validator.validate_all(&values, &mut display));
//! ```
//!
//! ## Architecture
//!
//! This crate is a convenience wrapper that re-exports four component crates:
//!
//! - **`caret-validation`** - Pure validation predicates
//! - **`caret-forms`** - Form schemas, the rule chain, and the stateful validator
//! - **`caret-feedback`** - Transient alerts and the duplicate-submission guard
//! - **`caret-pos`** - Cart and sale checks for the point-of-sale screens
//!
//! On top of them it wires the submission path together: [`SubmitGate`]
//! validates, alerts on failure, and locks the submit control on success.

pub mod login;
pub mod submit;

// Re-export component crates
pub use caret_feedback as feedback;
pub use caret_forms as forms;
pub use caret_pos as pos;
pub use caret_validation as validation;

// Re-export the types most callers wire together
pub use caret_feedback::{Alert, AlertCenter, AlertKind, FeedbackConfig, SubmitGuard};
pub use caret_forms::{
    ControlKind, FieldConstraints, FieldPresentation, FieldSchema, FieldState, FormCatalog,
    FormSchema, FormValidator, FormValues, NullPresentation, PresentationState, Rule,
};
pub use caret_pos::{validate_cart_item, validate_sale, SaleItem};

pub use login::{login_form, LOGIN_FORM_ID};
pub use submit::{SubmitGate, SubmitOutcome};
