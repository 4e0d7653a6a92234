//! Caret Forms
//!
//! Declarative form schemas and the stateful validator that drives them.
//! A form declares per-field constraints; the validator derives an ordered
//! rule chain from them on every pass, keeps the error map, and mirrors
//! results into any UI through the [`FieldPresentation`] seam.

pub mod constraints;
pub mod markup;
pub mod presentation;
pub mod schema;
pub mod validator;
pub mod values;

pub use constraints::{FieldConstraints, Rule};
pub use presentation::{
    FeedbackMessage, FieldPresentation, FieldState, NullPresentation, PresentationState,
};
pub use schema::{ControlKind, FieldSchema, FormCatalog, FormSchema, SchemaError};
pub use validator::FormValidator;
pub use values::FormValues;
