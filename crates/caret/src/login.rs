// File: src/login.rs
// Purpose: Schema for the login form as the client validates it

use caret_forms::{ControlKind, FieldConstraints, FieldSchema, FormSchema};

/// Form id the login page registers under
pub const LOGIN_FORM_ID: &str = "login-form";

/// Declarative schema for the login form
///
/// Username is required and capped at 150 characters; password is required.
pub fn login_form() -> FormSchema {
    FormSchema::new(LOGIN_FORM_ID)
        .field(
            FieldSchema::new("username")
                .with_label("Username")
                .with_constraints(FieldConstraints::new().required().max_length(150)),
        )
        .field(
            FieldSchema::new("password")
                .with_label("Password")
                .with_control(ControlKind::Password)
                .with_constraints(FieldConstraints::new().required()),
        )
}
