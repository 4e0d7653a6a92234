//! Example: Login Form Flow
//!
//! This example shows how to:
//! 1. Register the login schema in a catalog and bind a validator
//! 2. Drive blur/input events and read back field decorations
//! 3. Run the submission gate with its alert and duplicate-submit guard
//!
//! Run: cargo run --example login_flow

use caret::{
    login_form, AlertCenter, FormCatalog, FormValidator, FormValues, PresentationState,
    SubmitGate, SubmitGuard, SubmitOutcome, LOGIN_FORM_ID,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut catalog = FormCatalog::new();
    catalog.register(login_form());

    let validator = FormValidator::bind(&catalog, LOGIN_FORM_ID);
    let mut gate = SubmitGate::new(validator, AlertCenter::new(), SubmitGuard::new());
    let mut display = PresentationState::new();
    let mut values = FormValues::new();

    println!("Submitting an empty login form...");
    let outcome = gate.submit(&values, &mut display);
    println!("  outcome: {:?}", outcome);
    for field in ["username", "password"] {
        if let Some(message) = display.visible_message(field) {
            println!("  {}: {}", field, message);
        }
    }
    if let Some(alert) = gate.alerts().current() {
        println!("  alert: {} ({})", alert.message, alert.kind);
    }

    println!("\nFilling in credentials...");
    values.set("username", "admin");
    values.set("password", "correct horse battery staple");

    let outcome = gate.submit(&values, &mut display);
    println!("  outcome: {:?}", outcome);
    println!("  submit locked: {}", gate.guard().is_locked());

    // A second click while the request is in flight goes nowhere
    let repeat = gate.submit(&values, &mut display);
    assert_eq!(repeat, SubmitOutcome::Suppressed);
    println!("  repeat activation: {:?}", repeat);

    gate.finish();
    println!("  after finish, locked: {}", gate.guard().is_locked());
}
