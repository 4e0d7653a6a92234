// File: src/markup.rs
// Purpose: Maud rendering of fields with their validation decorations

use maud::{html, Markup};

use crate::presentation::{FieldState, PresentationState};
use crate::schema::{ControlKind, FieldSchema, FormSchema};
use crate::values::FormValues;

/// Render one field: label, the control carrying its state class, and the
/// sibling feedback element
///
/// The feedback element appears once a failure message exists and stays in
/// the tree afterwards; visibility is toggled through its style, so a later
/// valid pass hides the text without dropping the node.
pub fn render_field(
    field: &FieldSchema,
    values: &FormValues,
    display: &PresentationState,
) -> Markup {
    let value = values.get(&field.name).unwrap_or("");
    let class = control_class(display.state_of(&field.name));

    html! {
        @if let Some(label) = &field.label {
            label { (label) }
        }
        @match field.control {
            ControlKind::TextArea => {
                textarea name=(field.name) class=(class) { (value) }
            }
            ControlKind::Select => {
                select name=(field.name) class=(class) {}
            }
            _ => {
                input type=(field.control.type_attr()) name=(field.name) value=(value) class=(class);
            }
        }
        @if let Some(message) = display.message_text(&field.name) {
            @if display.visible_message(&field.name).is_some() {
                span class="validation-message invalid-feedback" style="display: block" { (message) }
            } @else {
                span class="validation-message invalid-feedback" style="display: none" { (message) }
            }
        }
    }
}

/// Render a whole form's fields in declaration order
pub fn render_form(schema: &FormSchema, values: &FormValues, display: &PresentationState) -> Markup {
    html! {
        form id=(schema.id) novalidate {
            @for field in &schema.fields {
                div class="form-group" {
                    (render_field(field, values, display))
                }
            }
        }
    }
}

fn control_class(state: FieldState) -> String {
    match state {
        FieldState::Untouched => "form-control".to_string(),
        _ => format!("form-control {}", state.css_class()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::FieldConstraints;
    use crate::presentation::FieldPresentation;
    use crate::validator::FormValidator;

    fn quantity_schema() -> FormSchema {
        FormSchema::new("cart-form").field(
            FieldSchema::new("quantity")
                .with_label("Quantity")
                .with_control(ControlKind::Number)
                .with_constraints(FieldConstraints::new().required().positive_integer()),
        )
    }

    #[test]
    fn test_untouched_field_has_no_marker() {
        let schema = quantity_schema();
        let rendered =
            render_field(&schema.fields[0], &FormValues::new(), &PresentationState::new())
                .into_string();

        assert!(rendered.contains(r#"class="form-control""#));
        assert!(!rendered.contains("is-invalid"));
        assert!(!rendered.contains("validation-message"));
        assert!(rendered.contains(r#"type="number""#));
        assert!(rendered.contains("Quantity"));
    }

    #[test]
    fn test_invalid_field_shows_feedback() {
        let schema = quantity_schema();
        let mut validator = FormValidator::new(schema.clone());
        let mut display = PresentationState::new();
        let values = FormValues::new();

        validator.evaluate_field("quantity", &values, &mut display);
        let rendered = render_field(&schema.fields[0], &values, &display).into_string();

        assert!(rendered.contains("form-control is-invalid"));
        assert!(rendered.contains("validation-message invalid-feedback"));
        assert!(rendered.contains("display: block"));
        assert!(rendered.contains("This field is required"));
    }

    #[test]
    fn test_recovered_field_keeps_hidden_feedback() {
        let schema = quantity_schema();
        let mut validator = FormValidator::new(schema.clone());
        let mut display = PresentationState::new();
        let mut values = FormValues::new();

        validator.evaluate_field("quantity", &values, &mut display);
        values.set("quantity", "3");
        validator.evaluate_field("quantity", &values, &mut display);

        let rendered = render_field(&schema.fields[0], &values, &display).into_string();

        assert!(rendered.contains("form-control is-valid"));
        // The feedback node survives, hidden, with its old text
        assert!(rendered.contains("display: none"));
        assert!(rendered.contains("This field is required"));
        assert!(rendered.contains(r#"value="3""#));
    }

    #[test]
    fn test_cleared_field_hides_feedback() {
        let schema = quantity_schema();
        let mut display = PresentationState::new();
        display.mark_invalid("quantity", "Must be a positive integer");
        display.clear("quantity");

        let rendered =
            render_field(&schema.fields[0], &FormValues::new(), &display).into_string();

        assert!(rendered.contains(r#"class="form-control""#));
        assert!(!rendered.contains("is-invalid"));
        assert!(rendered.contains("display: none"));
    }

    #[test]
    fn test_textarea_and_select_render_as_containers() {
        let notes = FieldSchema::new("notes").with_control(ControlKind::TextArea);
        let status = FieldSchema::new("status").with_control(ControlKind::Select);
        let mut values = FormValues::new();
        values.set("notes", "on hold");

        let display = PresentationState::new();
        let notes_html = render_field(&notes, &values, &display).into_string();
        let status_html = render_field(&status, &values, &display).into_string();

        assert!(notes_html.contains("<textarea"));
        assert!(notes_html.contains("on hold"));
        assert!(status_html.contains("<select"));
    }

    #[test]
    fn test_render_form_wraps_fields() {
        let schema = FormSchema::new("login-form")
            .field(FieldSchema::new("username").with_label("Username"))
            .field(FieldSchema::new("password").with_control(ControlKind::Password));

        let rendered =
            render_form(&schema, &FormValues::new(), &PresentationState::new()).into_string();

        assert!(rendered.contains(r#"<form id="login-form" novalidate>"#));
        assert!(rendered.contains(r#"class="form-group""#));
        assert!(rendered.contains(r#"name="username""#));
        assert!(rendered.contains(r#"type="password""#));
    }
}
