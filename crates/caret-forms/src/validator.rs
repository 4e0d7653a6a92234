// File: src/validator.rs
// Purpose: Stateful per-form validator driving the error map and presentation

use std::collections::HashMap;

use crate::presentation::FieldPresentation;
use crate::schema::{FormCatalog, FormSchema};
use crate::values::FormValues;

/// Validates one form against its schema and tracks the error map
///
/// The error map holds at most one message per field: the first failing
/// rule in priority order wins. An entry is removed the moment its field
/// evaluates clean. An entry goes stale, not removed, when the value
/// changes without a re-evaluation; `notify_input` touches presentation
/// only, the map catches up on the next blur or full pass.
#[derive(Debug)]
pub struct FormValidator {
    schema: Option<FormSchema>,
    errors: HashMap<String, String>,
    form_valid: bool,
}

impl FormValidator {
    /// Bind directly to a schema
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema: Some(schema),
            errors: HashMap::new(),
            form_valid: true,
        }
    }

    /// Look the form up in a catalog
    ///
    /// An unknown id is reported once and leaves the validator inert: every
    /// later call is a guarded no-op, evaluations report failure, and
    /// presentation is never touched.
    pub fn bind(catalog: &FormCatalog, form_id: &str) -> Self {
        match catalog.get(form_id) {
            Some(schema) => Self::new(schema.clone()),
            None => {
                tracing::error!("Form '{}' not found; validator left inert", form_id);
                Self {
                    schema: None,
                    errors: HashMap::new(),
                    form_valid: false,
                }
            }
        }
    }

    /// Whether a schema is bound
    pub fn is_bound(&self) -> bool {
        self.schema.is_some()
    }

    /// Evaluate one field now (the blur trigger)
    ///
    /// Runs the field's rule chain over the trimmed value, stops at the
    /// first failure, updates the error map and the presentation. Returns
    /// whether the field passed.
    pub fn evaluate_field(
        &mut self,
        name: &str,
        values: &FormValues,
        presentation: &mut dyn FieldPresentation,
    ) -> bool {
        let Some(schema) = &self.schema else {
            return false;
        };
        let Some(field) = schema.get(name) else {
            // Not declared by this form; nothing to check
            self.errors.remove(name);
            return true;
        };

        let raw = values.get(name).unwrap_or("");
        let value = raw.trim();

        let failure = field
            .rule_chain()
            .into_iter()
            .find(|rule| !(rule.skips_empty() && value.is_empty()) && !rule.check(value));

        match failure {
            Some(rule) => {
                let message = rule.message();
                tracing::debug!("Field '{}' failed validation: {}", name, message);
                self.errors.insert(name.to_string(), message.clone());
                presentation.mark_invalid(name, &message);
                false
            }
            None => {
                self.errors.remove(name);
                presentation.mark_valid(name);
                true
            }
        }
    }

    /// The input trigger: presentation returns to untouched
    ///
    /// The error map entry, if any, stays until the next evaluation.
    pub fn notify_input(&self, name: &str, presentation: &mut dyn FieldPresentation) {
        if self.schema.is_none() {
            return;
        }
        presentation.clear(name);
    }

    /// Evaluate every declared field (the pre-submission gate)
    ///
    /// Clears the error map first so the outcome reflects only this pass,
    /// then evaluates fields in declaration order and records the aggregate
    /// result.
    pub fn validate_all(
        &mut self,
        values: &FormValues,
        presentation: &mut dyn FieldPresentation,
    ) -> bool {
        let names: Vec<String> = match &self.schema {
            Some(schema) => schema.fields.iter().map(|field| field.name.clone()).collect(),
            None => return false,
        };

        self.errors.clear();

        let mut all_valid = true;
        for name in &names {
            if !self.evaluate_field(name, values, presentation) {
                all_valid = false;
            }
        }

        self.form_valid = all_valid;
        all_valid
    }

    /// Outcome of the last full-form pass
    ///
    /// Per-field evaluations do not move this; only `validate_all` does.
    pub fn is_valid(&self) -> bool {
        self.form_valid
    }

    /// The error map as of the last evaluation
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Get the recorded error for a field
    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Check if any field has a recorded error
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Restore a pristine form: empty error map, every field's presentation
    /// cleared, no rules run
    ///
    /// Safe to call repeatedly; a second reset is a no-op.
    pub fn reset(&mut self, presentation: &mut dyn FieldPresentation) {
        let Some(schema) = &self.schema else {
            return;
        };
        self.errors.clear();
        self.form_valid = true;
        for field in &schema.fields {
            presentation.clear(&field.name);
        }
    }

    /// Whether pressing Enter in this field is swallowed instead of
    /// submitting the form
    pub fn suppress_enter(&self, name: &str) -> bool {
        self.schema
            .as_ref()
            .and_then(|schema| schema.get(name))
            .map(|field| field.control.suppress_enter())
            .unwrap_or(false)
    }
}
