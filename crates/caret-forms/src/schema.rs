// File: src/schema.rs
// Purpose: Form and field schemas plus the catalog they are registered in

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constraints::{FieldConstraints, Rule};

/// Schema loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Failed to parse form schema: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate field '{field}' in form '{form}'")]
    DuplicateField { form: String, field: String },
}

/// Kind of control a field is rendered as
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
    TextArea,
    Select,
}

impl ControlKind {
    /// Whether the control type alone implies the email rule
    pub fn implies_email(&self) -> bool {
        matches!(self, ControlKind::Email)
    }

    /// Whether pressing Enter in this control is swallowed instead of
    /// submitting the form (multi-line controls keep the newline)
    pub fn suppress_enter(&self) -> bool {
        !matches!(self, ControlKind::TextArea)
    }

    /// The `type` attribute for single-line input controls
    pub fn type_attr(&self) -> &'static str {
        match self {
            ControlKind::Password => "password",
            ControlKind::Email => "email",
            ControlKind::Number => "number",
            _ => "text",
        }
    }
}

/// Declaration of a single form field
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FieldSchema {
    /// Field identifier, unique within its form
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub control: ControlKind,
    #[serde(default)]
    pub constraints: FieldConstraints,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            control: ControlKind::default(),
            constraints: FieldConstraints::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_control(mut self, control: ControlKind) -> Self {
        self.control = control;
        self
    }

    pub fn with_constraints(mut self, constraints: FieldConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Derive the ordered rule chain for this field, fresh each call
    pub fn rule_chain(&self) -> Vec<Rule> {
        self.constraints.rule_chain(self.control.implies_email())
    }
}

/// Declaration of a whole form: an id and its fields in display order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FormSchema {
    pub id: String,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

impl FormSchema {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field declaration
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }

    /// Parse a schema from JSON, rejecting duplicate field names
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: FormSchema = serde_json::from_str(json)?;
        schema.ensure_unique_fields()?;
        Ok(schema)
    }

    fn ensure_unique_fields(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    form: self.id.clone(),
                    field: field.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Registry of form schemas, keyed by form id
///
/// Validators bind against the catalog at page setup; an id with no entry
/// leaves the validator inert.
#[derive(Debug, Clone, Default)]
pub struct FormCatalog {
    forms: HashMap<String, FormSchema>,
}

impl FormCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema; a later registration with the same id replaces it
    pub fn register(&mut self, schema: FormSchema) {
        if self.forms.contains_key(&schema.id) {
            tracing::debug!("Replacing registered form schema: {}", schema.id);
        }
        self.forms.insert(schema.id.clone(), schema);
    }

    pub fn get(&self, form_id: &str) -> Option<&FormSchema> {
        self.forms.get(form_id)
    }

    pub fn contains(&self, form_id: &str) -> bool {
        self.forms.contains_key(form_id)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Parse a catalog from a JSON array of form schemas
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schemas: Vec<FormSchema> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for schema in schemas {
            schema.ensure_unique_fields()?;
            catalog.register(schema);
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form catalog: {:?}", path))?;

        let catalog = Self::from_json(&content)
            .with_context(|| format!("Failed to parse form catalog: {:?}", path))?;

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> FormSchema {
        FormSchema::new("login-form")
            .field(
                FieldSchema::new("username")
                    .with_label("Username")
                    .with_constraints(FieldConstraints::new().required().max_length(150)),
            )
            .field(
                FieldSchema::new("password")
                    .with_control(ControlKind::Password)
                    .with_constraints(FieldConstraints::new().required()),
            )
    }

    #[test]
    fn test_field_lookup_and_order() {
        let form = sample_form();
        assert_eq!(form.field_names(), vec!["username", "password"]);
        assert!(form.get("username").is_some());
        assert!(form.get("missing").is_none());
    }

    #[test]
    fn test_email_control_implies_email_rule() {
        let field = FieldSchema::new("contact").with_control(ControlKind::Email);
        assert_eq!(field.rule_chain(), vec![Rule::Email]);
    }

    #[test]
    fn test_enter_suppression_by_control() {
        assert!(ControlKind::Text.suppress_enter());
        assert!(ControlKind::Password.suppress_enter());
        assert!(ControlKind::Select.suppress_enter());
        assert!(!ControlKind::TextArea.suppress_enter());
    }

    #[test]
    fn test_control_kind_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&ControlKind::TextArea).unwrap(),
            r#""textarea""#
        );
        let kind: ControlKind = serde_json::from_str(r#""password""#).unwrap();
        assert_eq!(kind, ControlKind::Password);
    }

    #[test]
    fn test_schema_from_json() {
        let schema = FormSchema::from_json(
            r#"{
                "id": "signup",
                "fields": [
                    {"name": "email", "control": "email", "constraints": {"required": true}},
                    {"name": "age", "control": "number", "constraints": {"min": 18, "max": 120}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(schema.id, "signup");
        assert_eq!(schema.fields.len(), 2);
        assert!(schema.get("email").unwrap().constraints.required);
        assert_eq!(schema.get("age").unwrap().constraints.min, Some(18.0));
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let result = FormSchema::from_json(
            r#"{"id": "dup", "fields": [{"name": "a"}, {"name": "a"}]}"#,
        );
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateField { .. })
        ));
    }

    #[test]
    fn test_catalog_register_and_get() {
        let mut catalog = FormCatalog::new();
        assert!(catalog.is_empty());

        catalog.register(sample_form());
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("login-form"));
        assert!(catalog.get("other-form").is_none());

        // Same id replaces the earlier registration
        catalog.register(FormSchema::new("login-form"));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("login-form").unwrap().fields.is_empty());
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog = FormCatalog::from_json(
            r#"[
                {"id": "login-form", "fields": [{"name": "username"}]},
                {"id": "cart-form", "fields": [{"name": "quantity"}]}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("login-form"));
        assert!(catalog.contains("cart-form"));
    }

    #[test]
    fn test_catalog_load_missing_file_is_an_error() {
        let result = FormCatalog::load("does-not-exist.json");
        assert!(result.is_err());
    }
}
