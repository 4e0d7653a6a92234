// File: src/values.rs
// Purpose: Current field values of a form, keyed by field name

use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Current values of a form's fields
///
/// Values are stored exactly as entered; trimming happens when a field is
/// evaluated, the same way a browser control hands its raw contents over.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    fields: HashMap<String, String>,
}

impl FormValues {
    /// Create empty form values
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Create from a field map, preserving values verbatim
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Create from JSON; non-string values are rendered with their JSON form
    pub fn from_json(json: &JsonValue) -> Self {
        let mut fields = HashMap::new();

        if let JsonValue::Object(map) = json {
            for (key, value) in map {
                if let Some(s) = value.as_str() {
                    fields.insert(key.clone(), s.to_string());
                } else {
                    fields.insert(key.clone(), value.to_string());
                }
            }
        }

        Self { fields }
    }

    /// Set a field value, replacing any earlier one
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Get a field value parsed as a specific type
    pub fn get_as<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.fields.get(name)?.trim().parse().ok()
    }

    /// Check if a field exists
    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get all field names
    pub fn keys(&self) -> Vec<&String> {
        self.fields.keys().collect()
    }

    /// Get as HashMap
    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.fields
    }

    /// Check if no fields are present
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_stored_verbatim() {
        let mut values = FormValues::new();
        values.set("name", "  John  ");

        // No trimming on the way in; evaluation trims
        assert_eq!(values.get("name"), Some("  John  "));
    }

    #[test]
    fn test_set_replaces() {
        let mut values = FormValues::new();
        values.set("quantity", "3");
        values.set("quantity", "5");
        assert_eq!(values.get("quantity"), Some("5"));
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({
            "name": "Alice",
            "age": 30,
            "active": true
        });

        let values = FormValues::from_json(&json);

        assert_eq!(values.get("name"), Some("Alice"));
        assert_eq!(values.get("age"), Some("30"));
        assert_eq!(values.get("active"), Some("true"));
    }

    #[test]
    fn test_get_as_types() {
        let mut values = FormValues::new();
        values.set("age", " 30 ");
        values.set("score", "95.5");
        values.set("name", "John");

        assert_eq!(values.get_as::<i32>("age"), Some(30));
        assert_eq!(values.get_as::<f64>("score"), Some(95.5));
        assert_eq!(values.get_as::<i32>("name"), None);
    }

    #[test]
    fn test_keys_and_has() {
        let mut values = FormValues::new();
        assert!(values.is_empty());

        values.set("username", "admin");
        values.set("password", "secret");

        assert!(values.has("username"));
        assert!(!values.has("token"));
        assert_eq!(values.keys().len(), 2);
    }
}
