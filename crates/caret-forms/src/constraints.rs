// File: src/constraints.rs
// Purpose: Declarative per-field constraints and the rule chain derived from them

use serde::{Deserialize, Serialize};

use caret_validation as checks;

/// Declarative constraint set for a single field
///
/// This is the whole configuration surface for one field: a schema declares
/// constraints, the validator derives the ordered rule chain from them on
/// every pass.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldConstraints {
    // Presence
    #[serde(default)]
    pub required: bool,

    // String length
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,

    // Shape
    #[serde(default)]
    pub email: bool,
    #[serde(default)]
    pub positive_integer: bool,
    #[serde(default)]
    pub positive_decimal: bool,

    // Numeric range; the rule applies only when both bounds are set
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,

    // Custom pattern with optional message override
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub pattern_message: Option<String>,
}

impl FieldConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn positive_integer(mut self) -> Self {
        self.positive_integer = true;
        self
    }

    pub fn positive_decimal(mut self) -> Self {
        self.positive_decimal = true;
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn pattern_message(mut self, message: impl Into<String>) -> Self {
        self.pattern_message = Some(message.into());
        self
    }

    /// Derive the ordered rule chain for these constraints
    ///
    /// Recomputed on every validation pass so it always reflects the current
    /// constraints. `email_control` adds the email rule for fields whose
    /// control type implies it.
    pub fn rule_chain(&self, email_control: bool) -> Vec<Rule> {
        let mut rules = Vec::new();

        if self.required {
            rules.push(Rule::Required);
        }
        if let Some(min) = self.min_length {
            rules.push(Rule::MinLength(min));
        }
        if let Some(max) = self.max_length {
            rules.push(Rule::MaxLength(max));
        }
        if self.email || email_control {
            rules.push(Rule::Email);
        }
        if self.positive_integer {
            rules.push(Rule::PositiveInteger);
        }
        if self.positive_decimal {
            rules.push(Rule::PositiveDecimal);
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            rules.push(Rule::Range { min, max });
        }
        if let Some(pattern) = &self.pattern {
            rules.push(Rule::Pattern {
                pattern: pattern.clone(),
                message: self.pattern_message.clone(),
            });
        }

        rules
    }
}

/// A single derived validation rule
///
/// Variants are listed in evaluation priority order; the first failing rule
/// supplies the field's message.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    PositiveInteger,
    PositiveDecimal,
    Range { min: f64, max: f64 },
    Pattern { pattern: String, message: Option<String> },
}

impl Rule {
    /// Rules that only judge non-empty input
    ///
    /// An optional field left blank passes these untouched; presence is the
    /// required rule's job alone.
    pub fn skips_empty(&self) -> bool {
        matches!(
            self,
            Rule::Email | Rule::PositiveInteger | Rule::PositiveDecimal | Rule::Pattern { .. }
        )
    }

    /// Run the predicate against an already-trimmed value
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::Required => checks::is_present(value),
            Rule::MinLength(min) => checks::min_length(value, *min),
            Rule::MaxLength(max) => checks::max_length(value, *max),
            Rule::Email => checks::is_email(value),
            Rule::PositiveInteger => checks::is_positive_integer(value),
            Rule::PositiveDecimal => checks::is_positive_decimal(value),
            Rule::Range { min, max } => checks::in_range(value, *min, *max),
            Rule::Pattern { pattern, .. } => checks::matches_pattern(value, pattern),
        }
    }

    /// The user-facing message shown when this rule fails
    pub fn message(&self) -> String {
        match self {
            Rule::Required => "This field is required".to_string(),
            Rule::MinLength(min) => format!("Must be at least {} characters", min),
            Rule::MaxLength(max) => format!("Must be at most {} characters", max),
            Rule::Email => "Invalid email address".to_string(),
            Rule::PositiveInteger => "Must be a positive integer".to_string(),
            Rule::PositiveDecimal => "Must be a positive number".to_string(),
            Rule::Range { min, max } => format!("Must be between {} and {}", min, max),
            Rule::Pattern { message, .. } => message
                .clone()
                .unwrap_or_else(|| "Invalid format".to_string()),
        }
    }
}
