// File: src/presentation.rs
// Purpose: Presentation seam between the validator and any UI layer

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Visual state of a single field
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    /// Not evaluated since construction or the last value change
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl FieldState {
    /// Marker class for the control element; empty while untouched
    pub fn css_class(&self) -> &'static str {
        match self {
            FieldState::Untouched => "",
            FieldState::Valid => "is-valid",
            FieldState::Invalid => "is-invalid",
        }
    }
}

/// Capability interface the validator drives
///
/// Implement this to mirror validation results into a UI layer. The
/// validator only ever calls these three methods; everything it knows about
/// presentation passes through here.
pub trait FieldPresentation {
    /// The field passed: show the valid marker, hide any failure message
    fn mark_valid(&mut self, field: &str);

    /// The field failed: show the invalid marker and the failure message
    fn mark_invalid(&mut self, field: &str, message: &str);

    /// The value changed: drop both markers and hide any failure message
    fn clear(&mut self, field: &str);
}

/// Presentation sink that discards everything
///
/// For callers that only want the validation outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresentation;

impl FieldPresentation for NullPresentation {
    fn mark_valid(&mut self, _field: &str) {}
    fn mark_invalid(&mut self, _field: &str, _message: &str) {}
    fn clear(&mut self, _field: &str) {}
}

/// Feedback element attached next to a field
///
/// The element outlives its visibility: hiding keeps the last message text
/// around, exactly like a feedback node toggled with `display: none`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackMessage {
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
struct FieldDisplay {
    state: FieldState,
    feedback: Option<FeedbackMessage>,
}

/// In-memory realization of [`FieldPresentation`]
///
/// Tracks per-field display state for one form; markup adapters and tests
/// read it back through the query methods.
#[derive(Debug, Clone, Default)]
pub struct PresentationState {
    fields: HashMap<String, FieldDisplay>,
}

impl PresentationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visual state of a field; fields never touched report Untouched
    pub fn state_of(&self, field: &str) -> FieldState {
        self.fields
            .get(field)
            .map(|display| display.state)
            .unwrap_or_default()
    }

    /// Marker class of a field's control
    pub fn css_class(&self, field: &str) -> &'static str {
        self.state_of(field).css_class()
    }

    /// The failure message currently shown for a field
    pub fn visible_message(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|display| display.feedback.as_ref())
            .filter(|feedback| feedback.visible)
            .map(|feedback| feedback.text.as_str())
    }

    /// The last failure message for a field, shown or hidden
    pub fn message_text(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|display| display.feedback.as_ref())
            .map(|feedback| feedback.text.as_str())
    }

    /// Whether no field shows any marker or message
    pub fn is_pristine(&self) -> bool {
        self.fields.values().all(|display| {
            display.state == FieldState::Untouched
                && !display.feedback.as_ref().map(|f| f.visible).unwrap_or(false)
        })
    }
}

impl FieldPresentation for PresentationState {
    fn mark_valid(&mut self, field: &str) {
        let display = self.fields.entry(field.to_string()).or_default();
        display.state = FieldState::Valid;
        if let Some(feedback) = &mut display.feedback {
            feedback.visible = false;
        }
    }

    fn mark_invalid(&mut self, field: &str, message: &str) {
        let display = self.fields.entry(field.to_string()).or_default();
        display.state = FieldState::Invalid;
        display.feedback = Some(FeedbackMessage {
            text: message.to_string(),
            visible: true,
        });
    }

    fn clear(&mut self, field: &str) {
        let display = self.fields.entry(field.to_string()).or_default();
        display.state = FieldState::Untouched;
        if let Some(feedback) = &mut display.feedback {
            feedback.visible = false;
        }
    }
}
