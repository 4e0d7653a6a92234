// File: src/submit.rs
// Purpose: Submission gate wiring validation, alerts, and the guard together

use caret_feedback::{AlertCenter, AlertKind, SubmitGuard};
use caret_forms::{FieldPresentation, FormValidator, FormValues};

/// What happened to a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the guard is engaged and the caller should carry
    /// out the real submission
    Accepted,
    /// Validation failed; an alert was shown and nothing was submitted
    Rejected,
    /// A submission is already in flight; this activation was ignored
    Suppressed,
}

/// Pre-submission gate for one form
///
/// Runs the whole submission ritual on activation: suppress duplicates,
/// validate every field, alert on failure, lock the control on success.
pub struct SubmitGate {
    validator: FormValidator,
    alerts: AlertCenter,
    guard: SubmitGuard,
}

impl SubmitGate {
    pub fn new(validator: FormValidator, alerts: AlertCenter, guard: SubmitGuard) -> Self {
        Self {
            validator,
            alerts,
            guard,
        }
    }

    /// Run the gate for one activation
    ///
    /// Schedules alert dismissal and guard release through the Tokio
    /// runtime, so this must be called within one.
    pub fn submit(
        &mut self,
        values: &FormValues,
        presentation: &mut dyn FieldPresentation,
    ) -> SubmitOutcome {
        if self.guard.is_locked() {
            tracing::debug!("Submission suppressed: already in flight");
            return SubmitOutcome::Suppressed;
        }

        if !self.validator.validate_all(values, presentation) {
            self.alerts
                .show("Please correct the errors in the form", AlertKind::Error);
            return SubmitOutcome::Rejected;
        }

        self.guard.try_begin();
        SubmitOutcome::Accepted
    }

    /// Report the in-flight submission as finished; unlocks the control
    pub fn finish(&self) {
        self.guard.release();
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    pub fn validator_mut(&mut self) -> &mut FormValidator {
        &mut self.validator
    }

    pub fn alerts(&self) -> &AlertCenter {
        &self.alerts
    }

    pub fn guard(&self) -> &SubmitGuard {
        &self.guard
    }
}
