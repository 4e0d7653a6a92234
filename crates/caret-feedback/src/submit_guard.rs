// File: src/submit_guard.rs
// Purpose: Duplicate-submission lock with scheduled auto-release

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::FeedbackConfig;

struct GuardSlot {
    locked: bool,
    generation: u64,
}

/// Lock taken while a submission is in flight
///
/// A second activation while the lock is held is suppressed. The lock
/// releases itself after `guard_reset` unless `release` is called first;
/// both paths are generation-checked, so a stale auto-release never undoes
/// a newer engagement.
///
/// `try_begin` schedules through the Tokio runtime and must be called
/// within one.
#[derive(Clone)]
pub struct SubmitGuard {
    slot: Arc<Mutex<GuardSlot>>,
    reset_after: Duration,
}

impl SubmitGuard {
    /// Create a guard with the default auto-release period
    pub fn new() -> Self {
        Self::with_config(&FeedbackConfig::default())
    }

    /// Create a guard with an explicit configuration
    pub fn with_config(config: &FeedbackConfig) -> Self {
        Self {
            slot: Arc::new(Mutex::new(GuardSlot {
                locked: false,
                generation: 0,
            })),
            reset_after: config.guard_reset,
        }
    }

    /// Engage the lock and schedule its auto-release
    ///
    /// Returns false when a submission is already in flight.
    pub fn try_begin(&self) -> bool {
        let generation = {
            let mut slot = self.slot.lock().unwrap();
            if slot.locked {
                return false;
            }
            slot.locked = true;
            slot.generation += 1;
            slot.generation
        };
        tracing::debug!("Submit guard engaged");

        let slot = Arc::clone(&self.slot);
        let reset_after = self.reset_after;

        tokio::spawn(async move {
            tokio::time::sleep(reset_after).await;
            let mut slot = slot.lock().unwrap();
            if slot.generation == generation && slot.locked {
                slot.locked = false;
                tracing::debug!("Submit guard auto-released");
            }
        });

        true
    }

    /// Release the lock now and cancel the pending auto-release
    pub fn release(&self) {
        let mut slot = self.slot.lock().unwrap();
        slot.generation += 1;
        slot.locked = false;
    }

    /// Check if a submission is in flight
    pub fn is_locked(&self) -> bool {
        self.slot.lock().unwrap().locked
    }
}

impl Default for SubmitGuard {
    fn default() -> Self {
        Self::new()
    }
}
