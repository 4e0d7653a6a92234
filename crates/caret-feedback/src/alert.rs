// File: src/alert.rs
// Purpose: Single-slot transient alert with scheduled two-phase dismissal

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::FeedbackConfig;

/// Category of a transient alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertKind::Info => write!(f, "info"),
            AlertKind::Success => write!(f, "success"),
            AlertKind::Warning => write!(f, "warning"),
            AlertKind::Error => write!(f, "error"),
        }
    }
}

impl AlertKind {
    /// Modifier class for the alert container
    pub fn css_class(&self) -> String {
        format!("form-alert-{}", self)
    }
}

/// A currently shown alert
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// The alert text
    pub message: String,

    /// Category selecting the visual treatment
    pub kind: AlertKind,

    /// When the alert was shown
    pub shown_at: DateTime<Utc>,

    /// Whether the fade-out phase has started
    pub fading: bool,
}

impl Alert {
    fn new(message: String, kind: AlertKind) -> Self {
        Self {
            message,
            kind,
            shown_at: Utc::now(),
            fading: false,
        }
    }

    /// How long the alert has been on screen
    pub fn age(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.shown_at)
            .to_std()
            .unwrap_or(Duration::from_secs(0))
    }
}

struct Slot {
    current: Option<Alert>,
    generation: u64,
}

/// Owner of the single alert slot
///
/// Showing an alert replaces the current one and schedules its dismissal:
/// after `dismiss_after` the alert starts fading, one `fade` later it is
/// removed. Each scheduled step re-checks the generation taken when its
/// alert was shown, so a superseded timer never touches a newer alert.
///
/// `show` schedules through the Tokio runtime and must be called within one.
#[derive(Clone)]
pub struct AlertCenter {
    slot: Arc<Mutex<Slot>>,
    config: FeedbackConfig,
}

impl AlertCenter {
    /// Create an alert center with the default timings
    pub fn new() -> Self {
        Self::with_config(FeedbackConfig::default())
    }

    /// Create an alert center with explicit timings
    pub fn with_config(config: FeedbackConfig) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                current: None,
                generation: 0,
            })),
            config,
        }
    }

    /// Show an alert, replacing any current one, and schedule its dismissal
    pub fn show(&self, message: impl Into<String>, kind: AlertKind) {
        let message = message.into();
        tracing::debug!("Showing {} alert: {}", kind, message);

        let generation = {
            let mut slot = self.slot.lock().unwrap();
            slot.generation += 1;
            slot.current = Some(Alert::new(message, kind));
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        let dismiss_after = self.config.dismiss_after;
        let fade = self.config.fade;

        tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;
            {
                let mut slot = slot.lock().unwrap();
                if slot.generation != generation {
                    return;
                }
                if let Some(alert) = &mut slot.current {
                    alert.fading = true;
                }
            }

            tokio::time::sleep(fade).await;
            let mut slot = slot.lock().unwrap();
            if slot.generation == generation {
                slot.current = None;
                tracing::debug!("Alert dismissed");
            }
        });
    }

    /// Remove the current alert immediately and cancel its dismissal
    pub fn clear(&self) {
        let mut slot = self.slot.lock().unwrap();
        slot.generation += 1;
        slot.current = None;
    }

    /// The alert currently on screen, if any
    pub fn current(&self) -> Option<Alert> {
        self.slot.lock().unwrap().current.clone()
    }

    /// Check if an alert is on screen
    pub fn is_showing(&self) -> bool {
        self.slot.lock().unwrap().current.is_some()
    }
}

impl Default for AlertCenter {
    fn default() -> Self {
        Self::new()
    }
}
