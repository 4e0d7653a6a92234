//! Caret Feedback
//!
//! Page-level feedback around form validation: a single-slot transient
//! alert with scheduled dismissal, and a lock that suppresses duplicate
//! submissions. Both defer their timed step through the Tokio runtime and
//! cancel it when a newer event supersedes the scheduled one.

pub mod alert;
pub mod config;
pub mod markup;
pub mod submit_guard;

pub use alert::{Alert, AlertCenter, AlertKind};
pub use config::{FeedbackConfig, FeedbackTomlConfig};
pub use submit_guard::SubmitGuard;
