// File: src/markup.rs
// Purpose: Maud rendering of the alert container and the submit control

use maud::{html, Markup};

use crate::alert::Alert;
use crate::submit_guard::SubmitGuard;

/// Render the alert container with its current alert, if any
///
/// A fading alert carries the transition style the removal step rides on;
/// an empty container keeps the mount point in the page.
pub fn render_alert(alert: Option<&Alert>) -> Markup {
    html! {
        div id="alert-container" {
            @if let Some(alert) = alert {
                @if alert.fading {
                    div class=(format!("form-alert {}", alert.kind.css_class()))
                        style="transition: opacity 0.3s; opacity: 0" {
                        (alert.message)
                    }
                } @else {
                    div class=(format!("form-alert {}", alert.kind.css_class())) {
                        (alert.message)
                    }
                }
            }
        }
    }
}

/// Render the submit control; an engaged guard disables it and shows the
/// loading treatment
pub fn render_submit(label: &str, guard: &SubmitGuard) -> Markup {
    html! {
        @if guard.is_locked() {
            button type="submit" class="loading" disabled {
                (label)
            }
        } @else {
            button type="submit" {
                (label)
            }
        }
    }
}
