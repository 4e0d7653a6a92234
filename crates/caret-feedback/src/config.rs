// File: src/config.rs
// Purpose: Feedback timing configuration from caret.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Runtime timing configuration for alerts and the submit guard
#[derive(Debug, Clone)]
pub struct FeedbackConfig {
    /// How long an alert stays fully visible
    pub dismiss_after: Duration,

    /// Length of the fade-out phase before the alert is removed
    pub fade: Duration,

    /// How long the submit guard stays engaged without an explicit release
    pub guard_reset: Duration,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            dismiss_after: Duration::from_secs(5),
            fade: Duration::from_millis(300),
            guard_reset: Duration::from_secs(5),
        }
    }
}

impl FeedbackConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FeedbackTomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config.to_runtime_config())
    }

    /// Load configuration from the default path (./caret.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("caret.toml")
    }
}

/// TOML configuration for caret.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackTomlConfig {
    /// Alert visibility period in seconds
    #[serde(default = "default_dismiss_after_secs")]
    pub dismiss_after_secs: u64,

    /// Alert fade-out in milliseconds
    #[serde(default = "default_fade_millis")]
    pub fade_millis: u64,

    /// Submit guard auto-release in seconds
    #[serde(default = "default_guard_reset_secs")]
    pub guard_reset_secs: u64,
}

// Default values
fn default_dismiss_after_secs() -> u64 {
    5
}

fn default_fade_millis() -> u64 {
    300
}

fn default_guard_reset_secs() -> u64 {
    5
}

impl Default for FeedbackTomlConfig {
    fn default() -> Self {
        Self {
            dismiss_after_secs: default_dismiss_after_secs(),
            fade_millis: default_fade_millis(),
            guard_reset_secs: default_guard_reset_secs(),
        }
    }
}

impl FeedbackTomlConfig {
    /// Convert TOML config to runtime config
    pub fn to_runtime_config(&self) -> FeedbackConfig {
        FeedbackConfig {
            dismiss_after: Duration::from_secs(self.dismiss_after_secs),
            fade: Duration::from_millis(self.fade_millis),
            guard_reset: Duration::from_secs(self.guard_reset_secs),
        }
    }
}
