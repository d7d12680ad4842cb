//! Uploader configuration: size ceiling and timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::validate::MAX_FILE_SIZE;

/// Errors from loading or checking an [`UploaderConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value outside its allowed range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Tunable parameters for an uploader session.
///
/// Missing fields in a JSON document fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploaderConfig {
    /// Largest accepted file, in bytes.
    pub max_file_size: u64,

    /// Simulated processing time between "finish" and completion.
    pub processing_delay_ms: u32,

    /// Delay before the navigation collaborator runs on "back".
    pub navigation_delay_ms: u32,

    /// How long a notification stays on screen.
    pub notification_duration_ms: u32,
}

impl UploaderConfig {
    /// Default for [`max_file_size`](Self::max_file_size).
    pub const DEFAULT_MAX_FILE_SIZE: u64 = MAX_FILE_SIZE;
    /// Default for [`processing_delay_ms`](Self::processing_delay_ms).
    pub const DEFAULT_PROCESSING_DELAY_MS: u32 = 2000;
    /// Default for [`navigation_delay_ms`](Self::navigation_delay_ms).
    pub const DEFAULT_NAVIGATION_DELAY_MS: u32 = 300;
    /// Default for [`notification_duration_ms`](Self::notification_duration_ms).
    pub const DEFAULT_NOTIFICATION_DURATION_MS: u32 = 3000;

    /// Parse a configuration from JSON and check it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] if [`validate`](Self::validate) fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `max_file_size` or
    /// `notification_duration_ms` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_file_size == 0 {
            return Err(ConfigError::Invalid(
                "max_file_size must be greater than zero".into(),
            ));
        }
        if self.notification_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "notification_duration_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// [`processing_delay_ms`](Self::processing_delay_ms) as a `Duration`.
    #[must_use]
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.processing_delay_ms))
    }

    /// [`navigation_delay_ms`](Self::navigation_delay_ms) as a `Duration`.
    #[must_use]
    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.navigation_delay_ms))
    }

    /// [`notification_duration_ms`](Self::notification_duration_ms) as a `Duration`.
    #[must_use]
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.notification_duration_ms))
    }
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: Self::DEFAULT_MAX_FILE_SIZE,
            processing_delay_ms: Self::DEFAULT_PROCESSING_DELAY_MS,
            navigation_delay_ms: Self::DEFAULT_NAVIGATION_DELAY_MS,
            notification_duration_ms: Self::DEFAULT_NOTIFICATION_DURATION_MS,
        }
    }
}
