//! Lock-tuning settings.
//!
//! A `Settings` value is passed by reference to every operation that needs
//! it — there are no process-wide singletons. The defaults match the
//! cross-process protocol (120 s staleness, 10 attempts, 100 ms between
//! attempts); an optional YAML file can override them. Unknown fields in the
//! YAML are ignored for forward compatibility.

use crate::error::{InilockError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Runtime settings for lock acquisition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seconds after which an existing lock file is presumed abandoned.
    pub stale_after_secs: u64,

    /// Number of non-blocking lock attempts before giving up.
    pub retry_attempts: u32,

    /// Milliseconds to sleep between attempts.
    pub retry_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stale_after_secs: 120,
            retry_attempts: 10,
            retry_delay_ms: 100,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            InilockError::Usage(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(yaml)
            .map_err(|e| InilockError::Usage(format!("failed to parse settings YAML: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values.
    ///
    /// All three knobs must be positive: a zero staleness threshold would
    /// reclaim every lock on sight, and zero attempts would never acquire.
    pub fn validate(&self) -> Result<()> {
        if self.stale_after_secs == 0 {
            return Err(InilockError::Usage(
                "settings validation failed: stale_after_secs must be greater than 0".to_string(),
            ));
        }

        if self.retry_attempts == 0 {
            return Err(InilockError::Usage(
                "settings validation failed: retry_attempts must be greater than 0".to_string(),
            ));
        }

        if self.retry_delay_ms == 0 {
            return Err(InilockError::Usage(
                "settings validation failed: retry_delay_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Staleness threshold as a `Duration`.
    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_secs)
    }

    /// Inter-attempt delay as a `Duration`.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}
