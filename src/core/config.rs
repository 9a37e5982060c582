//! Logger configuration
//!
//! Plain data describing a logger; see [`crate::Logger::from_config`] and
//! [`crate::LoggerBuilder`] for turning it into a live instance.

use super::{
    error::{LoggerError, Result},
    flags::Flags,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default rotation threshold, in MiB
pub const DEFAULT_THRESHOLD_MIB: u64 = 100;

/// Default number of archived files kept before the index wraps
pub const DEFAULT_RETAINED: usize = 10;

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Convert a MiB count to bytes, saturating on overflow
#[inline]
#[must_use]
pub const fn mib_to_bytes(mib: u64) -> u64 {
    mib.saturating_mul(BYTES_PER_MIB)
}

/// Configuration for a [`crate::Logger`]
///
/// # Examples
///
/// ```
/// use size_rotating_logger::{Flags, LoggerConfig};
///
/// let config = LoggerConfig::from_json_str(
///     r#"{ "path": "/var/log/app.log", "prefix": "[app] ", "threshold_mib": 20, "retained": 3 }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.threshold_in_bytes(), 20 * 1024 * 1024);
/// assert_eq!(config.flags, Flags::STD);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Backing file; `None` writes to standard error and never rotates
    pub path: Option<PathBuf>,
    /// Literal text placed at the start of every line
    pub prefix: String,
    /// Header components to render
    pub flags: Flags,
    /// Rotation threshold in MiB
    pub threshold_mib: u64,
    /// Exact rotation threshold in bytes; overrides `threshold_mib` when set
    pub threshold_bytes: Option<u64>,
    /// Number of archived files before the index wraps
    pub retained: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            path: None,
            prefix: String::new(),
            flags: Flags::STD,
            threshold_mib: DEFAULT_THRESHOLD_MIB,
            threshold_bytes: None,
            retained: DEFAULT_RETAINED,
        }
    }
}

impl LoggerConfig {
    /// Create a configuration for a file-backed logger with default rotation settings
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rotation threshold in bytes
    #[must_use]
    pub fn threshold_in_bytes(&self) -> u64 {
        self.threshold_bytes
            .unwrap_or_else(|| mib_to_bytes(self.threshold_mib))
    }

    /// Reject settings the logger cannot honor.
    ///
    /// A zero threshold is accepted and rotates after every line.
    pub fn validate(&self) -> Result<()> {
        if matches!(&self.path, Some(path) if path.as_os_str().is_empty()) {
            return Err(LoggerError::config(
                "LoggerConfig",
                "log file path must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.path, None);
        assert_eq!(config.flags, Flags::STD);
        assert_eq!(config.threshold_in_bytes(), 100 * 1024 * 1024);
        assert_eq!(config.retained, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_exact_threshold_overrides_mib() {
        let config = LoggerConfig {
            threshold_bytes: Some(64),
            ..LoggerConfig::new("app.log")
        };
        assert_eq!(config.threshold_in_bytes(), 64);
    }

    #[test]
    fn test_zero_threshold_accepted() {
        let config = LoggerConfig {
            threshold_mib: 0,
            ..LoggerConfig::new("app.log")
        };
        assert_eq!(config.threshold_in_bytes(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_rejected() {
        let config = LoggerConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = LoggerConfig::from_json_str(r#"{ "prefix": "[P] " }"#).unwrap();
        assert_eq!(config.prefix, "[P] ");
        assert_eq!(config.retained, DEFAULT_RETAINED);
        assert_eq!(config.threshold_mib, DEFAULT_THRESHOLD_MIB);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = LoggerConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, LoggerError::Config(_)));

        let err = LoggerConfig::from_json_str(r#"{ "path": "" }"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let config = LoggerConfig::from_json_str(r#"{ "threshold_mib": 0 }"#).unwrap();
        assert_eq!(config.threshold_in_bytes(), 0);
    }

    #[test]
    fn test_flags_roundtrip_through_json() {
        let config = LoggerConfig {
            flags: Flags::STD | Flags::SHORT_FILE | Flags::UTC,
            ..LoggerConfig::new("app.log")
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed = LoggerConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_mib_to_bytes_saturates() {
        assert_eq!(mib_to_bytes(1), 1_048_576);
        assert_eq!(mib_to_bytes(u64::MAX), u64::MAX);
    }
}
