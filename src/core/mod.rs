//! Core logger types

pub mod call_site;
pub mod config;
pub mod error;
pub mod flags;
pub mod header;
pub mod logger;
pub mod metrics;
pub mod severity;

pub use call_site::CallSite;
pub use config::{LoggerConfig, DEFAULT_RETAINED, DEFAULT_THRESHOLD_MIB};
pub use error::{LoggerError, Result};
pub use flags::Flags;
pub use logger::{archive_path, Logger, LoggerBuilder, RotationErrorCallback, Sink, SinkGuard};
pub use metrics::LoggerMetrics;
pub use severity::{Level, Severity};
