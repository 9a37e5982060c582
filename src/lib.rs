//! # Size Rotating Logger
//!
//! A synchronous, thread-safe text logger. Every call writes one formatted
//! line to a single sink; when a file-backed logger has written more than its
//! configured threshold, the file is archived as `<path>.<index>` and a fresh
//! file takes its place.
//!
//! ## Features
//!
//! - **Serialized Output**: concurrent callers never interleave partial lines
//! - **Size Rotation**: a fixed ring of `<path>.0` .. `<path>.<retained>` archives
//! - **Configurable Header**: prefix, date, time, microseconds, caller file and line
//! - **Default Instance**: a process-wide standard error logger in [`global`]
//!
//! ## Example
//!
//! ```no_run
//! use size_rotating_logger::{logf, Flags, Logger};
//!
//! let logger = Logger::with_rotation("app.log", "[app] ", Flags::STD | Flags::SHORT_FILE, 10, 5)?;
//! logf!(logger, "started with {} workers", 4)?;
//! # Ok::<(), size_rotating_logger::LoggerError>(())
//! ```

pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        CallSite, Flags, Level, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        Result, RotationErrorCallback, Severity, Sink,
    };
    pub use crate::global::default_logger;
}

pub use crate::core::{
    archive_path, CallSite, Flags, Level, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Result, RotationErrorCallback, Severity, Sink, SinkGuard, DEFAULT_RETAINED,
    DEFAULT_THRESHOLD_MIB,
};
pub use global::default_logger;
