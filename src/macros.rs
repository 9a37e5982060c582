//! Logging macros for ergonomic log message formatting.
//!
//! These macros forward `format_args!` to the logger, similar to `println!`
//! and `format!`. The caller location recorded for file flags is the macro
//! invocation.
//!
//! # Examples
//!
//! ```
//! use size_rotating_logger::prelude::*;
//! use size_rotating_logger::{info, logf};
//!
//! let logger = Logger::from_writer(std::io::sink(), "", Flags::STD);
//!
//! // Basic logging
//! logf!(logger, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Log a formatted message. Expands to [`crate::Logger::printf`].
///
/// # Examples
///
/// ```
/// # use size_rotating_logger::prelude::*;
/// # let logger = Logger::from_writer(std::io::sink(), "", Flags::STD);
/// use size_rotating_logger::logf;
/// logf!(logger, "Simple message").unwrap();
/// logf!(logger, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.printf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted, newline-terminated message. Expands to [`crate::Logger::println`].
#[macro_export]
macro_rules! logln {
    ($logger:expr, $($arg:tt)+) => {
        $logger.println(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message, then exit the process with status 1.
///
/// ```no_run
/// # use size_rotating_logger::prelude::*;
/// # let logger = Logger::from_writer(std::io::sink(), "", Flags::STD);
/// use size_rotating_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message, then panic with it.
#[macro_export]
macro_rules! panic_log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic(::std::format_args!($($arg)+))
    };
}

/// Log a `[DEBUG]:` tagged message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}

/// Log an `[INFO]:` tagged message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

/// Log a `[WARN]:` tagged message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::std::format_args!($($arg)+))
    };
}

/// Log an `[ERROR]:` tagged message.
///
/// # Examples
///
/// ```
/// # use size_rotating_logger::prelude::*;
/// # let logger = Logger::from_writer(std::io::sink(), "", Flags::STD);
/// use size_rotating_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}
