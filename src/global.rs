//! Process-wide default logger
//!
//! [`default_logger`] is created on first use: it writes to standard error
//! with [`Flags::STD`], and never rotates. The free functions in this module
//! forward to it. Code that needs a different destination, or tests that need
//! isolation, should construct their own [`Logger`] and pass `&Logger`
//! around instead of reaching for the default.

use crate::core::{CallSite, Flags, Logger, Result, Severity, SinkGuard};
use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, valid for the lifetime of the process
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| Logger::stderr("", Flags::STD))
}

/// See [`Logger::output`]
pub fn output(site: CallSite, message: &str) -> Result<()> {
    default_logger().output(site, message)
}

/// See [`Logger::print`]
#[track_caller]
pub fn print(message: impl fmt::Display) -> Result<()> {
    default_logger().print(message)
}

/// See [`Logger::printf`]
#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) -> Result<()> {
    default_logger().printf(args)
}

/// See [`Logger::println`]
#[track_caller]
pub fn println(message: impl fmt::Display) -> Result<()> {
    default_logger().println(message)
}

/// See [`Logger::log`]
#[track_caller]
pub fn log(severity: Severity, args: fmt::Arguments<'_>) -> Result<()> {
    default_logger().log(severity, args)
}

/// See [`Logger::fatal`]
#[track_caller]
pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatal(args)
}

/// See [`Logger::panic`]
#[track_caller]
pub fn panic(args: fmt::Arguments<'_>) -> ! {
    default_logger().panic(args)
}

#[track_caller]
pub fn debug(args: fmt::Arguments<'_>) -> Result<()> {
    default_logger().debug(args)
}

#[track_caller]
pub fn info(args: fmt::Arguments<'_>) -> Result<()> {
    default_logger().info(args)
}

#[track_caller]
pub fn warn(args: fmt::Arguments<'_>) -> Result<()> {
    default_logger().warn(args)
}

#[track_caller]
pub fn error(args: fmt::Arguments<'_>) -> Result<()> {
    default_logger().error(args)
}

pub fn prefix() -> String {
    default_logger().prefix()
}

pub fn set_prefix(prefix: impl Into<String>) {
    default_logger().set_prefix(prefix);
}

pub fn flags() -> Flags {
    default_logger().flags()
}

pub fn set_flags(flags: Flags) {
    default_logger().set_flags(flags);
}

/// Redirect the default logger, e.g. to capture its output
pub fn set_output<W>(writer: W)
where
    W: Write + Send + 'static,
{
    default_logger().set_output(writer);
}

/// Locked access to the default logger's sink; see [`Logger::writer`]
pub fn writer() -> SinkGuard<'static> {
    default_logger().writer()
}

pub fn flush() -> Result<()> {
    default_logger().flush()
}

/// Close the default logger's sink until [`set_output`] installs a new one
pub fn close() -> Result<()> {
    default_logger().close()
}
