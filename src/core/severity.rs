//! Severity and level tags

use std::fmt;

/// What happens after a log line has been written.
///
/// The write is always attempted first; `Exit` and `Panic` then stop normal
/// control flow whether or not the write succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Log and return the write result
    #[default]
    Continue,
    /// Log, then terminate the process with exit status 1
    Exit,
    /// Log, then panic with the message
    Panic,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Continue => "CONTINUE",
            Severity::Exit => "EXIT",
            Severity::Panic => "PANIC",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tag written in front of the message by the level-tagged helpers.
///
/// Levels only label lines; nothing is filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Text placed before the message, e.g. `[WARN]:`
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Debug => "[DEBUG]:",
            Level::Info => "[INFO]:",
            Level::Warn => "[WARN]:",
            Level::Error => "[ERROR]:",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
