//! Source location of a log call

use std::fmt;
use std::panic::Location;

/// File and line of the code that issued a log call.
///
/// Every public logging method is `#[track_caller]`, so [`CallSite::caller`]
/// resolves to the user's call (or the macro invocation) without walking the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Placeholder used when the location cannot be resolved
    pub const UNKNOWN: CallSite = CallSite {
        file: "???",
        line: 0,
    };

    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the caller of the enclosing `#[track_caller]` function
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl Default for CallSite {
    fn default() -> Self {
        CallSite::UNKNOWN
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
