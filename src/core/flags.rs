//! Header flag definitions
//!
//! Flags select which components are rendered in front of every log line.
//! They are or'ed together; the order and format of the components are fixed:
//!
//! ```text
//! <prefix><date> <time>[.<micros>] <file>:<line>: <message>
//! ```
//!
//! For example, `DATE | TIME` (or [`Flags::STD`]) produces
//! `2009/01/23 01:23:23 message`, while `DATE | TIME | MICROSECONDS | LONG_FILE`
//! produces `2009/01/23 01:23:23.123123 /a/b/c/d.rs:23: message`.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct Flags: u32 {
        /// The date in the local time zone: `2009/01/23`
        const DATE = 1 << 0;
        /// The time in the local time zone: `01:23:23`
        const TIME = 1 << 1;
        /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
        const MICROSECONDS = 1 << 2;
        /// Full file name and line number: `/a/b/c/d.rs:23`
        const LONG_FILE = 1 << 3;
        /// Final file name element and line number: `d.rs:23`. Overrides `LONG_FILE`.
        const SHORT_FILE = 1 << 4;
        /// If `DATE` or `TIME` is set, use UTC rather than the local time zone
        const UTC = 1 << 5;
        /// Initial values for the default logger
        const STD = Self::DATE.bits() | Self::TIME.bits();
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::STD
    }
}

impl Flags {
    /// Whether any date or time component is rendered
    #[inline]
    #[must_use]
    pub fn wants_timestamp(self) -> bool {
        self.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS)
    }

    /// Whether the clock block (`HH:MM:SS`) is rendered
    #[inline]
    #[must_use]
    pub fn wants_time(self) -> bool {
        self.intersects(Flags::TIME | Flags::MICROSECONDS)
    }

    /// Whether the caller's file and line are rendered
    #[inline]
    #[must_use]
    pub fn wants_location(self) -> bool {
        self.intersects(Flags::LONG_FILE | Flags::SHORT_FILE)
    }
}
