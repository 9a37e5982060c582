//! Logger metrics for observability
//!
//! Counters describing what the output path has done. They are atomics so
//! they can be read without taking the logger's lock.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use size_rotating_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_line(12);
/// metrics.record_rotation();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.bytes_written(), 12);
/// assert_eq!(metrics.rotations(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Lines fully written to a sink
    lines_written: AtomicU64,

    /// Bytes written across all sinks, including partial writes
    bytes_written: AtomicU64,

    /// Log calls whose write failed
    write_errors: AtomicU64,

    /// Rotations that completed
    rotations: AtomicU64,

    /// Rotations that failed and were swallowed
    rotation_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
            rotation_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rotations(&self) -> u64 {
        self.rotations.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rotation_failures(&self) -> u64 {
        self.rotation_failures.load(Ordering::Relaxed)
    }

    /// Record a complete line of `bytes` bytes
    #[inline]
    pub fn record_line(&self, bytes: u64) {
        self.lines_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Record a failed write that still pushed `bytes` bytes out
    #[inline]
    pub fn record_write_error(&self, bytes: u64) {
        self.write_errors.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_rotation(&self) -> u64 {
        self.rotations.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rotation_failure(&self) -> u64 {
        self.rotation_failures.fetch_add(1, Ordering::Relaxed)
    }
}
