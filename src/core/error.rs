//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The log file could not be opened or created at construction time
    #[error("Failed to open log file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The sink rejected a write; `written` bytes made it out before the failure
    #[error("Log write failed after {written} bytes: {source}")]
    Write {
        written: usize,
        #[source]
        source: std::io::Error,
    },

    /// Flushing the sink failed
    #[error("Failed to flush log sink: {0}")]
    Flush(#[source] std::io::Error),

    /// File rotation error
    #[error("File rotation failed for '{path}': {message}")]
    Rotation {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The sink was closed, either explicitly or by a rotation that could not reopen the file
    #[error("Log sink is closed")]
    SinkClosed,

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Configuration document could not be parsed
    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an open error for the given path
    pub fn open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a write error carrying the partial byte count
    pub fn write(written: usize, source: std::io::Error) -> Self {
        LoggerError::Write { written, source }
    }

    /// Create a file rotation error
    pub fn rotation(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::Rotation {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Bytes that reached the sink before a write error, zero for anything else
    #[must_use]
    pub fn bytes_written(&self) -> usize {
        match self {
            LoggerError::Write { written, .. } => *written,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("LoggerBuilder", "threshold must be positive");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::open("/var/log/app.log", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, LoggerError::Open { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::rotation(
            "/var/log/app.log",
            "Disk full",
            io::Error::new(io::ErrorKind::Other, "no space"),
        );
        assert_eq!(
            err.to_string(),
            "File rotation failed for '/var/log/app.log': Disk full"
        );

        let err = LoggerError::config("LoggerConfig", "retained must be set");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerConfig: retained must be set"
        );

        assert_eq!(LoggerError::SinkClosed.to_string(), "Log sink is closed");
    }

    #[test]
    fn test_partial_write_count() {
        let err = LoggerError::write(7, io::Error::from(io::ErrorKind::WriteZero));
        assert_eq!(err.bytes_written(), 7);
        assert!(err.to_string().contains("after 7 bytes"));
        assert_eq!(LoggerError::SinkClosed.bytes_written(), 0);
    }
}
