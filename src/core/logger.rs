//! Main logger implementation
//!
//! Every log call funnels through [`Logger::output`], which formats the
//! header, writes the line, accounts for the bytes and, for file-backed
//! loggers, rotates the file once the threshold is crossed. All of that
//! happens under one lock, so lines from concurrent callers never interleave.

use super::{
    call_site::CallSite,
    config::{LoggerConfig, DEFAULT_RETAINED, DEFAULT_THRESHOLD_MIB},
    error::{LoggerError, Result},
    flags::Flags,
    header::format_header,
    metrics::LoggerMetrics,
    severity::{Level, Severity},
};
use chrono::Utc;
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Callback invoked with a rotation failure after the logger lock is released.
///
/// The callback must not panic; it may log through the same logger.
pub type RotationErrorCallback = Arc<dyn Fn(&LoggerError) + Send + Sync>;

/// Locked access to the current sink, returned by [`Logger::writer`]
pub type SinkGuard<'a> = MappedMutexGuard<'a, Sink>;

/// Destination a logger writes to
pub enum Sink {
    /// Log file at the logger's path; replaced on every rotation
    File(File),
    /// Arbitrary stream such as standard error; never rotated
    Stream(Box<dyn Write + Send>),
    /// No destination: the logger was closed or a rotation could not reopen the file
    Closed,
}

impl Sink {
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Sink::File(_))
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Sink::Closed)
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::File(file) => file.write(buf),
            Sink::Stream(stream) => stream.write(buf),
            Sink::Closed => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "log sink is closed",
            )),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::File(file) => file.flush(),
            Sink::Stream(stream) => stream.flush(),
            Sink::Closed => Ok(()),
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::File(file) => f.debug_tuple("File").field(file).finish(),
            Sink::Stream(_) => f.write_str("Stream"),
            Sink::Closed => f.write_str("Closed"),
        }
    }
}

/// Everything guarded by the logger's lock
struct State {
    prefix: String,
    flags: Flags,
    sink: Sink,
    /// Reused for every line; contents are meaningless between calls
    buf: Vec<u8>,
    /// `None` disables rotation
    path: Option<PathBuf>,
    /// Bytes written to the current sink since it was opened
    written: u64,
    threshold: u64,
    /// Suffix of the next archive, cycles through `0..=retained`
    rotation_index: usize,
    retained: usize,
}

impl State {
    /// Archive the active file as `<path>.<rotation_index>` and start a fresh one.
    ///
    /// The old handle is dropped before the rename. If the rename fails the
    /// file is reopened in place; if the reopen fails the sink stays closed.
    fn rotate(&mut self) -> Result<()> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };

        self.sink = Sink::Closed;

        let archive = archive_path(&path, self.rotation_index);
        let renamed = fs::rename(&path, &archive);

        let file = open_append(&path).map_err(|e| {
            LoggerError::rotation(
                path.display().to_string(),
                "Failed to reopen log file after rotation",
                e,
            )
        })?;
        self.sink = Sink::File(file);

        self.rotation_index += 1;
        if self.rotation_index > self.retained {
            self.rotation_index = 0;
        }

        renamed.map_err(|e| {
            LoggerError::rotation(
                path.display().to_string(),
                format!("Failed to rename to '{}'", archive.display()),
                e,
            )
        })
    }
}

/// Path of the archive with the given index: `<path>.<index>`
#[must_use]
pub fn archive_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path)
}

/// Write all of `buf`, reporting how many bytes made it out even on failure
fn write_counted(sink: &mut Sink, buf: &[u8]) -> (usize, io::Result<()>) {
    let mut written = 0;
    while written < buf.len() {
        match sink.write(&buf[written..]) {
            Ok(0) => return (written, Err(io::Error::from(io::ErrorKind::WriteZero))),
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return (written, Err(e)),
        }
    }
    (written, Ok(()))
}

/// A synchronous, size-rotating logger.
///
/// A `Logger` can be shared between threads (typically behind an `Arc` or
/// as a `static`); each call writes exactly one line and concurrent calls are
/// serialized.
///
/// # Example
///
/// ```no_run
/// use size_rotating_logger::{Flags, Logger};
///
/// let logger = Logger::new("/var/log/app.log", "[app] ", Flags::STD | Flags::SHORT_FILE)?;
/// logger.println("service started")?;
/// logger.printf(format_args!("listening on port {}", 8080))?;
/// # Ok::<(), size_rotating_logger::LoggerError>(())
/// ```
pub struct Logger {
    state: Mutex<State>,
    metrics: LoggerMetrics,
    on_rotation_error: Option<RotationErrorCallback>,
}

impl Logger {
    /// Open (or create) `path` for appending, rotating at 100 MiB and keeping 10 archives.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Open`] if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>, prefix: impl Into<String>, flags: Flags) -> Result<Self> {
        Self::with_rotation(path, prefix, flags, DEFAULT_THRESHOLD_MIB, DEFAULT_RETAINED)
    }

    /// Open (or create) `path` with an explicit threshold (in MiB) and archive count.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Open`] if the file cannot be opened. A zero
    /// threshold is valid and rotates after every line.
    pub fn with_rotation(
        path: impl AsRef<Path>,
        prefix: impl Into<String>,
        flags: Flags,
        threshold_mib: u64,
        retained: usize,
    ) -> Result<Self> {
        let config = LoggerConfig {
            path: Some(path.as_ref().to_path_buf()),
            prefix: prefix.into(),
            flags,
            threshold_mib,
            threshold_bytes: None,
            retained,
        };
        Self::from_config(&config)
    }

    /// Build a logger from a configuration.
    ///
    /// A configuration without a path writes to standard error and never rotates.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        Self::open(config, None)
    }

    fn open(config: &LoggerConfig, on_rotation_error: Option<RotationErrorCallback>) -> Result<Self> {
        config.validate()?;

        let sink = match &config.path {
            Some(path) => Sink::File(
                open_append(path)
                    .map_err(|e| LoggerError::open(path.display().to_string(), e))?,
            ),
            None => Sink::Stream(Box::new(io::stderr())),
        };

        Ok(Self::with_sink(
            sink,
            config.path.clone(),
            config.prefix.clone(),
            config.flags,
            config.threshold_in_bytes(),
            config.retained,
            on_rotation_error,
        ))
    }

    /// Create a non-rotating logger over an arbitrary writer
    #[must_use]
    pub fn from_writer<W>(writer: W, prefix: impl Into<String>, flags: Flags) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_sink(
            Sink::Stream(Box::new(writer)),
            None,
            prefix.into(),
            flags,
            LoggerConfig::default().threshold_in_bytes(),
            DEFAULT_RETAINED,
            None,
        )
    }

    /// Create a non-rotating logger writing to standard error
    #[must_use]
    pub fn stderr(prefix: impl Into<String>, flags: Flags) -> Self {
        Self::from_writer(io::stderr(), prefix, flags)
    }

    fn with_sink(
        sink: Sink,
        path: Option<PathBuf>,
        prefix: String,
        flags: Flags,
        threshold: u64,
        retained: usize,
        on_rotation_error: Option<RotationErrorCallback>,
    ) -> Self {
        Self {
            state: Mutex::new(State {
                prefix,
                flags,
                sink,
                buf: Vec::with_capacity(256),
                path,
                written: 0,
                threshold,
                rotation_index: 0,
                retained,
            }),
            metrics: LoggerMetrics::new(),
            on_rotation_error,
        }
    }

    /// Write one log line.
    ///
    /// The line is `header + message`, plus a newline if `message` does not
    /// already end in one. `site` is rendered only when a file flag is set.
    ///
    /// Bytes that reach the sink are counted even when the write fails. Once
    /// the count reaches the threshold a file-backed logger rotates and the
    /// count restarts at zero; a failed rotation is reported to the rotation
    /// callback (or standard error), never to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Write`] if the sink rejects the line, or
    /// [`LoggerError::SinkClosed`] if there is no sink.
    pub fn output(&self, site: CallSite, message: &str) -> Result<()> {
        let now = Utc::now();

        let (result, rotation_failure) = {
            let mut guard = self.state.lock();
            let state = &mut *guard;

            if state.sink.is_closed() {
                self.metrics.record_write_error(0);
                return Err(LoggerError::SinkClosed);
            }

            state.buf.clear();
            format_header(&mut state.buf, &state.prefix, state.flags, now, site);
            state.buf.extend_from_slice(message.as_bytes());
            if !message.ends_with('\n') {
                state.buf.push(b'\n');
            }

            let (written, write_result) = write_counted(&mut state.sink, &state.buf);
            state.written = state.written.saturating_add(written as u64);

            let result = match write_result {
                Ok(()) => {
                    self.metrics.record_line(written as u64);
                    Ok(())
                }
                Err(e) => {
                    self.metrics.record_write_error(written as u64);
                    Err(LoggerError::write(written, e))
                }
            };

            let mut rotation_failure = None;
            if state.written >= state.threshold {
                if state.path.is_some() {
                    match state.rotate() {
                        Ok(()) => {
                            self.metrics.record_rotation();
                        }
                        Err(e) => rotation_failure = Some(e),
                    }
                }
                state.written = 0;
            }

            (result, rotation_failure)
        };

        if let Some(err) = rotation_failure {
            self.report_rotation_failure(&err);
        }

        result
    }

    fn report_rotation_failure(&self, err: &LoggerError) {
        self.metrics.record_rotation_failure();
        match &self.on_rotation_error {
            Some(callback) => callback(err),
            None => eprintln!("[LOGGER WARNING] {}. Continuing with current sink.", err),
        }
    }

    /// Log `message` as-is
    #[track_caller]
    pub fn print(&self, message: impl fmt::Display) -> Result<()> {
        let site = CallSite::caller();
        self.output(site, &message.to_string())
    }

    /// Log pre-formatted arguments, usually built with `format_args!` or [`crate::logf!`]
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        let site = CallSite::caller();
        self.output(site, &fmt::format(args))
    }

    /// Log `message` followed by a newline
    #[track_caller]
    pub fn println(&self, message: impl fmt::Display) -> Result<()> {
        let site = CallSite::caller();
        let mut line = message.to_string();
        line.push('\n');
        self.output(site, &line)
    }

    /// Log, then act on `severity`.
    ///
    /// Only [`Severity::Continue`] returns; the others behave like
    /// [`Logger::fatal`] and [`Logger::panic`].
    #[track_caller]
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) -> Result<()> {
        match severity {
            Severity::Continue => self.printf(args),
            Severity::Exit => self.fatal(args),
            Severity::Panic => self.panic(args),
        }
    }

    /// Log, then terminate the process with status 1, even if the write failed
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let site = CallSite::caller();
        let _ = self.output(site, &fmt::format(args));
        let _ = self.flush();
        std::process::exit(1)
    }

    /// Log, then panic with the message, even if the write failed
    #[track_caller]
    pub fn panic(&self, args: fmt::Arguments<'_>) -> ! {
        let site = CallSite::caller();
        let message = fmt::format(args);
        let _ = self.output(site, &message);
        panic!("{}", message)
    }

    #[track_caller]
    fn tagged(&self, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        let site = CallSite::caller();
        self.output(site, &format!("{}{}", level.tag(), args))
    }

    /// Log with a `[DEBUG]:` tag
    #[inline]
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.tagged(Level::Debug, args)
    }

    /// Log with an `[INFO]:` tag
    #[inline]
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.tagged(Level::Info, args)
    }

    /// Log with a `[WARN]:` tag
    #[inline]
    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.tagged(Level::Warn, args)
    }

    /// Log with an `[ERROR]:` tag
    #[inline]
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.tagged(Level::Error, args)
    }

    pub fn prefix(&self) -> String {
        self.state.lock().prefix.clone()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.state.lock().prefix = prefix.into();
    }

    pub fn flags(&self) -> Flags {
        self.state.lock().flags
    }

    pub fn set_flags(&self, flags: Flags) {
        self.state.lock().flags = flags;
    }

    /// Locked access to the current sink.
    ///
    /// Log calls on this logger block until the guard is dropped. The lock is
    /// not reentrant: logging through this logger on the thread that holds
    /// the guard deadlocks.
    pub fn writer(&self) -> SinkGuard<'_> {
        MutexGuard::map(self.state.lock(), |state| &mut state.sink)
    }

    /// Redirect output to `writer`.
    ///
    /// Any open file is closed and rotation is disabled from now on.
    pub fn set_output<W>(&self, writer: W)
    where
        W: Write + Send + 'static,
    {
        let mut state = self.state.lock();
        state.sink = Sink::Stream(Box::new(writer));
        state.path = None;
        state.written = 0;
    }

    /// Path of the active log file, `None` for stream-backed loggers
    pub fn path(&self) -> Option<PathBuf> {
        self.state.lock().path.clone()
    }

    /// Bytes written to the current sink since it was opened or last rotated
    pub fn bytes_written(&self) -> u64 {
        self.state.lock().written
    }

    /// Suffix the next archive will receive
    pub fn rotation_index(&self) -> usize {
        self.state.lock().rotation_index
    }

    pub fn threshold_bytes(&self) -> u64 {
        self.state.lock().threshold
    }

    pub fn retained(&self) -> usize {
        self.state.lock().retained
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Flush the current sink.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SinkClosed`] after [`Logger::close`].
    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        if state.sink.is_closed() {
            return Err(LoggerError::SinkClosed);
        }
        state.sink.flush().map_err(LoggerError::Flush)
    }

    /// Flush and release the sink. Later log calls fail with [`LoggerError::SinkClosed`].
    ///
    /// Closing an already closed logger is a no-op.
    pub fn close(&self) -> Result<()> {
        let mut state = self.state.lock();
        let flushed = state.sink.flush().map_err(LoggerError::Flush);
        state.sink = Sink::Closed;
        flushed
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```no_run
    /// use size_rotating_logger::{Flags, Logger};
    ///
    /// let logger = Logger::builder()
    ///     .path("/var/log/app.log")
    ///     .prefix("[app] ")
    ///     .flags(Flags::STD | Flags::MICROSECONDS)
    ///     .threshold_mib(20)
    ///     .retained(5)
    ///     .build()?;
    /// # Ok::<(), size_rotating_logger::LoggerError>(())
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Logger");
        match self.state.try_lock() {
            Some(state) => debug
                .field("prefix", &state.prefix)
                .field("flags", &state.flags)
                .field("path", &state.path)
                .field("sink", &state.sink)
                .field("written", &state.written)
                .field("threshold", &state.threshold)
                .field("rotation_index", &state.rotation_index)
                .field("retained", &state.retained),
            None => debug.field("state", &"<locked>"),
        };
        debug.finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Best effort; nothing to report to at this point.
        let _ = self.state.get_mut().sink.flush();
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use size_rotating_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .path("/var/log/app.log")
///     .threshold_mib(10)
///     .retained(3)
///     .on_rotation_error(Arc::new(|err| {
///         eprintln!("ALERT: {}", err);
///     }))
///     .build()?;
/// # Ok::<(), LoggerError>(())
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    on_rotation_error: Option<RotationErrorCallback>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Log to a rotating file at `path`
    #[must_use = "builder methods return a new value"]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.config.flags = flags;
        self
    }

    /// Rotation threshold in MiB
    #[must_use = "builder methods return a new value"]
    pub fn threshold_mib(mut self, mib: u64) -> Self {
        self.config.threshold_mib = mib;
        self.config.threshold_bytes = None;
        self
    }

    /// Exact rotation threshold in bytes
    #[must_use = "builder methods return a new value"]
    pub fn threshold_bytes(mut self, bytes: u64) -> Self {
        self.config.threshold_bytes = Some(bytes);
        self
    }

    /// Number of archives before the index wraps
    #[must_use = "builder methods return a new value"]
    pub fn retained(mut self, count: usize) -> Self {
        self.config.retained = count;
        self
    }

    /// Receive rotation failures instead of having them printed to standard error
    #[must_use = "builder methods return a new value"]
    pub fn on_rotation_error(mut self, callback: RotationErrorCallback) -> Self {
        self.on_rotation_error = Some(callback);
        self
    }

    /// Build the Logger
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or the file cannot be opened.
    pub fn build(self) -> Result<Logger> {
        Logger::open(&self.config, self.on_rotation_error)
    }
}
