use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::dispatcher::{self, Dispatch};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

use crate::domain::models::ConfigDocument;

/// Logging destination for one configuration load.
///
/// Owns its own `tracing` dispatcher instead of installing a global
/// subscriber, so every load gets a fresh sink and repeated loads in one
/// process (or in one test binary) never fight over global state. The
/// validator writes through [`LogSink::error`]; downstream pipeline stages
/// run inside [`LogSink::in_scope`] and use the `tracing` macros directly.
#[derive(Debug)]
pub struct LogSink {
    dispatch: Dispatch,
    handle: reload::Handle<EnvFilter, Registry>,
    _guard: Option<WorkerGuard>,
}

impl LogSink {
    /// Build a sink from the document being validated.
    ///
    /// `log_type: FILE` together with a `log_file` path selects a file
    /// destination; anything else logs to standard output. This never
    /// fails: an unusable log file surfaces when the sink is first written
    /// to, and the validator reports it as its own check.
    pub fn build(config: &ConfigDocument) -> Self {
        let level = severity(config.get_str("log_level"));

        let (writer, guard) = match (config.get_str("log_type"), config.get_str("log_file")) {
            (Some("FILE"), Some(path)) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(LazyLogFile::new(path));
                (BoxMakeWriter::new(non_blocking), Some(guard))
            }
            _ => (BoxMakeWriter::new(io::stdout), None),
        };

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy();
        let (filter, handle) = reload::Layer::new(filter);

        let format_layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true);

        let subscriber = Registry::default().with(filter).with(format_layer);

        Self {
            dispatch: Dispatch::new(subscriber),
            handle,
            _guard: guard,
        }
    }

    /// Emit a single error-level event through this sink.
    pub fn error(&self, message: impl fmt::Display) {
        self.in_scope(|| tracing::error!("{message}"));
    }

    /// Run `f` with this sink installed as the default dispatcher.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }

    /// Replace the severity threshold.
    pub fn set_level(&self, level: Level) {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .parse_lossy("");
        self.handle.reload(filter).ok();
    }
}

/// Map the configured `log_level` onto a tracing severity.
fn severity(level: Option<&str>) -> Level {
    match level {
        Some("DEBUG") => Level::DEBUG,
        Some("INFO") => Level::INFO,
        Some("WARN") => Level::WARN,
        Some("ERROR") => Level::ERROR,
        // Anything else, including an absent key, stays at the most
        // verbose level so a misconfigured threshold never hides output.
        Some(_) | None => Level::DEBUG,
    }
}

/// File writer that opens its target on first use.
///
/// Keeps sink construction infallible: a path that can not be opened only
/// fails the write, which the non-blocking worker absorbs.
struct LazyLogFile {
    path: PathBuf,
    file: Option<File>,
}

impl LazyLogFile {
    fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    fn opened(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            self.file = Some(file);
        }
        match self.file.as_mut() {
            Some(file) => Ok(file),
            None => Err(io::Error::other("log file closed")),
        }
    }
}

impl Write for LazyLogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.opened()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}
