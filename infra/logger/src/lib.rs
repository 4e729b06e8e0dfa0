//! # Logger
//!
//! Process-wide logging for the project.
//! Every record goes to standard output and to a single log file
//! (`logs/running_logs.log` by default), both using the layout
//! `[<timestamp>: <LEVEL>: <module>: <message>]`.
//!
//! Setup is explicit: build a [`Logger`] once at the top of `main`, keep the
//! handle alive, and drop it (or call [`Logger::shutdown`]) on exit so the file
//! writer flushes. Library crates only use the `tracing` macros.
//!
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"mlp_common=debug"`), in addition to `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use mlp_logger::{Logger, LevelFilter};
//! # let tmp = tempfile::tempdir().unwrap();
//! let logger = Logger::builder()
//!     .name("mlProjectLogger")
//!     .level(LevelFilter::INFO)
//!     .path(tmp.path().join("logs"))
//!     .init()
//!     .unwrap();
//!
//! tracing::info!("training started");
//! logger.shutdown();
//! ```

mod error;
mod format;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::format::{BracketFormat, LogRecord, TIMESTAMP_FORMAT};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Directory used when the caller does not pick one.
pub const DEFAULT_LOG_DIR: &str = "logs";
/// File stem of the log file; the full name is `<stem>.log`.
pub const DEFAULT_FILE_STEM: &str = "running_logs";
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    path: Option<PathBuf>,
    file_stem: String,
    level: LevelFilter,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            file_stem: DEFAULT_FILE_STEM.to_owned(),
            level: LevelFilter::INFO,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file_state: std::marker::PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder {
            name: WithName(name.into()),
            config: self.config,
            file_state: std::marker::PhantomData,
        }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Overrides the log file stem (default [`DEFAULT_FILE_STEM`]).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn file_name(mut self, stem: impl Into<String>) -> Self {
        self.config.file_stem = stem.into();
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `mlp_common=debug`).
    ///
    /// Environment variables still override via `RUST_LOG`; this is a programmatic default.
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables console logging on standard output.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Sets the directory that receives the log file.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, name: self.name, file_state: std::marker::PhantomData }
    }

    /// Writes the log file under [`DEFAULT_LOG_DIR`], relative to the working directory.
    pub fn default_path(self) -> LoggerBuilder<WithName, WithFile> {
        self.path(DEFAULT_LOG_DIR)
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. **Note:** This handle contains a [`WorkerGuard`]
    /// that must be kept alive for the duration of the program to ensure
    /// that buffered file records are flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    /// Returns [`LoggerError::Internal`] if the log directory cannot be created.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().event_format(BracketFormat).with_writer(std::io::stdout).boxed());
        }

        let (guard, log_file) = if let Some(dir) = self.config.path {
            fs::create_dir_all(&dir).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create path: {}", dir.display()).into()),
            })?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(&self.config.file_stem)
                .filename_suffix(LOG_FILE_SUFFIX)
                .build(&dir)?;

            let (non_blocking, g) = tracing_appender::non_blocking(file_appender);

            layers.push(layer().event_format(BracketFormat).with_writer(non_blocking).boxed());

            let file = dir.join(format!("{}.{LOG_FILE_SUFFIX}", self.config.file_stem));
            (Some(g), Some(file))
        } else {
            (None, None)
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        tracing::debug!(name = %self.name.0, "Logger initialized");

        Ok(Logger { guard, log_file })
    }
}

/// A handle to the initialized logging system.
///
/// Holds the file writer's background worker guard. Dropping the handle (or
/// calling [`Logger::shutdown`]) flushes pending file records; keep it alive
/// until the application exits.
#[must_use = "Dropping this handle will stop the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use mlp_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("mlProjectLogger")
    ///     .default_path()
    ///     .level(LevelFilter::INFO)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            config: LoggerConfig::default(),
            name: NoName,
            file_state: std::marker::PhantomData,
        }
    }

    /// Path of the log file, when file output is enabled.
    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Returns a reference to the underlying worker guard, if present.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }

    /// Shuts the logging system down, flushing everything written so far.
    ///
    /// The global subscriber stays installed (tracing offers no way to remove
    /// it); records emitted afterwards reach the console only.
    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    let stem = config.file_stem.trim();
    if stem.is_empty() || stem.contains(['/', '\\']) {
        return Err(LoggerError::InvalidConfiguration {
            message: format!("Invalid log file name '{}'", config.file_stem).into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_logger_builder_initial_state() {
        let logger_builder = Logger::builder().name("test-app").env_filter("mlp=debug");
        assert!(logger_builder.config.console);
        assert_eq!(logger_builder.config.level, LevelFilter::INFO);
        assert_eq!(logger_builder.config.env_filter.as_deref(), Some("mlp=debug"));
        assert_eq!(logger_builder.config.file_stem, DEFAULT_FILE_STEM);
        assert!(logger_builder.config.path.is_none());
    }

    #[test]
    #[serial]
    fn test_logger_builder_configuration() {
        let logger_builder = Logger::builder()
            .name("test-app")
            .console(false)
            .default_path()
            .file_name("train")
            .level(LevelFilter::DEBUG);

        assert!(!logger_builder.config.console);
        assert_eq!(logger_builder.config.level, LevelFilter::DEBUG);
        assert_eq!(logger_builder.config.file_stem, "train");
        assert_eq!(logger_builder.config.path.as_deref(), Some(Path::new(DEFAULT_LOG_DIR)));
    }

    #[test]
    #[serial]
    fn test_invalid_settings_are_rejected_before_init() {
        let no_layers = Logger::builder().name("quiet").console(false).init();
        assert!(matches!(no_layers, Err(LoggerError::InvalidConfiguration { .. })));

        let blank_name = Logger::builder().name("  ").init();
        assert!(matches!(blank_name, Err(LoggerError::InvalidConfiguration { .. })));

        let bad_stem = Logger::builder().name("app").path("logs").file_name("a/b").init();
        assert!(matches!(bad_stem, Err(LoggerError::InvalidConfiguration { .. })));

        let bad_filter = Logger::builder().name("app").env_filter("mlp_common=loud").init();
        assert!(matches!(bad_filter, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    #[serial]
    fn test_file_logging_setup() -> Result<(), LoggerError> {
        let tmp_dir = tempdir().map_err(|e| LoggerError::Internal {
            message: e.to_string().into(),
            context: Some("Failed to create temp dir".into()),
        })?;
        let log_dir = tmp_dir.path().join("logs");

        let logger = Logger::builder()
            .name("test-app")
            .console(false)
            .path(&log_dir)
            .level(LevelFilter::INFO)
            .init()?;

        let log_file = logger.log_file().map(Path::to_path_buf);
        tracing::info!("hello world");
        logger.shutdown();

        assert_eq!(log_file, Some(log_dir.join("running_logs.log")));
        let contents = fs::read_to_string(log_dir.join("running_logs.log")).map_err(|e| {
            LoggerError::Internal {
                message: e.to_string().into(),
                context: Some("Failed to read log file".into()),
            }
        })?;

        let record = contents
            .lines()
            .filter_map(LogRecord::parse)
            .find(|r| r.message == "hello world")
            .ok_or("record should be written to the log file")?;
        assert_eq!(record.level, "INFO");
        assert_eq!(record.module, "tests");
        Ok(())
    }
}
