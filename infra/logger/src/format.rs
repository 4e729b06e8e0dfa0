//! The `[timestamp: LEVEL: module: message]` line layout shared by both sinks.

use chrono::Local;
use std::fmt;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// `chrono` pattern for the timestamp column, e.g. `2024-03-01 14:22:05,117`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Event formatter producing one bracketed line per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketFormat;

impl<S, N> FormatEvent<S, N> for BracketFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "[{}: {}: {}: ",
            Local::now().format(TIMESTAMP_FORMAT),
            level_name(meta.level()),
            module_name(meta)
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer, "]")
    }
}

/// Level column text. Warnings are spelled out as `WARNING`.
fn level_name(level: &Level) -> &'static str {
    if *level == Level::WARN { "WARNING" } else { level.as_str() }
}

/// Last segment of the emitting module path, or the event target when absent.
fn module_name<'a>(meta: &Metadata<'a>) -> &'a str {
    let path = meta.module_path().unwrap_or_else(|| meta.target());
    path.rsplit("::").next().unwrap_or(path)
}

/// One parsed line of the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String,
    pub level: String,
    pub module: String,
    pub message: String,
}

impl LogRecord {
    /// Parses a line written by [`BracketFormat`].
    ///
    /// Returns `None` for lines that do not follow the layout (e.g. the tail of a
    /// multi-line message).
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let inner = line.trim_end().strip_prefix('[')?.strip_suffix(']')?;
        let mut parts = inner.splitn(4, ": ");
        let timestamp = parts.next()?;
        let level = parts.next()?;
        let module = parts.next()?;
        let message = parts.next()?;

        Some(Self {
            timestamp: timestamp.to_owned(),
            level: level.to_owned(),
            module: module.to_owned(),
            message: message.to_owned(),
        })
    }
}
