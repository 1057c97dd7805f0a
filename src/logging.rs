//! Logging setup and per-tool call logging.
//!
//! Console output goes to stderr because stdout carries the stdio transport.
//! The optional log file rolls daily and is written from a background worker,
//! so a slow disk never stalls a tool call.

use std::borrow::Cow;
use std::path::PathBuf;

use serde::Serialize;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// File name prefix for the daily log file (`context7-mcp.log.YYYY-MM-DD`).
pub const LOG_FILE_NAME: &str = "context7-mcp.log";

/// Tool results longer than this many characters are cut in the logs.
pub const MAX_LOGGED_RESULT_CHARS: usize = 500;

/// Errors from logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LogInitError {
    #[error("invalid log level: {0}")]
    Directive(#[from] ParseError),

    #[error("failed to create log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to install subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Logging configuration, built from the command line.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level applied to this crate and to `tower_mcp`.
    pub level: String,
    /// Directory for the rolling log file; `None` disables file logging.
    pub dir: Option<PathBuf>,
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for the
/// life of the process.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, LogInitError> {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("context7_mcp={}", config.level).parse()?)
        .add_directive(format!("tower_mcp={}", config.level).parse()?);

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let (file, guard) = match &config.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .compact();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()?;

    Ok(guard)
}

/// Logs tool invocations and their results.
///
/// Constructed once by the entry point and handed to each tool through
/// [`AppState`](crate::state::AppState).
#[derive(Debug, Clone)]
pub struct ToolLogger {
    max_result_chars: usize,
}

impl Default for ToolLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolLogger {
    pub fn new() -> Self {
        Self {
            max_result_chars: MAX_LOGGED_RESULT_CHARS,
        }
    }

    pub fn with_max_result_chars(mut self, max: usize) -> Self {
        self.max_result_chars = max;
        self
    }

    /// Log the start of a tool call with its JSON-serialized arguments.
    pub fn call<A: Serialize + ?Sized>(&self, tool: &str, args: &A) {
        let args = serde_json::to_string(args).unwrap_or_default();
        tracing::info!(tool, %args, "Tool call");
    }

    /// Log a tool's result, truncated.
    pub fn result(&self, tool: &str, result: &str) {
        let result = truncate_for_log(result, self.max_result_chars);
        tracing::info!(tool, %result, "Tool result");
    }

    /// Log a tool failure along with the arguments that caused it.
    pub fn failure<A: Serialize + ?Sized>(
        &self,
        tool: &str,
        args: &A,
        error: &dyn std::error::Error,
    ) {
        let args = serde_json::to_string(args).unwrap_or_default();
        tracing::error!(tool, %args, %error, "Tool error");
    }
}

/// Cut `s` to `max_chars` characters, marking the cut.
pub fn truncate_for_log(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => Cow::Owned(format!("{}... [truncated]", &s[..idx])),
        None => Cow::Borrowed(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_results_untouched() {
        assert_eq!(truncate_for_log("hello", 500), "hello");
        let exact = "x".repeat(500);
        assert_eq!(truncate_for_log(&exact, 500), exact.as_str());
    }

    #[test]
    fn long_results_truncated() {
        let long = "y".repeat(501);
        let out = truncate_for_log(&long, 500);
        assert_eq!(out, format!("{}... [truncated]", "y".repeat(500)));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let s = "é".repeat(10);
        assert_eq!(truncate_for_log(&s, 3), "ééé... [truncated]");
    }

    #[test]
    fn logger_accepts_any_serializable_args() {
        let logger = ToolLogger::new().with_max_result_chars(4);
        logger.call("echo", "hi");
        logger.call("get_library_docs", &serde_json::json!({"libraryId": "/a/b"}));
        logger.result("echo", "a result that gets cut");
    }

    #[test]
    fn init_creates_log_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("logs");
        let config = LogConfig {
            level: "debug".to_string(),
            dir: Some(dir.clone()),
        };

        let guard = init(&config).unwrap();
        assert!(guard.is_some());
        assert!(dir.is_dir());
    }
}
