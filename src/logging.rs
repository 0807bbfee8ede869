//! Logging for the runner process.
//!
//! This module configures the host process's own diagnostics on the
//! `tracing` ecosystem: console output and an optional non-blocking file
//! layer. It is distinct from the GLib log filter in [`crate::glib_log`],
//! which wraps toolkit and library traffic only.

use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
    Registry,
};

use crate::config::LoggingConfig;
use crate::error::RunnerError;

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for early startup before configuration is loaded, for tests,
/// and as a fallback when full initialization fails. Filters on `RUST_LOG`,
/// defaulting to "info". Errors (e.g. a global logger already set) are
/// ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Creates the optional file logging layer.
///
/// Ensures the parent directory exists, sets up a daily rolling appender
/// behind a non-blocking writer, and applies the configured format.
fn create_file_layer(
    log_path: &Path,
    format: &str,
) -> Result<(Box<dyn Layer<Registry> + Send + Sync + 'static>, WorkerGuard), RunnerError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file_appender = tracing_appender::rolling::daily(
        log_path.parent().unwrap_or_else(|| Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("runner.log")),
    );

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    match format {
        "json" => {
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_writer)
                .with_ansi(false);
            Ok((Box::new(layer), guard))
        }
        _ => {
            let layer = fmt::layer()
                .with_writer(non_blocking_writer)
                .with_ansi(false);
            Ok((Box::new(layer), guard))
        }
    }
}

/// Holds the `WorkerGuard` for the file logger for the process lifetime so
/// buffered log lines are flushed on normal exit. The signal path bypasses
/// this, as it bypasses all cleanup.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes the global logging system from the given [`LoggingConfig`].
///
/// Sets the global `tracing` subscriber with a console layer and, when
/// `file_path` is set, a non-blocking file layer.
///
/// # Errors
///
/// Returns [`RunnerError::LoggingInitialization`] if the level is invalid
/// or a global subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), RunnerError> {
    // Config validation normalizes the level; re-check here so this
    // function is safe to call with a hand-built config too.
    let level_filter_str = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE.to_string(),
        "debug" => Level::DEBUG.to_string(),
        "info" => Level::INFO.to_string(),
        "warn" => Level::WARN.to_string(),
        "error" => Level::ERROR.to_string(),
        invalid_level => {
            return Err(RunnerError::LoggingInitialization(format!(
                "Invalid log level in config: {}",
                invalid_level
            )));
        }
    };

    let stdout_filter = EnvFilter::new(level_filter_str.clone());
    let stdout_layer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(stdout_filter)
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed(),
    };

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync + 'static>> = vec![stdout_layer];

    let mut new_file_guard: Option<WorkerGuard> = None;
    if let Some(log_path) = &config.file_path {
        let file_filter = EnvFilter::new(level_filter_str);
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        new_file_guard = Some(guard);
        layers.push(file_layer.with_filter(file_filter).boxed());
    }

    let result = Registry::default().with(layers).try_init();

    match LOG_WORKER_GUARD.lock() {
        Ok(mut guard_slot) => {
            // Dropping a previous guard flushes its writer.
            *guard_slot = new_file_guard;
        }
        Err(e) => {
            eprintln!(
                "[ERROR] Failed to lock LOG_WORKER_GUARD: {}. Log flushing may be affected.",
                e
            );
        }
    }

    result.map_err(|e| {
        RunnerError::LoggingInitialization(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Best-effort reset of the global logger state between tests; `tracing`
    /// has no public reset API.
    fn ensure_clean_logger_state() {
        let _ = tracing::subscriber::set_global_default(
            tracing::subscriber::NoSubscriber::default(),
        );
    }

    #[test]
    fn init_minimal_logging_runs_without_panic() {
        ensure_clean_logger_state();
        init_minimal_logging();
        // Callable multiple times; the second attempt's error is ignored.
        init_minimal_logging();
        tracing::info!("minimal logging test message");
    }

    #[test]
    fn invalid_level_returns_error() {
        ensure_clean_logger_state();
        let config = LoggingConfig {
            level: "supertrace".to_string(),
            format: "text".to_string(),
            file_path: None,
        };
        match init_logging(&config) {
            Err(RunnerError::LoggingInitialization(msg)) => {
                assert!(msg.contains("Invalid log level in config: supertrace"));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn create_file_layer_ensures_parent_dir_exists() {
        let temp_dir = TempDir::new().unwrap();
        let nested_log_path = temp_dir.path().join("logs/runner.log");
        assert!(!nested_log_path.parent().unwrap().exists());

        let result = create_file_layer(&nested_log_path, "text");
        assert!(result.is_ok(), "create_file_layer failed: {:?}", result.err());
        assert!(nested_log_path.parent().unwrap().exists());
    }

    #[test]
    fn create_file_layer_json_format() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("runner.log");

        let result = create_file_layer(&log_path, "json");
        assert!(result.is_ok(), "create_file_layer failed: {:?}", result.err());
    }
}
