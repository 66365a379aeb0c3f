//! Logging Infrastructure
//!
//! Console output (pretty or JSON) plus an optional daily rolling file.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Prefix of the rolling log files: `employee-server.YYYY-MM-DD.log`
pub const LOG_FILE_PREFIX: &str = "employee-server";

/// Rolled files kept on disk
pub const MAX_LOG_FILES: usize = 14;

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `level`. When `log_dir` is given, logs are
/// also written to a daily rotating file in that directory; keep the returned
/// guard alive for as long as the process logs, dropping it flushes the file.
///
/// Fails if a global subscriber is already installed.
///
/// # Examples
/// ```no_run
/// # use employee_server::utils::logger::init_logger;
/// // Development setup (console only)
/// let _guard = init_logger("debug", false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(
    level: &str,
    json_format: bool,
    log_dir: Option<&Path>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix("log")
                .max_log_files(MAX_LOG_FILES)
                .build(dir)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
