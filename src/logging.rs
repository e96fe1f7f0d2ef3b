//! Tracing subscriber setup
//!
//! Logs go to a file (`config::log_path()` in the binary) so stdout stays
//! reserved for labels.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{DEFAULT_LOG_LEVEL, LOG_ENV_VAR, LogConfig};

pub const LOG_FILE_NAME: &str = "version-labels.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Log path {0:?} has no file name")]
    InvalidPath(PathBuf),

    #[error("Failed to open log file: {0}")]
    Appender(#[from] InitError),

    #[error("Failed to install subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global subscriber appending to `log_path`.
///
/// The returned guard flushes buffered lines on drop and must be held for the
/// life of the program.
pub fn init(config: &LogConfig, log_path: &Path) -> Result<WorkerGuard, LoggingError> {
    let (log_dir, file_name) = split_log_path(log_path)?;
    std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(log_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = build_filter(std::env::var(LOG_ENV_VAR).ok(), &config.level);

    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry
            .with(fmt::layer().json().with_writer(writer).with_ansi(false))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .try_init()?;
    }

    Ok(guard)
}

fn split_log_path(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;
    let log_dir = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    Ok((log_dir, file_name))
}

/// Env var directives win over the configured level; invalid directives fall
/// back to the default level.
fn build_filter(env_directives: Option<String>, level: &str) -> EnvFilter {
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/var/log/version-labels/version-labels.log", "/var/log/version-labels", "version-labels.log")]
    #[case("labels.log", ".", "labels.log")]
    fn split_log_path_separates_dir_and_file(
        #[case] path: &str,
        #[case] expected_dir: &str,
        #[case] expected_file: &str,
    ) {
        let (dir, file) = split_log_path(Path::new(path)).unwrap();

        assert_eq!(dir, Path::new(expected_dir));
        assert_eq!(file, expected_file);
    }

    #[test]
    fn split_log_path_rejects_path_without_file_name() {
        let result = split_log_path(Path::new("/"));

        assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
    }

    #[rstest]
    #[case(Some("warn"), "debug", "warn")]
    #[case(None, "debug", "debug")]
    fn build_filter_prefers_env_over_config(
        #[case] env: Option<&str>,
        #[case] level: &str,
        #[case] expected: &str,
    ) {
        let filter = build_filter(env.map(String::from), level);

        assert_eq!(filter.to_string(), expected);
    }
}
