//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "LUNAR_LOG";

const LOG_FILE_NAME: &str = "lunar.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/lunar-console/logs/` because the
/// terminal is owned by the TUI while it runs.
/// Log level is controlled by the `LUNAR_LOG` environment variable.
///
/// # Examples
/// ```bash
/// LUNAR_LOG=debug lunar
/// LUNAR_LOG=lunar_api=trace lunar
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Lunar Console starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Filter used when `LUNAR_LOG` is unset or invalid
pub fn default_filter() -> &'static str {
    "lunar=info,lunar_core=info,lunar_api=info,lunar_app=info,lunar_tui=info,warn"
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("lunar-console").join("logs")
}

/// Get the log file path prefix (the appender adds a date suffix)
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        let dir = get_log_directory();
        assert!(dir.ends_with("lunar-console/logs"));
    }

    #[test]
    fn test_current_log_file_inside_log_directory() {
        let file = get_current_log_file();
        assert_eq!(file.parent(), Some(get_log_directory().as_path()));
        assert!(file.ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(default_filter()).is_ok());
    }
}
