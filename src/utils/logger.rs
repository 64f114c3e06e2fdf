use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Initialize logging.
///
/// With `BITRATE_TIER_DEBUG` set, everything down to DEBUG goes to a daily log
/// file and warnings are still echoed to stderr. Otherwise, or when the log directory cannot be created, events at
/// `default_level` and above go to stderr, unless `RUST_LOG` says otherwise.
pub fn init_logging(default_level: &str) -> Option<WorkerGuard> {
    if std::env::var("BITRATE_TIER_DEBUG").is_ok() {
        let log_dir = log_dir();
        match prepare_log_dir(&log_dir) {
            Ok(()) => return Some(init_file_logging(&log_dir)),
            Err(e) => eprintln!(
                "Warning: cannot create log directory {}: {}. Logging to stderr.",
                log_dir.display(),
                e
            ),
        }
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
    None
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bitrate-tier")
}

fn prepare_log_dir(log_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(log_dir)
}

fn init_file_logging(log_dir: &Path) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(log_dir, "bitrate-tier.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    tracing::info!("bitrate-tier logging initialized in {}", log_dir.display());
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_log_dir_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        assert!(prepare_log_dir(&blocker.join("logs")).is_err());
        assert!(prepare_log_dir(&dir.path().join("logs")).is_ok());
    }
}
