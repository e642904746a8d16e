//! File-based logging setup.
//!
//! The terminal UI owns stdout and stderr, so log output goes to a file in
//! the data directory instead. The file is truncated when it grows past the
//! size cap; the tool produces little log volume, so nothing older is worth
//! keeping.

use std::fs::{self, OpenOptions};
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum log file size before truncation (2 MB)
const MAX_LOG_SIZE: u64 = 2 * 1024 * 1024;

fn truncate_log_if_needed(log_path: &Path) -> std::io::Result<()> {
    if !log_path.exists() {
        return Ok(());
    }
    if fs::metadata(log_path)?.len() <= MAX_LOG_SIZE {
        return Ok(());
    }
    fs::write(log_path, b"--- Log truncated (older entries removed) ---\n")
}

/// Initialize logging to `{data_dir}/empirule.log`.
///
/// The level comes from the `RUST_LOG` environment variable when set,
/// otherwise from `level`. The returned guard must stay alive for the
/// process lifetime or buffered log lines are dropped.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join("empirule.log");

    if let Err(e) = truncate_log_if_needed(&log_path) {
        eprintln!("Warning: Failed to truncate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let default_filter = format!("empirule={level},empirule_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(
        "empirule logging initialized (log_path={})",
        log_path.display()
    );
    Ok(guard)
}
