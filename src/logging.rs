use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging, plus daily-rotated JSON files when `log_dir` is set.
///
/// The returned guard must be held until exit or buffered file lines are lost.
pub fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sales_dashboard=info,warn"));

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stdout);

    let mut guard = None;
    let file_layer = log_dir.and_then(|dir| {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Cannot create log directory {}: {}", dir.display(), e);
            return None;
        }
        let file_appender = tracing_appender::rolling::daily(dir, "sales_dashboard.log");
        let (non_blocking_writer, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker_guard);
        Some(fmt::layer().json().with_writer(non_blocking_writer))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
