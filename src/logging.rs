use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with both console and file output.
///
/// Intended for host binaries and manual runs; the pipeline itself only
/// emits `tracing` events and never installs a subscriber. The returned
/// guard must stay alive for the life of the process so file logs are
/// flushed on exit.
pub fn init_logging() -> WorkerGuard {
    // Ensure logs directory exists
    let _ = fs::create_dir_all("logs");

    // Non-blocking file appender with daily log rotation
    let file_appender = tracing_appender::rolling::daily("logs", "order_processing.log");
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    // JSON layer for file logging
    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);

    // Formatted layer for console logging
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive("sps_order_processor=info".parse().unwrap()),
        )
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
