//! For setting up logging.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Flushes logs upon being dropped.
#[derive(Debug)]
pub struct LogGuard {
    _guards: Vec<WorkerGuard>,
}

/// Initializes logging to stdout and to a daily rolling JSON file in `./logs`.
pub fn init_logging() -> LogGuard {
    let log_level = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,tower_http=debug,hello_rest=debug".into());

    let (non_blocking_stdout, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let stdout = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_stdout)
        .with_filter(EnvFilter::new(&log_level));

    let file_appender = tracing_appender::rolling::daily("./logs", "hello-rest.log");
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);
    let file = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_file)
        .json()
        .with_filter(EnvFilter::new(&log_level));

    tracing_subscriber::registry()
        .with(stdout)
        .with(file)
        .with(ErrorLayer::default())
        .init();

    LogGuard {
        _guards: vec![stdout_guard, file_guard],
    }
}
