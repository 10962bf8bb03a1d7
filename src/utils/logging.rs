//! Logging setup and configuration

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

pub struct LoggingGuard {
    pub _guard: tracing_appender::non_blocking::WorkerGuard,
}

pub fn setup_logging(log_dir: &str, json: bool) -> Result<Arc<LoggingGuard>> {
    let file_appender = tracing_appender::rolling::hourly(log_dir, "pix-rail-monitor.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let console = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_ansi(true)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(console)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(false)
                .with_level(true)
                .with_ansi(false)
                .compact()
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        )
        .try_init()?;

    Ok(Arc::new(LoggingGuard { _guard: guard }))
}

pub fn setup_output_directories(log_dir: &str) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;
    Ok(())
}
