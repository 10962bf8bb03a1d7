//! PIX Rail Monitor - Main Entry Point

use anyhow::{Context, Result};
use pix_rail_monitor::*;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = CONFIG.clone();

    // Initialize logging
    utils::setup_output_directories(&config.log_dir)?;
    let _logging_guard = utils::setup_logging(&config.log_dir, config.log_json)?;

    config.validate().context("Invalid configuration")?;
    let bind_address = config
        .bind_address()
        .context("BIND_HOST/PORT do not form a socket address")?;

    // Shared state and monitor
    let settings = config.monitor_settings();
    let store = storage::StateStore::new(settings.max_log_entries);
    let probe = Arc::new(network::NetworkProbe::new(settings.tcp_timeout));
    let monitor = monitor::HealthMonitor::new(
        settings,
        config.primary_target(),
        config.secondary_target(),
        probe,
        store.clone(),
    );

    // Setup shutdown handler
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(utils::forward_shutdown(tokio::signal::ctrl_c(), shutdown_tx));

    let monitor_task = monitor.spawn(shutdown_rx.clone());

    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    utils::print_configuration(&config, listener.local_addr()?);

    let mut server_shutdown = shutdown_rx;
    axum::serve(listener, api::router(store))
        .with_graceful_shutdown(async move {
            let _ = server_shutdown.wait_for(|stop| *stop).await;
        })
        .await
        .context("HTTP server failed")?;

    if let Err(e) = monitor_task.await {
        error!(error = %e, "Health monitor task ended abnormally");
    }

    info!("🛑 Shut down gracefully");
    Ok(())
}
