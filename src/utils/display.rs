//! Startup banner

use std::net::SocketAddr;
use tracing::info;
use crate::config::Config;
use super::local_ip;

pub fn print_configuration(config: &Config, bound: SocketAddr) {
    info!("📡 PIX Rail Monitor v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    for target in [config.primary_target(), config.secondary_target()] {
        info!("   Host: {}", target);
    }
    info!(
        "   Check interval: {}s (first after {}s)",
        config.check_interval_secs, config.startup_delay_secs
    );
    info!("   TCP timeout: {:.1}s", config.tcp_timeout_secs);
    info!(
        "   Fail tolerance: {} | Window: {} | History: {}",
        config.fail_tolerance, config.window_size, config.max_log_entries
    );

    let host = if bound.ip().is_unspecified() { local_ip() } else { bound.ip() };
    info!(" * Running on http://{}", SocketAddr::new(host, bound.port()));
}
