//! Sequential scheduling of check cycles

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use super::HealthMonitor;

impl HealthMonitor {
    /// Runs check cycles until `shutdown` turns true.
    ///
    /// The first cycle starts after the startup delay. Each later one starts
    /// a full interval after the previous cycle finished, so cycles never
    /// overlap.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        // TODO: decide with the rail owners whether the secondary host should
        // also degrade the status; it is only reported today.
        warn!(
            host = %self.secondary.target,
            "Secondary host is probed but does not affect the published status"
        );
        info!(
            interval = ?self.settings.check_interval,
            startup_delay = ?self.settings.startup_delay,
            "Health monitor started"
        );

        if wait_or_shutdown(self.settings.startup_delay, &mut shutdown).await {
            info!("Health monitor stopped before first check");
            return;
        }

        loop {
            self.check_and_update().await;

            if wait_or_shutdown(self.settings.check_interval, &mut shutdown).await {
                break;
            }
        }

        info!("Health monitor stopped");
    }

    pub fn spawn(self, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }
}

/// Sleeps for `delay`; returns true if shutdown was requested first.
/// A dropped sender counts as shutdown.
async fn wait_or_shutdown(delay: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(delay) => false,
        _ = shutdown.wait_for(|stop| *stop) => true,
    }
}
