//! Shutdown signal forwarding

use std::future::Future;
use std::io;
use tokio::sync::watch;
use tracing::{error, info};

/// Waits for `signal` and broadcasts shutdown on `tx`.
///
/// If the signal listener cannot be installed the sender is held forever, so
/// receivers keep running instead of treating the dropped sender as a stop.
pub async fn forward_shutdown<S>(signal: S, tx: watch::Sender<bool>)
where
    S: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            info!("📛 Received shutdown signal (Ctrl+C)...");
            let _ = tx.send(true);
        }
        Err(e) => {
            error!(error = %e, "Failed to listen for Ctrl+C, running until killed");
            let _tx = tx;
            std::future::pending::<()>().await;
        }
    }
}
