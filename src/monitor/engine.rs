//! Health monitor check cycle

use chrono::Utc;
use futures_util::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info};
use crate::{
    config::MonitorSettings,
    errors::{MonitorError, MonitorResult},
    latency::LatencyThresholds,
    network::Probe,
    storage::StateStore,
    types::{HostTarget, RailStatus},
};
use super::{decide, HostMonitorState, TrackedHost};

pub struct HealthMonitor {
    pub(super) settings: MonitorSettings,
    thresholds: LatencyThresholds,
    probe: Arc<dyn Probe>,
    store: StateStore,
    primary: TrackedHost,
    pub(super) secondary: TrackedHost,
}

impl HealthMonitor {
    pub fn new(
        settings: MonitorSettings,
        primary: HostTarget,
        secondary: HostTarget,
        probe: Arc<dyn Probe>,
        store: StateStore,
    ) -> Self {
        Self {
            primary: TrackedHost::new(primary, settings.window_size),
            secondary: TrackedHost::new(secondary, settings.window_size),
            thresholds: LatencyThresholds::default(),
            settings,
            probe,
            store,
        }
    }

    pub fn with_thresholds(mut self, thresholds: LatencyThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn primary_state(&self) -> &HostMonitorState {
        &self.primary.state
    }

    pub fn secondary_state(&self) -> &HostMonitorState {
        &self.secondary.state
    }

    /// Runs one check cycle and publishes its result.
    ///
    /// A cycle that panics anywhere (probe, bookkeeping or publish) publishes
    /// `Desconhecido` instead, so the caller can always schedule the next one.
    pub async fn check_and_update(&mut self) -> RailStatus {
        match guard_cycle(self.run_cycle()).await {
            Ok(status) => status,
            Err(e) => {
                error!(error = %e, "Check cycle failed, publishing unknown status");
                self.store.write(RailStatus::Unknown, Utc::now(), None).await;
                RailStatus::Unknown
            }
        }
    }

    async fn run_cycle(&mut self) -> RailStatus {
        let (primary_result, secondary_result) = tokio::join!(
            self.probe.probe(&self.primary.target),
            self.probe.probe(&self.secondary.target),
        );

        self.primary.state.record(primary_result);
        self.secondary.state.record(secondary_result);

        // Only the primary host decides. The secondary host is tracked for
        // diagnostics and never consulted here.
        let status = decide(&self.primary.state, self.settings.fail_tolerance, &self.thresholds);

        debug!(
            host = %self.secondary.target.label,
            failures = self.secondary.state.consecutive_failures,
            samples = self.secondary.state.window.len(),
            "Secondary host tracked (not used for status)"
        );

        let cause = (!status.is_ok()).then_some(self.primary.target.label.as_str());
        let hosts = vec![self.primary.report(true), self.secondary.report(false)];
        let previous = self.store.record_cycle(status, Utc::now(), cause, hosts).await;

        info!(
            status = %status,
            previous = %previous,
            failures = self.primary.state.consecutive_failures,
            latency_ms = ?primary_result.duration().map(|d| d.as_millis()),
            "Check cycle complete"
        );

        status
    }
}

/// Drives a cycle to completion, turning a panic into [`MonitorError::CyclePanicked`].
async fn guard_cycle<F>(cycle: F) -> MonitorResult<RailStatus>
where
    F: Future<Output = RailStatus>,
{
    AssertUnwindSafe(cycle)
        .catch_unwind()
        .await
        .map_err(|payload| MonitorError::CyclePanicked {
            message: panic_message(payload.as_ref()),
        })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
