//! Per-host failure counters and latency windows

use crate::{
    latency::LatencyWindow,
    types::{HostReport, HostTarget, ProbeResult},
};

#[derive(Debug, Clone)]
pub struct HostMonitorState {
    pub consecutive_failures: u32,
    pub window: LatencyWindow,
}

impl HostMonitorState {
    pub fn new(window_size: usize) -> Self {
        Self {
            consecutive_failures: 0,
            window: LatencyWindow::new(window_size),
        }
    }

    /// Folds one probe result in. Failures leave the window untouched.
    pub fn record(&mut self, result: ProbeResult) {
        match result.duration() {
            Some(latency) => {
                self.window.push(latency);
                self.consecutive_failures = 0;
            }
            None => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
            }
        }
    }
}

/// A configured host together with its running state.
#[derive(Debug, Clone)]
pub struct TrackedHost {
    pub target: HostTarget,
    pub state: HostMonitorState,
}

impl TrackedHost {
    pub fn new(target: HostTarget, window_size: usize) -> Self {
        Self {
            target,
            state: HostMonitorState::new(window_size),
        }
    }

    pub fn report(&self, drives_status: bool) -> HostReport {
        HostReport {
            label: self.target.label.clone(),
            hostname: self.target.hostname.clone(),
            port: self.target.port,
            consecutive_failures: self.state.consecutive_failures,
            samples: self.state.window.len(),
            mean_latency_ms: self.state.window.mean().map(|d| d.as_secs_f64() * 1000.0),
            drives_status,
        }
    }
}
