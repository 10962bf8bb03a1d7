//! Per-host health diagnostics

use serde::Serialize;

/// Read-only summary of one host's monitor state, refreshed every cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostReport {
    pub label: String,
    pub hostname: String,
    pub port: u16,
    pub consecutive_failures: u32,
    pub samples: usize,
    pub mean_latency_ms: Option<f64>,
    /// Whether this host feeds the published rail status.
    pub drives_status: bool,
}
