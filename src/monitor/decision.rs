//! Rail status decision with failure debounce

use crate::{
    latency::LatencyThresholds,
    types::RailStatus,
};
use super::HostMonitorState;

/// Derives the rail status from the primary host's state.
///
/// With a clean streak and at least one sample the moving average decides.
/// Otherwise the host stays OK until `fail_tolerance` consecutive failures,
/// even if it has never answered.
pub fn decide(
    state: &HostMonitorState,
    fail_tolerance: u32,
    thresholds: &LatencyThresholds,
) -> RailStatus {
    if !state.window.is_empty() && state.consecutive_failures == 0 {
        thresholds.classify(&state.window)
    } else if state.consecutive_failures >= fail_tolerance {
        RailStatus::Oscillating
    } else {
        RailStatus::Ok
    }
}
