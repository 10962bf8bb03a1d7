//! Probe targets and results

use std::fmt;
use std::time::Duration;

/// A host checked every cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostTarget {
    /// Display name used as the cause label in the history.
    pub label: String,
    pub hostname: String,
    pub port: u16,
}

impl HostTarget {
    pub fn new(label: impl Into<String>, hostname: impl Into<String>, port: u16) -> Self {
        Self {
            label: label.into(),
            hostname: hostname.into(),
            port,
        }
    }
}

impl fmt::Display for HostTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.label, self.hostname, self.port)
    }
}

/// Outcome of a single DNS + TCP probe. Error details are not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    Reachable { latency: Duration },
    Unreachable,
}

impl ProbeResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeResult::Reachable { .. })
    }

    /// Connect time, present only for a successful probe.
    pub fn duration(&self) -> Option<Duration> {
        match self {
            ProbeResult::Reachable { latency } => Some(*latency),
            ProbeResult::Unreachable => None,
        }
    }
}
