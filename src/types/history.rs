//! Transition history entries

use chrono::{DateTime, Utc};
use serde::Serialize;
use super::RailStatus;

/// One recorded departure from the healthy state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionLogEntry {
    pub timestamp: DateTime<Utc>,
    /// Label of the host held responsible, `None` when the status is OK.
    pub service: Option<String>,
    pub status: RailStatus,
}

impl TransitionLogEntry {
    /// Builds the entry for a `previous -> next` change, if that change is
    /// worth recording. Only leaving OK is recorded.
    pub fn for_transition(
        previous: RailStatus,
        next: RailStatus,
        at: DateTime<Utc>,
        cause: Option<&str>,
    ) -> Option<Self> {
        if !previous.is_ok() || next.is_ok() {
            return None;
        }

        Some(Self {
            timestamp: at,
            service: cause.map(str::to_string),
            status: next,
        })
    }
}
