//! Shared snapshot served to API readers

use chrono::{DateTime, Utc};
use serde::Serialize;
use super::{HostReport, RailStatus, TransitionLogEntry};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalSnapshot {
    pub rail_status: RailStatus,
    /// `None` until the first cycle has been published.
    pub updated_at: Option<DateTime<Utc>>,
    /// Oldest entry first.
    pub history: Vec<TransitionLogEntry>,
    /// Primary host first.
    pub hosts: Vec<HostReport>,
}

impl GlobalSnapshot {
    pub fn status_view(&self) -> StatusView {
        StatusView {
            pix: self.rail_status,
            updated_at: self.updated_at,
        }
    }
}

/// Body of `GET /status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    #[serde(rename = "PIX")]
    pub pix: RailStatus,
    pub updated_at: Option<DateTime<Utc>>,
}
