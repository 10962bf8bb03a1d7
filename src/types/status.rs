//! Published rail status

use serde::Serialize;
use std::fmt;

/// Coarse classification of the payment rail.
///
/// The serialized names are the ones the dashboard and API clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RailStatus {
    /// No latency data has been evaluated yet, or the last cycle failed.
    #[default]
    #[serde(rename = "Desconhecido")]
    Unknown,
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Lento")]
    Slow,
    #[serde(rename = "Oscilando")]
    Oscillating,
}

impl RailStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RailStatus::Unknown => "Desconhecido",
            RailStatus::Ok => "OK",
            RailStatus::Slow => "Lento",
            RailStatus::Oscillating => "Oscilando",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, RailStatus::Ok)
    }
}

impl fmt::Display for RailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
