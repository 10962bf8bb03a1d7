//! PIX Rail Monitor - reachability and latency watch for the PIX payment rail
//!
//! Probes the central-bank gateway and a payment-processor gateway with DNS
//! and TCP connects, classifies the rail from the central bank's moving
//! latency average with a failure debounce, and serves the current status and
//! a bounded transition history over HTTP.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod latency;
pub mod monitor;
pub mod storage;
pub mod api;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, MonitorSettings, CONFIG};
pub use errors::{MonitorError, MonitorResult};
pub use types::*;
