//! Error types shared across the monitor

pub mod monitor_error;

pub use monitor_error::*;
