//! Custom error types for the monitor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Check cycle panicked: {message}")]
    CyclePanicked { message: String },

    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
}

pub type MonitorResult<T> = Result<T, MonitorError>;
