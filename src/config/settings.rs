//! Monitor configuration settings and environment variable handling

use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use crate::{
    errors::{MonitorError, MonitorResult},
    types::HostTarget,
};

// Monitored hosts
pub const DEFAULT_PRIMARY_HOST: &str = "www.bcb.gov.br";
pub const DEFAULT_PRIMARY_LABEL: &str = "Banco Central";
pub const DEFAULT_SECONDARY_HOST: &str = "api.mercadopago.com";
pub const DEFAULT_SECONDARY_LABEL: &str = "Mercado Pago";
pub const DEFAULT_PROBE_PORT: u16 = 443;

// Scheduling
pub const CHECK_INTERVAL_SECS: u64 = 60;
pub const STARTUP_DELAY_SECS: u64 = 2;
pub const TCP_TIMEOUT_SECS: f64 = 3.0;
pub const MIN_TCP_TIMEOUT_SECS: f64 = 0.1;
pub const MAX_TCP_TIMEOUT_SECS: f64 = 60.0;

// Decision tuning
pub const MAX_LOG_ENTRIES: usize = 50;
pub const FAIL_TOLERANCE: u32 = 3; // consecutive failures before degrading
pub const WINDOW_SIZE: usize = 10; // moving average over the last N samples
pub const MAX_WINDOW_SIZE: usize = 1_000;
pub const MAX_LOG_ENTRIES_LIMIT: usize = 10_000;

// HTTP
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone)]
pub struct Config {
    // Hosts
    pub primary_host: String,
    pub primary_label: String,
    pub secondary_host: String,
    pub secondary_label: String,
    pub probe_port: u16,
    // Scheduling
    pub check_interval_secs: u64,
    pub startup_delay_secs: u64,
    pub tcp_timeout_secs: f64,
    // Decision tuning
    pub max_log_entries: usize,
    pub fail_tolerance: u32,
    pub window_size: usize,
    // HTTP server
    pub bind_host: String,
    pub port: u16,
    // Logging
    pub log_dir: String,
    pub log_json: bool,
}

/// The subset of [`Config`] the health monitor runs on.
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub check_interval: Duration,
    pub startup_delay: Duration,
    pub tcp_timeout: Duration,
    pub max_log_entries: usize,
    pub fail_tolerance: u32,
    pub window_size: usize,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Config::default().monitor_settings()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_host: DEFAULT_PRIMARY_HOST.to_string(),
            primary_label: DEFAULT_PRIMARY_LABEL.to_string(),
            secondary_host: DEFAULT_SECONDARY_HOST.to_string(),
            secondary_label: DEFAULT_SECONDARY_LABEL.to_string(),
            probe_port: DEFAULT_PROBE_PORT,
            check_interval_secs: CHECK_INTERVAL_SECS,
            startup_delay_secs: STARTUP_DELAY_SECS,
            tcp_timeout_secs: TCP_TIMEOUT_SECS,
            max_log_entries: MAX_LOG_ENTRIES,
            fail_tolerance: FAIL_TOLERANCE,
            window_size: WINDOW_SIZE,
            bind_host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            log_dir: "output/logs".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from a key lookup, falling back to the defaults for
    /// missing or unparsable values and clamping numbers into range.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            primary_host: lookup("PRIMARY_HOST").unwrap_or(defaults.primary_host),
            primary_label: lookup("PRIMARY_LABEL").unwrap_or(defaults.primary_label),
            secondary_host: lookup("SECONDARY_HOST").unwrap_or(defaults.secondary_host),
            secondary_label: lookup("SECONDARY_LABEL").unwrap_or(defaults.secondary_label),
            probe_port: lookup("PROBE_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PROBE_PORT),
            check_interval_secs: lookup("CHECK_INTERVAL_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(CHECK_INTERVAL_SECS)
                .max(1),
            startup_delay_secs: lookup("STARTUP_DELAY_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(STARTUP_DELAY_SECS),
            tcp_timeout_secs: lookup("TCP_TIMEOUT_SECS")
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(TCP_TIMEOUT_SECS)
                .clamp(MIN_TCP_TIMEOUT_SECS, MAX_TCP_TIMEOUT_SECS),
            max_log_entries: lookup("MAX_LOG_ENTRIES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_LOG_ENTRIES)
                .clamp(1, MAX_LOG_ENTRIES_LIMIT),
            fail_tolerance: lookup("FAIL_TOLERANCE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(FAIL_TOLERANCE)
                .max(1),
            window_size: lookup("WINDOW_SIZE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(WINDOW_SIZE)
                .clamp(1, MAX_WINDOW_SIZE),
            bind_host: lookup("BIND_HOST").unwrap_or(defaults.bind_host),
            port: lookup("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            log_dir: lookup("LOG_DIR").unwrap_or(defaults.log_dir),
            log_json: lookup("LOG_JSON")
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
        }
    }

    pub fn validate(&self) -> MonitorResult<()> {
        if self.primary_host.trim().is_empty() {
            return Err(MonitorError::InvalidConfig {
                field: "PRIMARY_HOST",
                reason: "hostname must not be empty".to_string(),
            });
        }
        if self.secondary_host.trim().is_empty() {
            return Err(MonitorError::InvalidConfig {
                field: "SECONDARY_HOST",
                reason: "hostname must not be empty".to_string(),
            });
        }
        if self.primary_host.eq_ignore_ascii_case(&self.secondary_host) {
            return Err(MonitorError::InvalidConfig {
                field: "SECONDARY_HOST",
                reason: format!("must differ from PRIMARY_HOST ({})", self.primary_host),
            });
        }
        if !(1..=MAX_WINDOW_SIZE).contains(&self.window_size) {
            return Err(MonitorError::InvalidConfig {
                field: "WINDOW_SIZE",
                reason: format!("{} is outside 1..={}", self.window_size, MAX_WINDOW_SIZE),
            });
        }
        if !(1..=MAX_LOG_ENTRIES_LIMIT).contains(&self.max_log_entries) {
            return Err(MonitorError::InvalidConfig {
                field: "MAX_LOG_ENTRIES",
                reason: format!(
                    "{} is outside 1..={}",
                    self.max_log_entries, MAX_LOG_ENTRIES_LIMIT
                ),
            });
        }
        if self.fail_tolerance == 0 {
            return Err(MonitorError::InvalidConfig {
                field: "FAIL_TOLERANCE",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.bind_address().is_none() {
            return Err(MonitorError::InvalidConfig {
                field: "BIND_HOST",
                reason: format!("'{}' is not an IP address", self.bind_host),
            });
        }
        Ok(())
    }

    pub fn primary_target(&self) -> HostTarget {
        HostTarget::new(&self.primary_label, &self.primary_host, self.probe_port)
    }

    pub fn secondary_target(&self) -> HostTarget {
        HostTarget::new(&self.secondary_label, &self.secondary_host, self.probe_port)
    }

    pub fn monitor_settings(&self) -> MonitorSettings {
        MonitorSettings {
            check_interval: Duration::from_secs(self.check_interval_secs),
            startup_delay: Duration::from_secs(self.startup_delay_secs),
            tcp_timeout: Duration::from_secs_f64(self.tcp_timeout_secs),
            max_log_entries: self.max_log_entries,
            fail_tolerance: self.fail_tolerance,
            window_size: self.window_size,
        }
    }

    pub fn bind_address(&self) -> Option<SocketAddr> {
        format!("{}:{}", self.bind_host, self.port).parse().ok()
    }
}
