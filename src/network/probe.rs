//! DNS + TCP reachability probe

use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tracing::debug;
use crate::types::{HostTarget, ProbeResult};

/// Something that can check whether a host is reachable.
///
/// Implementations must not fail: every error is reported as
/// [`ProbeResult::Unreachable`].
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, target: &HostTarget) -> ProbeResult;
}

/// Probe backed by the system resolver and a plain TCP connect.
#[derive(Debug, Clone)]
pub struct NetworkProbe {
    timeout: Duration,
}

impl NetworkProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Probe for NetworkProbe {
    async fn probe(&self, target: &HostTarget) -> ProbeResult {
        probe(&target.hostname, target.port, self.timeout).await
    }
}

/// Resolves `hostname` and times a TCP connect to it.
///
/// Resolution and connect are each bounded by `timeout`. The latency covers
/// the connect only. No retries.
pub async fn probe(hostname: &str, port: u16, timeout: Duration) -> ProbeResult {
    let addrs = match resolve(hostname, port, timeout).await {
        Some(addrs) => addrs,
        None => return ProbeResult::Unreachable,
    };

    let started = Instant::now();
    match tokio::time::timeout(timeout, TcpStream::connect(&addrs[..])).await {
        Ok(Ok(stream)) => {
            let latency = started.elapsed();
            drop(stream);
            ProbeResult::Reachable { latency }
        }
        Ok(Err(e)) => {
            debug!(host = %hostname, port, error = %e, "TCP connect failed");
            ProbeResult::Unreachable
        }
        Err(_) => {
            debug!(host = %hostname, port, ?timeout, "TCP connect timed out");
            ProbeResult::Unreachable
        }
    }
}

async fn resolve(hostname: &str, port: u16, timeout: Duration) -> Option<Vec<SocketAddr>> {
    match tokio::time::timeout(timeout, tokio::net::lookup_host((hostname, port))).await {
        Ok(Ok(addrs)) => {
            let addrs: Vec<SocketAddr> = addrs.collect();
            if addrs.is_empty() {
                debug!(host = %hostname, "DNS lookup returned no addresses");
                None
            } else {
                Some(addrs)
            }
        }
        Ok(Err(e)) => {
            debug!(host = %hostname, error = %e, "DNS lookup failed");
            None
        }
        Err(_) => {
            debug!(host = %hostname, ?timeout, "DNS lookup timed out");
            None
        }
    }
}
