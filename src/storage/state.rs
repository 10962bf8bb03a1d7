//! In-memory shared snapshot of the rail status

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use crate::types::{GlobalSnapshot, HostReport, RailStatus, TransitionLogEntry};

/// Single shared snapshot. Written by the health monitor, read by the API.
///
/// Every mutation happens under one write lock, so readers never see a status
/// without its timestamp or a half-applied history append.
#[derive(Debug, Clone)]
pub struct StateStore {
    inner: Arc<RwLock<GlobalSnapshot>>,
    max_log_entries: usize,
}

impl StateStore {
    pub fn new(max_log_entries: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(GlobalSnapshot::default())),
            max_log_entries: max_log_entries.max(1),
        }
    }

    pub async fn read(&self) -> GlobalSnapshot {
        self.inner.read().await.clone()
    }

    pub async fn history(&self) -> Vec<TransitionLogEntry> {
        self.inner.read().await.history.clone()
    }

    pub async fn hosts(&self) -> Vec<HostReport> {
        self.inner.read().await.hosts.clone()
    }

    pub async fn write(
        &self,
        rail_status: RailStatus,
        updated_at: DateTime<Utc>,
        entry: Option<TransitionLogEntry>,
    ) {
        let mut snapshot = self.inner.write().await;
        self.apply(&mut snapshot, rail_status, updated_at, entry);
    }

    /// Publishes the outcome of a check cycle.
    ///
    /// The previous status is read and the transition entry appended in the
    /// same critical section as the status update. Returns the previous status.
    pub async fn record_cycle(
        &self,
        rail_status: RailStatus,
        updated_at: DateTime<Utc>,
        cause: Option<&str>,
        hosts: Vec<HostReport>,
    ) -> RailStatus {
        let mut snapshot = self.inner.write().await;
        let previous = snapshot.rail_status;

        let entry = TransitionLogEntry::for_transition(previous, rail_status, updated_at, cause);
        if let Some(entry) = &entry {
            warn!(
                from = %previous,
                to = %entry.status,
                service = entry.service.as_deref().unwrap_or("-"),
                "Rail left healthy state"
            );
        } else if previous != rail_status && rail_status.is_ok() {
            info!(from = %previous, "Rail back to OK");
        }

        self.apply(&mut snapshot, rail_status, updated_at, entry);
        snapshot.hosts = hosts;
        previous
    }

    fn apply(
        &self,
        snapshot: &mut GlobalSnapshot,
        rail_status: RailStatus,
        updated_at: DateTime<Utc>,
        entry: Option<TransitionLogEntry>,
    ) {
        if let Some(entry) = entry {
            snapshot.history.push(entry);
            if snapshot.history.len() > self.max_log_entries {
                let excess = snapshot.history.len() - self.max_log_entries;
                snapshot.history.drain(..excess);
            }
        }
        snapshot.rail_status = rail_status;
        snapshot.updated_at = Some(updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn cause() -> Option<&'static str> {
        Some("Banco Central")
    }

    #[tokio::test]
    async fn starts_unknown_without_timestamp() {
        let store = StateStore::new(50);
        let snapshot = store.read().await;
        assert_eq!(snapshot.rail_status, RailStatus::Unknown);
        assert!(snapshot.updated_at.is_none());
        assert!(snapshot.history.is_empty());
    }

    #[tokio::test]
    async fn logs_only_when_leaving_ok() {
        let store = StateStore::new(50);
        let now = Utc::now();

        store.record_cycle(RailStatus::Ok, now, None, vec![]).await;
        store.record_cycle(RailStatus::Slow, now, cause(), vec![]).await;
        assert_eq!(store.history().await.len(), 1);

        store.record_cycle(RailStatus::Oscillating, now, cause(), vec![]).await;
        assert_eq!(store.history().await.len(), 1);

        store.record_cycle(RailStatus::Ok, now, None, vec![]).await;
        store.record_cycle(RailStatus::Ok, now, None, vec![]).await;

        let history = store.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status, RailStatus::Slow);
        assert_eq!(history[0].service.as_deref(), Some("Banco Central"));
    }

    #[tokio::test]
    async fn unknown_to_degraded_is_not_logged() {
        let store = StateStore::new(50);
        let previous = store
            .record_cycle(RailStatus::Oscillating, Utc::now(), cause(), vec![])
            .await;
        assert_eq!(previous, RailStatus::Unknown);
        assert!(store.history().await.is_empty());
    }

    #[tokio::test]
    async fn history_drops_oldest_past_capacity() {
        let store = StateStore::new(50);
        let base = Utc::now();

        for i in 0..51 {
            let at = base + ChronoDuration::seconds(i);
            store.record_cycle(RailStatus::Ok, at, None, vec![]).await;
            store.record_cycle(RailStatus::Slow, at, cause(), vec![]).await;
        }

        let history = store.history().await;
        assert_eq!(history.len(), 50);
        assert_eq!(history.first().unwrap().timestamp, base + ChronoDuration::seconds(1));
        assert_eq!(history.last().unwrap().timestamp, base + ChronoDuration::seconds(50));
    }

    #[tokio::test]
    async fn plain_write_stamps_status() {
        let store = StateStore::new(5);
        let now = Utc::now();
        store.write(RailStatus::Unknown, now, None).await;

        let snapshot = store.read().await;
        assert_eq!(snapshot.rail_status, RailStatus::Unknown);
        assert_eq!(snapshot.updated_at, Some(now));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn readers_see_consistent_snapshots() {
        let store = StateStore::new(500);
        let base = Utc::now();
        store
            .record_cycle(RailStatus::Ok, base - ChronoDuration::seconds(1), None, vec![])
            .await;

        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 0..200i64 {
                    let degraded_at = base + ChronoDuration::seconds(2 * i);
                    store.record_cycle(RailStatus::Slow, degraded_at, cause(), vec![]).await;
                    let healed_at = degraded_at + ChronoDuration::seconds(1);
                    store.record_cycle(RailStatus::Ok, healed_at, None, vec![]).await;
                    tokio::task::yield_now().await;
                }
            })
        };

        let mut readers = Vec::new();
        for _ in 0..3 {
            let store = store.clone();
            readers.push(tokio::spawn(async move {
                for _ in 0..500 {
                    let snapshot = store.read().await;
                    let Some(updated_at) = snapshot.updated_at else {
                        assert_eq!(snapshot.rail_status, RailStatus::Unknown);
                        continue;
                    };
                    match snapshot.rail_status {
                        RailStatus::Slow => {
                            // the entry for this degradation is already visible
                            let last = snapshot.history.last().expect("entry for current Lento");
                            assert_eq!(last.timestamp, updated_at);
                        }
                        RailStatus::Ok => {
                            if let Some(last) = snapshot.history.last() {
                                assert_eq!(last.timestamp + ChronoDuration::seconds(1), updated_at);
                            }
                        }
                        other => panic!("unexpected status {other}"),
                    }
                    tokio::task::yield_now().await;
                }
            }));
        }

        writer.await.unwrap();
        for reader in readers {
            reader.await.unwrap();
        }
    }
}
