// Report store and export: completed analyses are kept in memory, keyed by id,
// and rendered to markdown on request.
// The store is bounded; the oldest report is evicted first once capacity is reached.

pub mod handlers;
pub mod render;

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::analysis::result::AnalysisResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReport {
    pub id: Uuid,
    pub job_role: String,
    pub generated_at: DateTime<Utc>,
    pub result: AnalysisResult,
}

#[derive(Default)]
struct StoreInner {
    reports: HashMap<Uuid, StoredReport>,
    order: VecDeque<Uuid>,
}

/// Cheap to clone; all clones share the same reports.
#[derive(Clone)]
pub struct ReportStore {
    inner: Arc<RwLock<StoreInner>>,
    capacity: usize,
}

impl ReportStore {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
            capacity: capacity.max(1),
        }
    }

    pub async fn insert(&self, report: StoredReport) {
        let mut inner = self.inner.write().await;

        if inner.reports.insert(report.id, report.clone()).is_none() {
            inner.order.push_back(report.id);
        }

        while inner.order.len() > self.capacity {
            if let Some(evicted) = inner.order.pop_front() {
                inner.reports.remove(&evicted);
                debug!("Evicted report {evicted}");
            }
        }
    }

    pub async fn get(&self, id: Uuid) -> Option<StoredReport> {
        self.inner.read().await.reports.get(&id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.reports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::matching::MatchResult;
    use crate::analysis::result::assemble_result;

    fn report(job_role: &str) -> StoredReport {
        StoredReport {
            id: Uuid::new_v4(),
            job_role: job_role.to_string(),
            generated_at: Utc::now(),
            result: assemble_result(MatchResult::empty(), None, ""),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = ReportStore::new(4);
        let stored = report("Data Scientist");
        store.insert(stored.clone()).await;
        assert_eq!(store.get(stored.id).await, Some(stored));
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_oldest_report_is_evicted() {
        let store = ReportStore::new(2);
        let first = report("a");
        let second = report("b");
        let third = report("c");
        store.insert(first.clone()).await;
        store.insert(second.clone()).await;
        store.insert(third.clone()).await;

        assert_eq!(store.count().await, 2);
        assert!(store.get(first.id).await.is_none());
        assert!(store.get(second.id).await.is_some());
        assert!(store.get(third.id).await.is_some());
    }

    #[tokio::test]
    async fn test_reinsert_same_id_does_not_duplicate() {
        let store = ReportStore::new(2);
        let stored = report("a");
        store.insert(stored.clone()).await;
        store.insert(stored.clone()).await;
        store.insert(report("b")).await;
        assert_eq!(store.count().await, 2);
        assert!(store.get(stored.id).await.is_some());
    }

    #[tokio::test]
    async fn test_zero_capacity_keeps_latest() {
        let store = ReportStore::new(0);
        let stored = report("a");
        store.insert(report("old")).await;
        store.insert(stored.clone()).await;
        assert_eq!(store.count().await, 1);
        assert!(store.get(stored.id).await.is_some());
    }
}
