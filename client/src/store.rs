use crate::error::Result;
use crate::source::ProjectSource;
use showcase_discovery::ProjectRecord;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use tokio::sync::Mutex;
use tokio::sync::RwLock;
use tracing::info;
use tracing::warn;

/// A complete record collection together with the generation that produced it.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub records: Arc<[ProjectRecord]>,
    pub generation: u64,
}

#[derive(Clone, Debug)]
pub enum RefreshOutcome {
    Replaced { records: usize, generation: u64 },
    /// Another refresh was already running; no request was issued.
    AlreadyInFlight,
}

/// Last-fetched project snapshot with a single-flight refresh policy.
///
/// Readers always see a whole snapshot. A failed refresh leaves the previous
/// snapshot in place.
pub struct RecordStore<S> {
    source: S,
    snapshot: RwLock<Snapshot>,
    refresh_gate: Mutex<()>,
    generation: AtomicU64,
}

impl<S: ProjectSource> RecordStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshot: RwLock::new(Snapshot {
                records: Arc::from(Vec::new()),
                generation: 0,
            }),
            refresh_gate: Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.snapshot.read().await.clone()
    }

    pub async fn records(&self) -> Arc<[ProjectRecord]> {
        Arc::clone(&self.snapshot.read().await.records)
    }

    /// Number of successful replacements so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub async fn refresh(&self) -> Result<RefreshOutcome> {
        let Ok(_guard) = self.refresh_gate.try_lock() else {
            info!("refresh already in flight; skipping");
            return Ok(RefreshOutcome::AlreadyInFlight);
        };
        self.fetch_and_replace().await
    }

    /// Deletes through the source, then refreshes. Waits for an in-flight
    /// refresh instead of skipping, so the returned snapshot never predates
    /// the delete.
    pub async fn delete_and_refresh(&self, id: &str) -> Result<RefreshOutcome> {
        self.source.delete_by_id(id).await?;
        info!(id, "deleted project");
        let _guard = self.refresh_gate.lock().await;
        self.fetch_and_replace().await
    }

    async fn fetch_and_replace(&self) -> Result<RefreshOutcome> {
        let records = match self.source.fetch_all().await {
            Ok(records) => records,
            Err(err) => {
                warn!("refresh failed, keeping previous snapshot: {err}");
                return Err(err);
            }
        };
        let count = records.len();
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        *self.snapshot.write().await = Snapshot {
            records: Arc::from(records),
            generation,
        };
        info!(records = count, generation, "record store replaced");
        Ok(RefreshOutcome::Replaced {
            records: count,
            generation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::AtomicBool;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    fn record(id: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[derive(Default)]
    struct FakeSource {
        records: StdMutex<Vec<ProjectRecord>>,
        fail: AtomicBool,
        fetches: AtomicUsize,
        release: Option<Arc<Notify>>,
    }

    #[async_trait]
    impl ProjectSource for FakeSource {
        async fn fetch_all(&self) -> Result<Vec<ProjectRecord>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if let Some(release) = &self.release {
                release.notified().await;
            }
            if self.fail.load(Ordering::SeqCst) {
                return Err(SourceError::InvalidConfig("backend down".to_string()));
            }
            Ok(self.records.lock().expect("records lock").clone())
        }

        async fn fetch_by_id(&self, id: &str) -> Result<Option<ProjectRecord>> {
            let records = self.records.lock().expect("records lock");
            Ok(records.iter().find(|record| record.id() == id).cloned())
        }

        async fn fetch_by_creator(&self, _creator_id: &str) -> Result<Vec<ProjectRecord>> {
            Ok(Vec::new())
        }

        async fn delete_by_id(&self, id: &str) -> Result<()> {
            self.records
                .lock()
                .expect("records lock")
                .retain(|record| record.id() != id);
            Ok(())
        }
    }

    fn source_with(ids: &[&str]) -> FakeSource {
        FakeSource {
            records: StdMutex::new(ids.iter().map(|id| record(id)).collect()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn refresh_replaces_snapshot() {
        let store = RecordStore::new(source_with(&["a", "b"]));
        assert!(store.records().await.is_empty());

        let outcome = store.refresh().await.expect("refresh");
        assert!(matches!(
            outcome,
            RefreshOutcome::Replaced {
                records: 2,
                generation: 1
            }
        ));
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.generation, 1);
        assert_eq!(snapshot.records.len(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_snapshot() {
        let store = RecordStore::new(source_with(&["a"]));
        store.refresh().await.expect("first refresh");

        store.source().fail.store(true, Ordering::SeqCst);
        assert!(store.refresh().await.is_err());
        assert_eq!(store.records().await.len(), 1);
        assert_eq!(store.generation(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_refresh_is_skipped() {
        let release = Arc::new(Notify::new());
        let source = FakeSource {
            release: Some(Arc::clone(&release)),
            ..source_with(&["a"])
        };
        let store = Arc::new(RecordStore::new(source));

        let first = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.refresh().await }
        });
        while store.source().fetches.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        let second = store.refresh().await.expect("second refresh");
        assert!(matches!(second, RefreshOutcome::AlreadyInFlight));

        release.notify_one();
        let first = first.await.expect("join").expect("first refresh");
        assert!(matches!(first, RefreshOutcome::Replaced { .. }));
        assert_eq!(store.source().fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn delete_then_refresh_drops_record() {
        let store = RecordStore::new(source_with(&["a", "b", "c"]));
        store.refresh().await.expect("refresh");

        let outcome = store.delete_and_refresh("b").await.expect("delete");
        assert!(matches!(
            outcome,
            RefreshOutcome::Replaced {
                records: 2,
                generation: 2
            }
        ));
        let ids: Vec<String> = store
            .records()
            .await
            .iter()
            .map(|record| record.id().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(
            store
                .source()
                .fetch_by_id("b")
                .await
                .expect("fetch")
                .is_none()
        );
    }
}
