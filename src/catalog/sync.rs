use std::collections::HashMap;
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use super::codec::{encode_metadata, stored_fingerprint};
use super::error::CatalogError;
use super::source::InvestorSource;
use super::types::{Investor, InvestorRecord};
use crate::constants::DEFAULT_SYNC_CONCURRENCY;
use crate::embedding::{EmbeddingError, EmbeddingGateway};
use crate::hashing::investor_point_id;
use crate::vectordb::{IndexPoint, VectorIndex, WriteConsistency};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No point existed for this investor.
    Inserted,
    /// The stored point was stale and has been re-embedded.
    Updated,
    /// The stored fingerprint matched; nothing was written.
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// `(investor id, reason)` for records that failed validation.
    pub rejected: Vec<(String, String)>,
}

impl SyncReport {
    fn record(&mut self, outcome: SyncOutcome) {
        match outcome {
            SyncOutcome::Inserted => self.inserted += 1,
            SyncOutcome::Updated => self.updated += 1,
            SyncOutcome::Unchanged => self.unchanged += 1,
        }
    }

    pub fn written(&self) -> usize {
        self.inserted + self.updated
    }
}

/// Keeps the vector index in step with an investor source.
///
/// Writes for the same investor id are serialized; distinct ids sync concurrently
/// up to the configured limit.
pub struct CatalogSync<E, V> {
    embedder: Arc<E>,
    index: Arc<V>,
    collection: String,
    concurrency: usize,
    id_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl<E, V> std::fmt::Debug for CatalogSync<E, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogSync")
            .field("collection", &self.collection)
            .field("concurrency", &self.concurrency)
            .finish_non_exhaustive()
    }
}

impl<E: EmbeddingGateway, V: VectorIndex> CatalogSync<E, V> {
    pub fn new(embedder: Arc<E>, index: Arc<V>, collection: impl Into<String>) -> Self {
        Self {
            embedder,
            index,
            collection: collection.into(),
            concurrency: DEFAULT_SYNC_CONCURRENCY,
            id_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub async fn ensure_collection(&self) -> Result<(), CatalogError> {
        self.index
            .ensure_collection(&self.collection, self.embedder.dimension() as u64)
            .await?;
        Ok(())
    }

    /// Validates and syncs one raw record.
    pub async fn sync_record(&self, record: InvestorRecord) -> Result<SyncOutcome, CatalogError> {
        let investor = Investor::try_from(record)?;
        self.sync_investor(&investor).await
    }

    #[instrument(skip(self, investor), fields(investor_id = %investor.id))]
    pub async fn sync_investor(&self, investor: &Investor) -> Result<SyncOutcome, CatalogError> {
        let lock = self.lock_for(&investor.id);
        let result = {
            let _guard = lock.lock().await;
            self.write_investor(investor).await
        };
        self.release_lock(&investor.id, lock);
        result
    }

    async fn write_investor(&self, investor: &Investor) -> Result<SyncOutcome, CatalogError> {
        let point_id = investor_point_id(&investor.id);
        let metadata = encode_metadata(investor)?;

        let outcome = match self.index.get(&self.collection, point_id).await? {
            None => SyncOutcome::Inserted,
            Some(existing)
                if stored_fingerprint(&existing.metadata) == stored_fingerprint(&metadata) =>
            {
                debug!("Fingerprint unchanged, skipping");
                return Ok(SyncOutcome::Unchanged);
            }
            Some(_) => SyncOutcome::Updated,
        };

        let vector = self.embedder.embed(&investor.embedding_text()).await?;
        if vector.len() != self.embedder.dimension() {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.embedder.dimension(),
                actual: vector.len(),
            }
            .into());
        }

        self.index
            .upsert(
                &self.collection,
                vec![IndexPoint::new(point_id, vector, metadata)],
                WriteConsistency::Strong,
            )
            .await?;

        debug!(point_id, ?outcome, "Investor indexed");
        Ok(outcome)
    }

    /// Syncs a batch. Invalid records are reported; index or embedding failures abort.
    pub async fn sync_all(&self, records: Vec<InvestorRecord>) -> Result<SyncReport, CatalogError> {
        let total = records.len();

        let results: Vec<(String, Result<SyncOutcome, CatalogError>)> = stream::iter(records)
            .map(|record| async move {
                let id = record.id.clone();
                (id, self.sync_record(record).await)
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        let mut report = SyncReport::default();
        for (id, result) in results {
            match result {
                Ok(outcome) => report.record(outcome),
                Err(CatalogError::InvalidRecord { reason, .. }) => {
                    warn!(investor_id = %id, reason = %reason, "Rejected investor record");
                    report.rejected.push((id, reason));
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            total,
            inserted = report.inserted,
            updated = report.updated,
            unchanged = report.unchanged,
            rejected = report.rejected.len(),
            "Catalog sync complete"
        );

        Ok(report)
    }

    pub async fn sync_from<S: InvestorSource>(&self, source: &S) -> Result<SyncReport, CatalogError> {
        let records = source.load()?;
        self.sync_all(records).await
    }

    fn lock_for(&self, investor_id: &str) -> Arc<tokio::sync::Mutex<()>> {
        self.id_locks
            .lock()
            .entry(investor_id.to_string())
            .or_default()
            .clone()
    }

    /// Drops the id's lock entry once no other task holds or awaits it.
    fn release_lock(&self, investor_id: &str, lock: Arc<tokio::sync::Mutex<()>>) {
        let mut locks = self.id_locks.lock();
        drop(lock);
        if locks
            .get(investor_id)
            .is_some_and(|entry| Arc::strong_count(entry) == 1)
        {
            locks.remove(investor_id);
        }
    }

    #[cfg(test)]
    pub(crate) fn tracked_locks(&self) -> usize {
        self.id_locks.lock().len()
    }
}
