use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::vectordb::{
    IndexPoint, Metadata, SearchHit, StoredPoint, VectorDbError, VectorIndex, WriteConsistency,
};

/// In-memory index with exact cosine search.
///
/// Points are kept ordered by id, so equal scores come back in ascending id order.
#[derive(Default)]
pub struct MockVectorIndex {
    collections: std::sync::RwLock<HashMap<String, MockCollection>>,
    unavailable: AtomicBool,
    upserted_points: AtomicUsize,
}

#[derive(Default, Clone)]
struct MockCollection {
    vector_size: u64,
    points: BTreeMap<u64, MockStoredPoint>,
}

#[derive(Clone)]
struct MockStoredPoint {
    vector: Vec<f32>,
    metadata: Metadata,
}

impl MockVectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_count(&self, collection: &str) -> Option<usize> {
        self.collections
            .read()
            .ok()?
            .get(collection)
            .map(|c| c.points.len())
    }

    /// Total points written across all upserts (replacements included).
    pub fn upserted_points(&self) -> usize {
        self.upserted_points.load(Ordering::SeqCst)
    }

    /// Makes every subsequent call fail with [`VectorDbError::ConnectionFailed`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), VectorDbError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(VectorDbError::ConnectionFailed {
                url: "mock://".to_string(),
                message: "index marked unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl VectorIndex for MockVectorIndex {
    async fn ensure_collection(&self, name: &str, vector_size: u64) -> Result<(), VectorDbError> {
        self.check_available()?;

        let mut collections =
            self.collections
                .write()
                .map_err(|_| VectorDbError::CreateCollectionFailed {
                    collection: name.to_string(),
                    message: "lock poisoned".to_string(),
                })?;

        collections
            .entry(name.to_string())
            .or_insert(MockCollection {
                vector_size,
                points: BTreeMap::new(),
            });

        Ok(())
    }

    async fn upsert(
        &self,
        collection: &str,
        points: Vec<IndexPoint>,
        _consistency: WriteConsistency,
    ) -> Result<(), VectorDbError> {
        self.check_available()?;

        let mut collections =
            self.collections
                .write()
                .map_err(|_| VectorDbError::UpsertFailed {
                    collection: collection.to_string(),
                    message: "lock poisoned".to_string(),
                })?;

        let coll =
            collections
                .get_mut(collection)
                .ok_or_else(|| VectorDbError::CollectionNotFound {
                    collection: collection.to_string(),
                })?;

        for point in points {
            if point.vector.len() as u64 != coll.vector_size {
                return Err(VectorDbError::InvalidDimension {
                    expected: coll.vector_size as usize,
                    actual: point.vector.len(),
                });
            }

            coll.points.insert(
                point.id,
                MockStoredPoint {
                    vector: point.vector,
                    metadata: point.metadata,
                },
            );
            self.upserted_points.fetch_add(1, Ordering::SeqCst);
        }

        Ok(())
    }

    async fn search(
        &self,
        collection: &str,
        query: Vec<f32>,
        limit: u64,
    ) -> Result<Vec<SearchHit>, VectorDbError> {
        self.check_available()?;

        let collections = self
            .collections
            .read()
            .map_err(|_| VectorDbError::SearchFailed {
                collection: collection.to_string(),
                message: "lock poisoned".to_string(),
            })?;

        let coll =
            collections
                .get(collection)
                .ok_or_else(|| VectorDbError::CollectionNotFound {
                    collection: collection.to_string(),
                })?;

        let mut results: Vec<SearchHit> = coll
            .points
            .iter()
            .map(|(&id, p)| SearchHit {
                id,
                score: cosine_similarity(&query, &p.vector),
                metadata: p.metadata.clone(),
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        results.truncate(limit as usize);
        Ok(results)
    }

    async fn get(&self, collection: &str, id: u64) -> Result<Option<StoredPoint>, VectorDbError> {
        self.check_available()?;

        let collections = self
            .collections
            .read()
            .map_err(|_| VectorDbError::RetrieveFailed {
                collection: collection.to_string(),
                message: "lock poisoned".to_string(),
            })?;

        let coll =
            collections
                .get(collection)
                .ok_or_else(|| VectorDbError::CollectionNotFound {
                    collection: collection.to_string(),
                })?;

        Ok(coll.points.get(&id).map(|p| StoredPoint {
            id,
            metadata: p.metadata.clone(),
        }))
    }
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}
