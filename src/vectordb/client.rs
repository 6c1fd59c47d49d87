use qdrant_client::Qdrant;
use qdrant_client::qdrant::{
    CreateCollectionBuilder, Distance, GetPointsBuilder, PointId, PointStruct,
    SearchPointsBuilder, UpsertPointsBuilder, VectorParamsBuilder,
};
use std::future::Future;

use super::WriteConsistency;
use super::error::VectorDbError;
use super::model::{IndexPoint, SearchHit, StoredPoint, metadata_to_payload};

#[derive(Clone)]
/// Direct Qdrant client wrapper.
pub struct QdrantIndex {
    client: Qdrant,
    url: String,
}

impl std::fmt::Debug for QdrantIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QdrantIndex")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl QdrantIndex {
    /// Creates a client for `url`.
    pub fn new(url: &str) -> Result<Self, VectorDbError> {
        let client =
            Qdrant::from_url(url)
                .build()
                .map_err(|e| VectorDbError::ConnectionFailed {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Returns the configured URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Performs a basic health check request.
    pub async fn health_check(&self) -> Result<(), VectorDbError> {
        self.client
            .health_check()
            .await
            .map_err(|e| VectorDbError::ConnectionFailed {
                url: self.url.clone(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    async fn create_collection(&self, name: &str, vector_size: u64) -> Result<(), VectorDbError> {
        let vectors_config = VectorParamsBuilder::new(vector_size, Distance::Cosine);

        self.client
            .create_collection(CreateCollectionBuilder::new(name).vectors_config(vectors_config))
            .await
            .map_err(|e| VectorDbError::CreateCollectionFailed {
                collection: name.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}

/// Minimal async interface used by catalog sync and recommendation.
pub trait VectorIndex: Send + Sync {
    /// Ensures a collection exists.
    fn ensure_collection(
        &self,
        name: &str,
        vector_size: u64,
    ) -> impl Future<Output = Result<(), VectorDbError>> + Send;

    /// Inserts or replaces points by id.
    fn upsert(
        &self,
        collection: &str,
        points: Vec<IndexPoint>,
        consistency: WriteConsistency,
    ) -> impl Future<Output = Result<(), VectorDbError>> + Send;

    /// Returns up to `limit` hits ordered by descending similarity.
    fn search(
        &self,
        collection: &str,
        query: Vec<f32>,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<SearchHit>, VectorDbError>> + Send;

    /// Fetches a single point's metadata by id.
    fn get(
        &self,
        collection: &str,
        id: u64,
    ) -> impl Future<Output = Result<Option<StoredPoint>, VectorDbError>> + Send;
}

impl VectorIndex for QdrantIndex {
    async fn ensure_collection(&self, name: &str, vector_size: u64) -> Result<(), VectorDbError> {
        let exists = self.client.collection_exists(name).await.map_err(|e| {
            VectorDbError::CreateCollectionFailed {
                collection: name.to_string(),
                message: e.to_string(),
            }
        })?;

        if !exists {
            self.create_collection(name, vector_size).await?;
        }

        Ok(())
    }

    async fn upsert(
        &self,
        collection: &str,
        points: Vec<IndexPoint>,
        consistency: WriteConsistency,
    ) -> Result<(), VectorDbError> {
        if points.is_empty() {
            return Ok(());
        }

        let qdrant_points: Vec<PointStruct> = points
            .into_iter()
            .map(|p| PointStruct::new(p.id, p.vector, metadata_to_payload(p.metadata)))
            .collect();

        self.client
            .upsert_points(
                UpsertPointsBuilder::new(collection, qdrant_points).wait(consistency.into()),
            )
            .await
            .map_err(|e| VectorDbError::UpsertFailed {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    async fn search(
        &self,
        collection: &str,
        query: Vec<f32>,
        limit: u64,
    ) -> Result<Vec<SearchHit>, VectorDbError> {
        let search_builder = SearchPointsBuilder::new(collection, query, limit).with_payload(true);

        let search_result = self
            .client
            .search_points(search_builder)
            .await
            .map_err(|e| VectorDbError::SearchFailed {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        Ok(search_result
            .result
            .into_iter()
            .filter_map(SearchHit::from_scored_point)
            .collect())
    }

    async fn get(&self, collection: &str, id: u64) -> Result<Option<StoredPoint>, VectorDbError> {
        let ids: Vec<PointId> = vec![id.into()];

        let response = self
            .client
            .get_points(GetPointsBuilder::new(collection, ids).with_payload(true))
            .await
            .map_err(|e| VectorDbError::RetrieveFailed {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        Ok(response
            .result
            .into_iter()
            .find_map(StoredPoint::from_retrieved_point))
    }
}
