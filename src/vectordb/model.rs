use std::collections::{BTreeMap, HashMap};

use qdrant_client::qdrant::point_id::PointIdOptions;
use qdrant_client::qdrant::{PointId, RetrievedPoint, ScoredPoint, Value};

/// A scalar metadata value stored alongside a vector.
///
/// Lists are stored as serialized text; see [`crate::catalog::codec`].
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Text(String),
    Integer(i64),
    Double(f64),
}

impl MetadataValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the value. Text is accepted when it parses as a finite number.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            MetadataValue::Double(d) => *d,
            MetadataValue::Integer(i) => *i as f64,
            MetadataValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Double(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Integer(value)
    }
}

pub type Metadata = BTreeMap<String, MetadataValue>;

#[derive(Debug, Clone)]
pub struct IndexPoint {
    pub id: u64,
    pub vector: Vec<f32>,
    pub metadata: Metadata,
}

impl IndexPoint {
    pub fn new(id: u64, vector: Vec<f32>, metadata: Metadata) -> Self {
        Self {
            id,
            vector,
            metadata,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchHit {
    pub id: u64,
    /// Cosine similarity; higher is more similar.
    pub score: f32,
    pub metadata: Metadata,
}

impl SearchHit {
    pub fn from_scored_point(point: ScoredPoint) -> Option<Self> {
        let id = numeric_point_id(point.id)?;

        Some(SearchHit {
            id,
            score: point.score,
            metadata: metadata_from_payload(point.payload),
        })
    }
}

/// A point fetched by id (no score).
#[derive(Debug, Clone)]
pub struct StoredPoint {
    pub id: u64,
    pub metadata: Metadata,
}

impl StoredPoint {
    pub fn from_retrieved_point(point: RetrievedPoint) -> Option<Self> {
        let id = numeric_point_id(point.id)?;

        Some(StoredPoint {
            id,
            metadata: metadata_from_payload(point.payload),
        })
    }
}

fn numeric_point_id(id: Option<PointId>) -> Option<u64> {
    match id.and_then(|pid| pid.point_id_options) {
        Some(PointIdOptions::Num(n)) => Some(n),
        _ => None,
    }
}

/// Converts a Qdrant payload, dropping values that are not scalar text or numbers.
pub(crate) fn metadata_from_payload(payload: HashMap<String, Value>) -> Metadata {
    payload
        .into_iter()
        .filter_map(|(key, value)| {
            let converted = if let Some(s) = value.as_str() {
                MetadataValue::Text(s.to_string())
            } else if let Some(i) = value.as_integer() {
                MetadataValue::Integer(i)
            } else if let Some(d) = value.as_double() {
                MetadataValue::Double(d)
            } else {
                return None;
            };
            Some((key, converted))
        })
        .collect()
}

pub(crate) fn metadata_to_payload(metadata: Metadata) -> HashMap<String, Value> {
    metadata
        .into_iter()
        .map(|(key, value)| {
            let value: Value = match value {
                MetadataValue::Text(s) => s.into(),
                MetadataValue::Integer(i) => i.into(),
                MetadataValue::Double(d) => d.into(),
            };
            (key, value)
        })
        .collect()
}
