//! BLAKE3-derived identifiers.
//!
//! Qdrant point ids must be integers or UUIDs, so investor ids are hashed down to a `u64`.
//! Fingerprints are full-width hex digests and are only ever compared for equality.


use blake3::Hasher;

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// With 64 bits the birthday bound sits around four billion items, far above any
/// realistic investor catalog.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[0..8]);
    u64::from_le_bytes(bytes)
}

/// Vector point id for an investor id.
#[inline]
pub fn investor_point_id(investor_id: &str) -> u64 {
    hash_to_u64(investor_id.as_bytes())
}

/// Hex fingerprint over an ordered list of fields.
///
/// Fields are length-prefixed so `["ab", "c"]` and `["a", "bc"]` differ.
pub fn fingerprint_fields(fields: &[&str]) -> String {
    let mut hasher = Hasher::new();
    for field in fields {
        hasher.update(&(field.len() as u64).to_le_bytes());
        hasher.update(field.as_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
