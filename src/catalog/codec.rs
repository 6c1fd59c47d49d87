//! Metadata codec for indexed investors.
//!
//! List-valued fields are stored as JSON arrays. Comma-joining would be lossy for entries
//! that themselves contain commas, and the candidate filter relies on the stage list
//! decoding back exactly.

use tracing::debug;

use super::error::CatalogError;
use super::types::{Investor, StoredInvestor, TicketRange};
use crate::hashing::fingerprint_fields;
use crate::vectordb::{Metadata, MetadataValue};

pub const KEY_ID: &str = "id";
pub const KEY_NAME: &str = "name";
pub const KEY_STAGE_FOCUS: &str = "stage_focus";
pub const KEY_TICKET_MIN: &str = "ticket_min_usd";
pub const KEY_TICKET_MAX: &str = "ticket_max_usd";
pub const KEY_INDUSTRY_TAGS: &str = "industry_tags";
pub const KEY_GEOGRAPHIES: &str = "preferred_geographies";
pub const KEY_THESIS: &str = "thesis_text";
pub const KEY_CONTACT_EMAIL: &str = "contact_email";
pub const KEY_FINGERPRINT: &str = "record_fingerprint";

/// Serializes a list as a JSON array.
pub fn encode_list(list: &[String]) -> Result<String, CatalogError> {
    serde_json::to_string(list).map_err(|e| CatalogError::Encode {
        reason: e.to_string(),
    })
}

/// Parses a JSON array of strings.
///
/// Anything that is not a JSON string array is treated as a single raw entry.
pub fn decode_list(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(list) => list,
        Err(e) => {
            debug!(raw, error = %e, "Stored list is not a JSON array, using raw value");
            vec![raw.to_string()]
        }
    }
}

/// Fingerprint over every indexed field of `investor`.
///
/// Equal fingerprints mean the stored embedding and metadata are current.
pub fn record_fingerprint(investor: &Investor) -> Result<String, CatalogError> {
    let stage_focus = encode_list(&investor.stage_focus)?;
    let industry_tags = encode_list(&investor.industry_tags)?;
    let geographies = encode_list(&investor.preferred_geographies)?;
    let ticket_min = investor.ticket.min_usd.to_string();
    let ticket_max = investor.ticket.max_usd.to_string();
    let embedding_text = investor.embedding_text();

    Ok(fingerprint_fields(&[
        &investor.id,
        &investor.name,
        &stage_focus,
        &ticket_min,
        &ticket_max,
        &industry_tags,
        &geographies,
        &investor.contact_email,
        &embedding_text,
    ]))
}

/// Encodes an investor into index metadata, including its fingerprint.
pub fn encode_metadata(investor: &Investor) -> Result<Metadata, CatalogError> {
    let mut metadata = Metadata::new();
    metadata.insert(KEY_ID.to_string(), investor.id.as_str().into());
    metadata.insert(KEY_NAME.to_string(), investor.name.as_str().into());
    metadata.insert(
        KEY_STAGE_FOCUS.to_string(),
        encode_list(&investor.stage_focus)?.into(),
    );
    metadata.insert(KEY_TICKET_MIN.to_string(), investor.ticket.min_usd.into());
    metadata.insert(KEY_TICKET_MAX.to_string(), investor.ticket.max_usd.into());
    metadata.insert(
        KEY_INDUSTRY_TAGS.to_string(),
        encode_list(&investor.industry_tags)?.into(),
    );
    metadata.insert(
        KEY_GEOGRAPHIES.to_string(),
        encode_list(&investor.preferred_geographies)?.into(),
    );
    metadata.insert(KEY_THESIS.to_string(), investor.thesis_text.as_str().into());
    metadata.insert(
        KEY_CONTACT_EMAIL.to_string(),
        investor.contact_email.as_str().into(),
    );
    metadata.insert(
        KEY_FINGERPRINT.to_string(),
        record_fingerprint(investor)?.into(),
    );
    Ok(metadata)
}

/// Returns the fingerprint stored by [`encode_metadata`], if any.
pub fn stored_fingerprint(metadata: &Metadata) -> Option<&str> {
    metadata.get(KEY_FINGERPRINT).and_then(MetadataValue::as_str)
}

/// Decodes index metadata. Never fails: malformed ticket bounds yield `ticket: None`.
pub fn decode_metadata(metadata: &Metadata) -> StoredInvestor {
    let text = |key: &str| {
        metadata
            .get(key)
            .and_then(MetadataValue::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let list = |key: &str| {
        metadata
            .get(key)
            .and_then(MetadataValue::as_str)
            .map(decode_list)
            .unwrap_or_default()
    };

    let ticket_min = metadata.get(KEY_TICKET_MIN).and_then(MetadataValue::as_f64);
    let ticket_max = metadata.get(KEY_TICKET_MAX).and_then(MetadataValue::as_f64);
    let ticket = match (ticket_min, ticket_max) {
        (Some(min), Some(max)) => TicketRange::new(min, max),
        _ => None,
    };

    StoredInvestor {
        id: text(KEY_ID),
        name: text(KEY_NAME),
        stage_focus: list(KEY_STAGE_FOCUS),
        ticket,
        industry_tags: list(KEY_INDUSTRY_TAGS),
        preferred_geographies: list(KEY_GEOGRAPHIES),
        thesis_text: text(KEY_THESIS),
        contact_email: text(KEY_CONTACT_EMAIL),
    }
}
