use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Investor record as it arrives from a source, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stage_focus: Vec<String>,
    pub ticket_min_usd: f64,
    pub ticket_max_usd: f64,
    #[serde(default)]
    pub industry_tags: Vec<String>,
    #[serde(default)]
    pub preferred_geographies: Vec<String>,
    #[serde(default)]
    pub thesis_text: String,
    #[serde(default)]
    pub contact: ContactRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(default)]
    pub email: String,
}

/// Inclusive ticket-size range in USD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TicketRange {
    pub min_usd: f64,
    pub max_usd: f64,
}

impl TicketRange {
    /// Builds a range, rejecting negative, non-finite, or inverted bounds.
    pub fn new(min_usd: f64, max_usd: f64) -> Option<Self> {
        let valid = min_usd.is_finite() && max_usd.is_finite() && min_usd >= 0.0 && min_usd <= max_usd;
        valid.then_some(Self { min_usd, max_usd })
    }

    pub fn contains(&self, amount_usd: f64) -> bool {
        self.min_usd <= amount_usd && amount_usd <= self.max_usd
    }
}

/// A validated investor, ready to be embedded and indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct Investor {
    pub id: String,
    pub name: String,
    pub stage_focus: Vec<String>,
    pub ticket: TicketRange,
    pub industry_tags: Vec<String>,
    pub preferred_geographies: Vec<String>,
    pub thesis_text: String,
    pub contact_email: String,
}

impl Investor {
    /// Text fed to the embedding gateway: thesis followed by the industry tags.
    ///
    /// Any change to this text requires a fresh embedding.
    pub fn embedding_text(&self) -> String {
        if self.industry_tags.is_empty() {
            return self.thesis_text.clone();
        }
        format!("{} {}", self.thesis_text, self.industry_tags.join(" "))
    }
}

impl TryFrom<InvestorRecord> for Investor {
    type Error = CatalogError;

    fn try_from(record: InvestorRecord) -> Result<Self, Self::Error> {
        let id = record.id.trim().to_string();
        if id.is_empty() {
            return Err(CatalogError::InvalidRecord {
                id: record.id,
                reason: "id must not be empty".to_string(),
            });
        }

        let ticket = TicketRange::new(record.ticket_min_usd, record.ticket_max_usd).ok_or_else(
            || CatalogError::InvalidRecord {
                id: id.clone(),
                reason: format!(
                    "ticket range [{}, {}] must be finite, non-negative and ordered",
                    record.ticket_min_usd, record.ticket_max_usd
                ),
            },
        )?;

        Ok(Self {
            id,
            name: record.name,
            stage_focus: record.stage_focus,
            ticket,
            industry_tags: record.industry_tags,
            preferred_geographies: record.preferred_geographies,
            thesis_text: record.thesis_text,
            contact_email: record.contact.email,
        })
    }
}

/// Investor decoded from index metadata.
///
/// `ticket` is `None` when the stored bounds were missing or malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredInvestor {
    pub id: String,
    pub name: String,
    pub stage_focus: Vec<String>,
    pub ticket: Option<TicketRange>,
    pub industry_tags: Vec<String>,
    pub preferred_geographies: Vec<String>,
    pub thesis_text: String,
    pub contact_email: String,
}

impl StoredInvestor {
    /// Exact membership test on the stage focus.
    pub fn targets_stage(&self, stage: &str) -> bool {
        self.stage_focus.iter().any(|s| s == stage)
    }
}
