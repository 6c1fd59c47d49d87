//! Shared fixtures for integration tests.

#![allow(dead_code)]

use pitchmatch::catalog::{ContactRecord, InvestorRecord};
use pitchmatch::embedding::{EmbeddingError, EmbeddingGateway, l2_normalize};
use pitchmatch::matching::StartupQuery;

pub const TEST_COLLECTION: &str = "investors_test";

/// Terms the keyword embedder counts; one vector component per term.
pub const VOCABULARY: [&str; 10] = [
    "climate",
    "sustainability",
    "recycling",
    "manufacturing",
    "ocean",
    "plastic",
    "fintech",
    "payments",
    "banking",
    "furniture",
];

/// Bag-of-words embedder over [`VOCABULARY`], so similarity tracks shared terms.
///
/// A token counts toward a term when it starts with that term (`oceans` counts as `ocean`).
#[derive(Debug, Default)]
pub struct KeywordEmbedder;

impl EmbeddingGateway for KeywordEmbedder {
    fn dimension(&self) -> usize {
        VOCABULARY.len()
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vector = vec![0.0_f32; VOCABULARY.len()];
        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .map(str::to_lowercase)
        {
            if let Some(i) = VOCABULARY.iter().position(|term| token.starts_with(term)) {
                vector[i] += 1.0;
            }
        }
        l2_normalize(&mut vector);
        Ok(vector)
    }
}

pub fn investor(
    id: &str,
    thesis: &str,
    stages: &[&str],
    ticket: (f64, f64),
    tags: &[&str],
) -> InvestorRecord {
    InvestorRecord {
        id: id.to_string(),
        name: format!("{id} Capital"),
        stage_focus: stages.iter().map(|s| s.to_string()).collect(),
        ticket_min_usd: ticket.0,
        ticket_max_usd: ticket.1,
        industry_tags: tags.iter().map(|s| s.to_string()).collect(),
        preferred_geographies: vec!["US".to_string()],
        thesis_text: thesis.to_string(),
        contact: ContactRecord {
            email: format!("deals@{id}.vc"),
        },
    }
}

/// Four investors with known overlap against [`ocean_startup`]:
/// `ocean` > `green` > `industrial` > `fintech` by similarity.
pub fn seed_investors() -> Vec<InvestorRecord> {
    vec![
        investor(
            "green",
            "Climate and sustainability: recycling and manufacturing.",
            &["Seed", "Series A"],
            (100_000.0, 1_000_000.0),
            &["cleantech"],
        ),
        investor(
            "ocean",
            "Ocean plastic recycling with a sustainability lens.",
            &["Pre-Seed"],
            (50_000.0, 250_000.0),
            &["marine"],
        ),
        investor(
            "fintech",
            "Fintech infrastructure: payments and banking rails.",
            &["Seed"],
            (500_000.0, 2_000_000.0),
            &["finance"],
        ),
        investor(
            "industrial",
            "Sustainability in manufacturing and climate tech.",
            &["Series B"],
            (5_000_000.0, 20_000_000.0),
            &["industry"],
        ),
    ]
}

pub fn ocean_startup(stage: Option<&str>, ask: Option<f64>) -> StartupQuery {
    StartupQuery {
        problem_statement: "Plastic pollution in oceans keeps growing.".to_string(),
        solution_description: "Recycling plastic into furniture.".to_string(),
        industry_tags: vec!["sustainability".to_string(), "manufacturing".to_string()],
        stage: stage.map(str::to_string),
        funding_ask_usd: ask,
    }
}

pub fn ids(matches: &[pitchmatch::matching::CandidateMatch]) -> Vec<&str> {
    matches.iter().map(|m| m.investor.id.as_str()).collect()
}
