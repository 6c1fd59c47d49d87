use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::category::PitchCategory;
use super::error::ScoringError;

static CURRENCY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([0-9][0-9.,]*)").expect("currency pattern is a valid regex")
});

static PLAIN_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]+)?$")
        .expect("number pattern is a valid regex")
});

/// First `$`-prefixed figure in `raw`, in the units written.
///
/// Commas are only accepted as thousands separators; locale variants such as
/// `$1.234,56` yield `None` rather than a guess.
pub fn extract_currency(raw: &str) -> Option<f64> {
    let captured = CURRENCY_PATTERN.captures(raw)?.get(1)?.as_str();
    let figure = captured.trim_end_matches(['.', ',']);

    if !PLAIN_NUMBER.is_match(figure) {
        return None;
    }

    figure
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactValue {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    #[serde(default)]
    pub market_metrics: Vec<FactValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessPerformance {
    #[serde(default)]
    pub current_financials: Vec<FactValue>,
}

/// Structured facts pulled from a pitch deck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFacts {
    #[serde(default)]
    pub market_analysis: MarketAnalysis,
    #[serde(default)]
    pub business_performance_and_traction: BusinessPerformance,
}

impl ExtractedFacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_market_size(mut self, value: impl Into<String>) -> Self {
        self.market_analysis.market_metrics.push(FactValue {
            value: value.into(),
        });
        self
    }

    pub fn with_current_financials(mut self, value: impl Into<String>) -> Self {
        self.business_performance_and_traction
            .current_financials
            .push(FactValue {
                value: value.into(),
            });
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self, ScoringError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn market_size_value(&self) -> Option<&str> {
        self.market_analysis
            .market_metrics
            .first()
            .map(|f| f.value.as_str())
    }

    pub fn current_financials_value(&self) -> Option<&str> {
        self.business_performance_and_traction
            .current_financials
            .first()
            .map(|f| f.value.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct AnalysisFile {
    #[serde(default)]
    questions: Vec<AnalysisEntry>,
}

#[derive(Debug, Deserialize)]
struct AnalysisEntry {
    question_number: u32,
    #[serde(default)]
    analysis: String,
}

/// Free-text analysis keyed by 1-based question number.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "AnalysisFile")]
pub struct AnalysisSource {
    by_question: BTreeMap<u32, String>,
}

impl From<AnalysisFile> for AnalysisSource {
    fn from(file: AnalysisFile) -> Self {
        let mut source = Self::default();
        for entry in file.questions {
            source.insert(entry.question_number, entry.analysis);
        }
        source
    }
}

impl AnalysisSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(s: &str) -> Result<Self, ScoringError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Later entries for the same question replace earlier ones.
    pub fn insert(&mut self, question_number: u32, analysis: impl Into<String>) {
        self.by_question.insert(question_number, analysis.into());
    }

    pub fn with_category(mut self, category: PitchCategory, analysis: impl Into<String>) -> Self {
        self.insert(category.question_number(), analysis);
        self
    }

    /// Analysis for `category`, if present and not blank.
    pub fn text_for(&self, category: PitchCategory) -> Option<&str> {
        self.by_question
            .get(&category.question_number())
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.by_question.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }
}
