use tracing::{debug, instrument, warn};

use super::category::{PitchCategory, QuantitativeFact};
use super::error::ScoringError;
use super::extraction::{AnalysisSource, ExtractedFacts, extract_currency};
use super::keywords::keyword_adjustment;
use super::sentiment::{PolarityAnalyzer, VaderAnalyzer, sentiment_bucket};
use super::thresholds::{Thresholds, gate_by_confidence};
use super::types::{CriterionType, FrameworkRow, ScoreReport, ScoringDetail};
use crate::constants::{
    MAX_CRITERION_SCORE, MIN_CRITERION_SCORE, NEUTRAL_CRITERION_SCORE, SCORE_SCALE,
};

/// A validated framework row.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub element: String,
    pub sub_criteria: String,
    pub weight: f64,
    pub criterion_type: CriterionType,
    /// `None` when the element names none of the canonical categories.
    pub category: Option<PitchCategory>,
    /// Set for quantitative rows whose element names market or traction.
    pub fact: Option<QuantitativeFact>,
}

impl Criterion {
    fn new(element: &str, sub_criteria: &str, weight: f64, criterion_type: CriterionType) -> Self {
        let fact = match criterion_type {
            CriterionType::Quantitative => QuantitativeFact::resolve(element),
            _ => None,
        };

        Self {
            element: element.to_string(),
            sub_criteria: sub_criteria.to_string(),
            weight,
            criterion_type,
            category: PitchCategory::resolve(element),
            fact,
        }
    }

    /// Why this criterion can never be computed, if that is the case.
    fn unmapped_reason(&self) -> Option<String> {
        match self.criterion_type {
            CriterionType::Unrecognized => {
                Some("type is neither Qualitative nor Quantitative".to_string())
            }
            CriterionType::Qualitative if self.category.is_none() => {
                Some("no pitch category matches the element".to_string())
            }
            CriterionType::Quantitative if self.fact.is_none() => {
                Some("element names neither market nor traction".to_string())
            }
            _ => None,
        }
    }
}

/// The ordered criteria a pitch is scored against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringFramework {
    criteria: Vec<Criterion>,
    skipped_rows: usize,
}

impl ScoringFramework {
    /// Builds a framework, skipping rows without a pitch element.
    ///
    /// Weights outside `[0, 1]` are rejected. Rows that cannot be mapped to a computation
    /// are kept and will score neutral.
    pub fn new(rows: Vec<FrameworkRow>) -> Result<Self, ScoringError> {
        let mut criteria = Vec::with_capacity(rows.len());
        let mut skipped_rows = 0;

        for row in rows {
            let Some(element) = row.element() else {
                skipped_rows += 1;
                continue;
            };

            let weight = row.weight.ok_or_else(|| ScoringError::MissingWeight {
                element: element.to_string(),
            })?;
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(ScoringError::InvalidWeight {
                    element: element.to_string(),
                    weight,
                });
            }

            let sub_criteria = row.sub_criteria.as_deref().map(str::trim).unwrap_or_default();
            criteria.push(Criterion::new(
                element,
                sub_criteria,
                weight,
                row.criterion_type(),
            ));
        }

        if skipped_rows > 0 {
            debug!(skipped_rows, "Skipped framework rows without a pitch element");
        }

        Ok(Self {
            criteria,
            skipped_rows,
        })
    }

    /// Like [`ScoringFramework::new`], but fails on any row that would default to neutral
    /// for structural reasons.
    pub fn strict(rows: Vec<FrameworkRow>) -> Result<Self, ScoringError> {
        let framework = Self::new(rows)?;

        if let Some((criterion, reason)) = framework
            .criteria
            .iter()
            .find_map(|c| c.unmapped_reason().map(|reason| (c, reason)))
        {
            return Err(ScoringError::UnmappedCriterion {
                element: criterion.element.clone(),
                reason,
            });
        }

        Ok(framework)
    }

    /// Parses a JSON array of framework rows.
    pub fn from_json_str(s: &str, strict: bool) -> Result<Self, ScoringError> {
        let rows: Vec<FrameworkRow> = serde_json::from_str(s)?;
        if strict {
            Self::strict(rows)
        } else {
            Self::new(rows)
        }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

/// Scores pitches against a [`ScoringFramework`].
#[derive(Debug, Clone)]
pub struct RubricEngine<A: PolarityAnalyzer = VaderAnalyzer> {
    analyzer: A,
    market_thresholds: Thresholds,
    traction_thresholds: Thresholds,
}

impl Default for RubricEngine<VaderAnalyzer> {
    fn default() -> Self {
        Self::new(VaderAnalyzer::default())
    }
}

impl<A: PolarityAnalyzer> RubricEngine<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            market_thresholds: Thresholds::market_size(),
            traction_thresholds: Thresholds::traction_revenue(),
        }
    }

    pub fn with_market_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.market_thresholds = thresholds;
        self
    }

    pub fn with_traction_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.traction_thresholds = thresholds;
        self
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn sentiment_bucket(&self, text: &str) -> u8 {
        sentiment_bucket(self.analyzer.compound(text))
    }

    /// Sentiment bucket plus keyword adjustment, rounded half-to-even into `[1, 5]`.
    pub fn qualitative_score(&self, text: &str) -> u8 {
        let raw = f64::from(self.sentiment_bucket(text)) + keyword_adjustment(text);
        raw.round_ties_even()
            .clamp(f64::from(MIN_CRITERION_SCORE), f64::from(MAX_CRITERION_SCORE)) as u8
    }

    /// Threshold-mapped `value`, gated by the confidence expressed in `confidence_text`.
    pub fn gated_numeric_score(
        &self,
        confidence_text: &str,
        value: f64,
        thresholds: &Thresholds,
    ) -> u8 {
        gate_by_confidence(self.sentiment_bucket(confidence_text), thresholds.score(value))
    }

    fn criterion_score(
        &self,
        criterion: &Criterion,
        analysis: &AnalysisSource,
        facts: &ExtractedFacts,
    ) -> Option<u8> {
        match criterion.criterion_type {
            CriterionType::Qualitative => analysis
                .text_for(criterion.category?)
                .map(|text| self.qualitative_score(text)),
            CriterionType::Quantitative => match criterion.fact? {
                QuantitativeFact::MarketSize => {
                    let value = facts.market_size_value().and_then(extract_currency)?;
                    let confidence = analysis.text_for(PitchCategory::Market)?;
                    Some(self.gated_numeric_score(confidence, value, &self.market_thresholds))
                }
                QuantitativeFact::TractionRevenue => facts
                    .current_financials_value()
                    .and_then(extract_currency)
                    .map(|value| self.traction_thresholds.score(value)),
            },
            CriterionType::Unrecognized => None,
        }
    }

    /// Scores every criterion and aggregates to `[0, 100]`.
    ///
    /// Criteria that cannot be computed score a neutral 3 and are flagged as defaulted.
    #[instrument(skip_all, fields(criteria = framework.len()))]
    pub fn score(
        &self,
        framework: &ScoringFramework,
        analysis: &AnalysisSource,
        facts: &ExtractedFacts,
    ) -> ScoreReport {
        let mut details = Vec::with_capacity(framework.len());
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for criterion in framework.criteria() {
            let computed = self.criterion_score(criterion, analysis, facts);
            if computed.is_none() {
                warn!(
                    element = %criterion.element,
                    criterion_type = ?criterion.criterion_type,
                    "Criterion could not be computed, scoring neutral"
                );
            }

            let score = computed.unwrap_or(NEUTRAL_CRITERION_SCORE);
            let weighted_contribution = f64::from(score) * criterion.weight * SCORE_SCALE;

            weighted_sum += weighted_contribution;
            total_weight += criterion.weight;

            details.push(ScoringDetail {
                element: criterion.element.clone(),
                sub_criteria: criterion.sub_criteria.clone(),
                weight: criterion.weight,
                score,
                weighted_contribution,
                defaulted: computed.is_none(),
            });
        }

        let overall = if total_weight > 0.0 {
            weighted_sum / total_weight
        } else {
            0.0
        };

        debug!(overall, total_weight, "Scored pitch");

        ScoreReport { overall, details }
    }
}

/// Scores with the default lexicon analyzer and thresholds.
pub fn score_pitch(
    framework: &ScoringFramework,
    analysis: &AnalysisSource,
    facts: &ExtractedFacts,
) -> ScoreReport {
    RubricEngine::<VaderAnalyzer>::default().score(framework, analysis, facts)
}
