use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CriterionType {
    Qualitative,
    Quantitative,
    #[serde(other)]
    Unrecognized,
}

/// One row of a scoring framework table.
///
/// Every cell may be null or absent: spreadsheet exports leave blank rows that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkRow {
    #[serde(rename = "Pitch Element", default)]
    pub pitch_element: Option<String>,
    #[serde(rename = "Sub-Criteria", default)]
    pub sub_criteria: Option<String>,
    #[serde(rename = "Weight (0–1)", alias = "Weight", default)]
    pub weight: Option<f64>,
    #[serde(rename = "Type", default)]
    pub criterion_type: Option<CriterionType>,
}

impl FrameworkRow {
    pub fn new(
        pitch_element: &str,
        sub_criteria: &str,
        weight: f64,
        criterion_type: CriterionType,
    ) -> Self {
        Self {
            pitch_element: Some(pitch_element.to_string()),
            sub_criteria: Some(sub_criteria.to_string()),
            weight: Some(weight),
            criterion_type: Some(criterion_type),
        }
    }

    /// Missing `Type` cells count as unrecognized.
    pub fn criterion_type(&self) -> CriterionType {
        self.criterion_type.unwrap_or(CriterionType::Unrecognized)
    }

    /// The pitch element, or `None` for blank rows (which are skipped entirely).
    ///
    /// `"nan"` counts as blank: spreadsheet exports write it for empty cells.
    pub fn element(&self) -> Option<&str> {
        self.pitch_element
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty() && !e.eq_ignore_ascii_case("nan"))
    }
}

/// Per-row scoring outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringDetail {
    pub element: String,
    pub sub_criteria: String,
    pub weight: f64,
    /// 1-5.
    pub score: u8,
    /// `score × weight × 20`.
    pub weighted_contribution: f64,
    /// `true` when the score fell back to neutral.
    pub defaulted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Weighted aggregate in `[0, 100]`.
    pub overall: f64,
    pub details: Vec<ScoringDetail>,
}

impl ScoreReport {
    pub fn total_weight(&self) -> f64 {
        self.details.iter().map(|d| d.weight).sum()
    }
}
