use serde::{Deserialize, Serialize};

use super::error::MatchingError;

/// Startup attributes for one recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartupQuery {
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub solution_description: String,
    #[serde(default)]
    pub industry_tags: Vec<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub funding_ask_usd: Option<f64>,
}

impl StartupQuery {
    /// Stage label, if present and non-blank.
    pub fn stage(&self) -> Option<&str> {
        self.stage
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn funding_ask_usd(&self) -> Option<f64> {
        self.funding_ask_usd
    }

    pub fn validate(&self) -> Result<(), MatchingError> {
        if let Some(ask) = self.funding_ask_usd
            && (!ask.is_finite() || ask < 0.0)
        {
            return Err(MatchingError::InvalidQuery {
                reason: format!("funding_ask_usd must be a non-negative number, got {ask}"),
            });
        }
        Ok(())
    }

    /// Text used for the similarity query.
    ///
    /// Problem, solution, space-joined tags, `Stage: {stage}` and `Funding ask: {ask}`,
    /// each omitted when absent or blank.
    pub fn query_text(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(5);

        let problem = self.problem_statement.trim();
        if !problem.is_empty() {
            parts.push(problem.to_string());
        }

        let solution = self.solution_description.trim();
        if !solution.is_empty() {
            parts.push(solution.to_string());
        }

        let tags: Vec<&str> = self
            .industry_tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if !tags.is_empty() {
            parts.push(tags.join(" "));
        }

        if let Some(stage) = self.stage() {
            parts.push(format!("Stage: {stage}"));
        }

        if let Some(ask) = self.funding_ask_usd {
            parts.push(format!("Funding ask: {ask}"));
        }

        parts.join(" ")
    }
}
