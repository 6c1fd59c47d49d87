use std::collections::HashMap;

use super::sentiment::PolarityAnalyzer;

/// Analyzer returning preset compound scores, keyed by exact text.
#[derive(Debug, Clone, Default)]
pub struct FixedPolarity {
    default: f64,
    overrides: HashMap<String, f64>,
}

impl FixedPolarity {
    pub fn new(default: f64) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    pub fn with(mut self, text: impl Into<String>, compound: f64) -> Self {
        self.overrides.insert(text.into(), compound);
        self
    }
}

impl PolarityAnalyzer for FixedPolarity {
    fn compound(&self, text: &str) -> f64 {
        self.overrides.get(text).copied().unwrap_or(self.default)
    }
}
