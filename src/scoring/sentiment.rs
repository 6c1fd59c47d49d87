/// Source of compound sentiment polarity in `[-1, 1]`.
pub trait PolarityAnalyzer: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}

/// Discretizes a compound polarity into a 1-5 bucket.
pub fn sentiment_bucket(compound: f64) -> u8 {
    if compound >= 0.6 {
        5
    } else if compound >= 0.2 {
        4
    } else if compound > -0.2 {
        3
    } else if compound > -0.6 {
        2
    } else {
        1
    }
}

/// VADER compound polarity via the `vader_sentiment` lexicon.
///
/// Text is lowercased first, so capitalisation and exclamation emphasis never move the
/// score. Blank text is neutral.
pub struct VaderAnalyzer {
    inner: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

impl std::fmt::Debug for VaderAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaderAnalyzer").finish_non_exhaustive()
    }
}

impl Default for VaderAnalyzer {
    fn default() -> Self {
        Self {
            inner: vader_sentiment::SentimentIntensityAnalyzer::new(),
        }
    }
}

impl VaderAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PolarityAnalyzer for VaderAnalyzer {
    fn compound(&self, text: &str) -> f64 {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return 0.0;
        }

        self.inner
            .polarity_scores(&text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }
}
