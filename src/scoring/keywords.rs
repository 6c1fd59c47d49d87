/// Phrases that nudge a qualitative score up by 0.5 each.
pub const POSITIVE_SIGNALS: [&str; 9] = [
    "strong",
    "excellent",
    "clear advantage",
    "high",
    "promising",
    "good",
    "potential",
    "moderate",
    "substantial",
];

/// Phrases that pull a qualitative score down by 1.0 each.
pub const NEGATIVE_SIGNALS: [&str; 9] = [
    "weak",
    "lack",
    "insufficient",
    "gap",
    "poor",
    "critical issue",
    "major risk",
    "bad",
    "unclear",
];

const POSITIVE_STEP: f64 = 0.5;
const NEGATIVE_STEP: f64 = 1.0;

/// Sum of keyword adjustments for `text`.
///
/// Matching is by substring on lower-cased text; each phrase counts once however often
/// it recurs.
pub fn keyword_adjustment(text: &str) -> f64 {
    let text = text.to_lowercase();

    let positive = POSITIVE_SIGNALS
        .iter()
        .filter(|word| text.contains(*word))
        .count() as f64;
    let negative = NEGATIVE_SIGNALS
        .iter()
        .filter(|word| text.contains(*word))
        .count() as f64;

    positive * POSITIVE_STEP - negative * NEGATIVE_STEP
}
