use crate::client::client_types::{PredictResponse, Scores};

pub const UNKNOWN_LABEL: &str = "unknown";
pub const NO_SCORES: &str = "—";

/// `0.8675` -> `"86.75%"`. Any number is accepted, including ones outside [0, 1].
pub fn pct(x: f64) -> String {
    // adding +0.0 turns -0.0 into 0.0, so a negative zero score prints unsigned
    format!("{:.2}%", x * 100.0 + 0.0)
}

pub fn render_scores(scores: Option<&Scores>) -> String {
    match scores {
        Some(scores) => format!(
            "positive: {} | negative: {}",
            pct(scores.positive),
            pct(scores.negative)
        ),
        None => NO_SCORES.to_string(),
    }
}

/// An empty label falls back to "unknown", same as a missing one.
pub fn render_prediction(response: &PredictResponse) -> &str {
    response
        .prediction
        .as_deref()
        .filter(|label| !label.is_empty())
        .unwrap_or(UNKNOWN_LABEL)
}
