use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PredictRequest {
    pub text: String,
}

/// Every field is optional; an absent field means "no data", not an error.
/// Falsy values (`false`, `0`, `""`, `null`) count as absent, and so do values
/// of a shape the console cannot display.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PredictResponse {
    #[serde(default, deserialize_with = "lenient_label")]
    pub prediction: Option<String>,
    #[serde(default, deserialize_with = "lenient_scores")]
    pub scores: Option<Scores>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub positive: f64,
    pub negative: f64,
}

/// Opaque liveness payload, shown verbatim.
pub type HealthResponse = serde_json::Value;

impl PredictResponse {
    /// Anything that parses as JSON is accepted except `null`, which has no
    /// fields to read. Non-object bodies carry no data.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Value>(body)? {
            Value::Null => Err(serde_json::Error::custom("response body is null")),
            value @ Value::Object(_) => serde_json::from_value(value),
            _ => Ok(PredictResponse::default()),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn lenient_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if !is_truthy(&value) {
        return Ok(None);
    }
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Reads a class score the way arithmetic on it would: `null` and `false` are
/// zero, numeric strings parse, anything else (or a missing key) is NaN.
fn score_of(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::String(s)) if s.trim().is_empty() => 0.0,
        Some(Value::String(s)) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn lenient_scores<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Scores>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if !is_truthy(&value) {
        return Ok(None);
    }
    Ok(Some(Scores {
        positive: score_of(value.get("positive")),
        negative: score_of(value.get("negative")),
    }))
}
