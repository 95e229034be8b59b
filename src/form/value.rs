use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current value of a single form input.
///
/// Select elements carrying "true"/"false" literals are normalized into
/// `Bool` at the boundary that fills the state; everything else is the raw
/// text the user typed. An empty string means "unset".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl FieldValue {
    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            // Tolerate drafts written before boolean normalization
            FieldValue::Text(s) => s == "true",
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s.as_str(),
            FieldValue::Bool(_) => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }
}

/// Encode a parsed number the way the original serializer does: whole
/// values become JSON integers, everything else stays floating point.
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}
