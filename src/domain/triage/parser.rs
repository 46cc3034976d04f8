//! Defensive parsing of model output into triage fields.
//!
//! Models return JSON with varying fidelity: stray prose around the
//! object, wrong value types, invented enum keywords. Parsing happens in
//! two independent stages so each can be tested alone:
//!
//! 1. `decode_object` - locate and decode a JSON object in the raw text.
//!    This is the only stage that can fail.
//! 2. Field coercion - each of the six fields is coerced independently to
//!    a safe default, so one malformed field never invalidates the others.

use serde_json::{Map, Value};
use thiserror::Error;

use super::{MessageCategory, MessageUrgency, SafetyFlag};

/// Errors raised when no JSON object can be recovered from model output.
///
/// Field-level anomalies are never errors; they coerce to defaults.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The output contains no decodable `{...}` region at all.
    #[error("no JSON object found in model output: {raw}")]
    NoJsonObject { raw: String },

    /// A `{...}` region was located but does not decode as JSON.
    #[error("model output is not valid JSON ({reason}): {raw}")]
    InvalidJson { reason: String, raw: String },
}

/// The six coerced fields recovered from one model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAnalysis {
    pub urgency: MessageUrgency,
    pub categories: Vec<MessageCategory>,
    pub clinician_summary: String,
    pub draft_patient_reply: String,
    pub safety_flags: Vec<SafetyFlag>,
    pub escalate: bool,
}

/// Parses raw model output into coerced triage fields.
///
/// Pure function: the same input always yields the same result.
///
/// # Errors
///
/// Returns [`ParseError`] only when no JSON object can be located and
/// decoded in the text. Unknown enum keywords, wrong types, and missing
/// keys silently fall back to `routine` / `{other}` / `{none}` / empty
/// strings / `false`.
pub fn parse_analysis(raw: &str) -> Result<ParsedAnalysis, ParseError> {
    let data = decode_object(raw)?;

    Ok(ParsedAnalysis {
        urgency: coerce_urgency(data.get("urgency")),
        categories: coerce_keyword_list(
            data.get("categories"),
            MessageCategory::from_keyword,
            MessageCategory::Other,
            "categories",
        ),
        clinician_summary: coerce_text(data.get("clinician_summary")),
        draft_patient_reply: coerce_text(data.get("draft_patient_reply")),
        safety_flags: coerce_keyword_list(
            data.get("safety_flags"),
            SafetyFlag::from_keyword,
            SafetyFlag::None,
            "safety_flags",
        ),
        escalate: data.get("escalate").map(is_truthy).unwrap_or(false),
    })
}

/// Locates and decodes a JSON object in the raw text.
///
/// Tries the full text first. If that is not a JSON object, falls back to
/// the substring from the first `{` to the last `}` inclusive.
fn decode_object(raw: &str) -> Result<Map<String, Value>, ParseError> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) {
        return Ok(map);
    }

    let (start, end) = match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => {
            return Err(ParseError::NoJsonObject {
                raw: raw.to_string(),
            })
        }
    };

    match serde_json::from_str::<Value>(&raw[start..=end]) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ParseError::NoJsonObject {
            raw: raw.to_string(),
        }),
        Err(err) => Err(ParseError::InvalidJson {
            reason: err.to_string(),
            raw: raw.to_string(),
        }),
    }
}

/// Renders any JSON value as a lower-cased keyword string.
///
/// Strings use their content; other values use their JSON rendering, so a
/// numeric or boolean urgency still compares (and fails) predictably.
fn keyword(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_lowercase(),
        other => other.to_string().to_lowercase(),
    }
}

fn coerce_urgency(value: Option<&Value>) -> MessageUrgency {
    value
        .map(keyword)
        .and_then(|k| MessageUrgency::from_keyword(&k))
        .unwrap_or(MessageUrgency::Routine)
}

/// Coerces a JSON value into a list of known keywords.
///
/// Non-array values count as empty. Unknown keywords are dropped (logged
/// so model drift stays observable), duplicates collapse, first-occurrence
/// order is preserved, and an empty result becomes `[fallback]`.
fn coerce_keyword_list<T>(
    value: Option<&Value>,
    parse: fn(&str) -> Option<T>,
    fallback: T,
    field: &'static str,
) -> Vec<T>
where
    T: Copy + PartialEq,
{
    let mut out = Vec::new();
    if let Some(items) = value.and_then(Value::as_array) {
        for item in items {
            let kw = keyword(item);
            match parse(&kw) {
                Some(parsed) => {
                    if !out.contains(&parsed) {
                        out.push(parsed);
                    }
                }
                None => {
                    tracing::warn!(field, value = %kw, "dropping unrecognized keyword in model output");
                }
            }
        }
    }
    if out.is_empty() {
        out.push(fallback);
    }
    out
}

/// Coerces a JSON value into trimmed text. Absent and `null` are empty.
fn coerce_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

/// Boolean cast over any JSON value: false, zero, empty string/array/
/// object, and null are false; everything else is true.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
