//! Recovers a decision record from free-form generator output.
//!
//! The generator is asked for a bare JSON object but may wrap it in prose or
//! markdown fences, emit several objects, or return nothing usable. The
//! extractor tries the widest `{ ... }` span first, then every balanced
//! top-level object in order, and settles on the first candidate that
//! coerces into a valid [`DecisionRecord`]. Anything else resolves to
//! [`DecisionRecord::invalid_response`].

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::foundation::{Confidence, Priority, ValidationError};

use super::DecisionRecord;

/// Keys accepted for the recommended action, in lookup order.
const ACTION_KEYS: [&str; 2] = ["recommended_action", "recommendedAction"];

/// Errors that can occur while recovering a decision.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExtractionError {
    #[error("No JSON object found in response")]
    NoJsonObject,

    #[error("JSON parse error: {0}")]
    ParseError(String),

    #[error("JSON value is not an object")]
    NotAnObject,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid field: {0}")]
    InvalidField(#[from] ValidationError),
}

/// Extracts a decision, falling back to the invalid-response record.
///
/// Never fails and has no side effects beyond a debug log line.
pub fn extract_decision(raw: &str) -> DecisionRecord {
    match try_extract(raw) {
        Ok(record) => record,
        Err(err) => {
            tracing::debug!(error = %err, "Generator reply held no usable decision");
            DecisionRecord::invalid_response()
        }
    }
}

/// Extracts a decision, reporting why extraction failed.
///
/// When several candidates fail, the error of the last one tried is
/// returned.
pub fn try_extract(raw: &str) -> Result<DecisionRecord, ExtractionError> {
    let mut last_error = ExtractionError::NoJsonObject;

    for candidate in candidate_spans(raw) {
        match parse_candidate(candidate) {
            Ok(record) => return Ok(record),
            Err(err) => last_error = err,
        }
    }

    Err(last_error)
}

fn candidate_spans(raw: &str) -> Vec<&str> {
    let mut spans = Vec::new();

    if let Some(span) = outermost_span(raw) {
        spans.push(span);
    }

    for span in balanced_objects(raw) {
        if !spans.contains(&span) {
            spans.push(span);
        }
    }

    spans
}

/// Span from the first `{` through the last `}`.
fn outermost_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Top-level brace-balanced spans, skipping braces inside JSON strings.
fn balanced_objects(raw: &str) -> Vec<&str> {
    let mut objects = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, c) in raw.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => escape_next = true,
            '"' if depth > 0 => in_string = !in_string,
            _ if in_string => {}
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    objects.push(&raw[start..=i]);
                }
            }
            _ => {}
        }
    }

    objects
}

fn parse_candidate(candidate: &str) -> Result<DecisionRecord, ExtractionError> {
    let value: Value = serde_json::from_str(candidate)
        .map_err(|e| ExtractionError::ParseError(e.to_string()))?;

    match value {
        Value::Object(fields) => coerce_record(&fields),
        _ => Err(ExtractionError::NotAnObject),
    }
}

fn coerce_record(fields: &Map<String, Value>) -> Result<DecisionRecord, ExtractionError> {
    Ok(DecisionRecord {
        priority: coerce_priority(fields)?,
        recommended_action: coerce_action(fields)?,
        confidence: coerce_confidence(fields)?,
    })
}

fn coerce_priority(fields: &Map<String, Value>) -> Result<Priority, ExtractionError> {
    match fields.get("priority") {
        None | Some(Value::Null) => Err(ExtractionError::MissingField("priority")),
        Some(Value::String(s)) => Ok(s.parse()?),
        Some(other) => Err(ValidationError::unsupported("priority", other.to_string()).into()),
    }
}

fn coerce_action(fields: &Map<String, Value>) -> Result<String, ExtractionError> {
    let value = ACTION_KEYS
        .iter()
        .find_map(|key| fields.get(*key).filter(|v| !v.is_null()))
        .ok_or(ExtractionError::MissingField("recommended_action"))?;

    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Value::String(_) => Err(ValidationError::empty_field("recommended_action").into()),
        other => Err(ValidationError::unsupported("recommended_action", other.to_string()).into()),
    }
}

fn coerce_confidence(fields: &Map<String, Value>) -> Result<Option<Confidence>, ExtractionError> {
    match fields.get("confidence") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(|v| Some(Confidence::new(v)))
            .ok_or_else(|| ValidationError::not_finite("confidence").into()),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| Some(Confidence::new(v)))
            .ok_or_else(|| ValidationError::unsupported("confidence", s.clone()).into()),
        Some(other) => Err(ValidationError::unsupported("confidence", other.to_string()).into()),
    }
}
