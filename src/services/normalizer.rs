//! Turns raw model output into normalized [`QuestionRecord`]s.
//!
//! The generation stage promises JSON but delivers text: the quiz object
//! may arrive fenced in markdown, wrapped in prose, keyed differently
//! between runs, or not at all. Everything here is tolerant of that, and
//! failure is all-or-nothing per request: callers get `None` plus a logged
//! diagnostic, never a partial quiz.

use serde_json::Value;

use crate::models::domain::{Choice, QuestionRecord};

/// A parsed quiz object: question id -> payload, in document key order.
/// Ids are opaque; only the entry order is meaningful downstream.
pub type QuizDocument = serde_json::Map<String, Value>;

/// Returns the first complete top-level-balanced `{...}` region of `text`,
/// even if other balanced regions follow. `None` when no region closes.
///
/// This is a brace-balance scan, not a validator: the candidate may still
/// fail to parse, and braces inside JSON string literals are counted like
/// any other (see `parse_response` for the fallback).
pub fn extract_embedded_object(text: &str) -> Option<&str> {
    let mut depth: usize = 0;
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        match ch {
            '{' => {
                if start.is_none() {
                    start = Some(idx);
                }
                depth += 1;
            }
            '}' => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        return start.map(|begin| &text[begin..=idx]);
                    }
                }
            }
            _ => {}
        }
    }

    None
}

/// Coerces the generation stage's `quiz` payload into a [`QuizDocument`].
///
/// A payload that is already an object is used directly. Text is searched
/// for an embedded object first; if extraction finds nothing or the
/// candidate does not parse, the entire text is parsed strictly. Any other
/// payload shape is coerced to its string representation before extraction.
/// Returns `None` (with a logged diagnostic) when no attempt yields a JSON
/// object.
pub fn parse_response(raw: &Value) -> Option<QuizDocument> {
    match raw {
        Value::Object(map) => Some(map.clone()),
        Value::String(text) => parse_quiz_text(text),
        other => parse_quiz_text(&other.to_string()),
    }
}

fn parse_quiz_text(text: &str) -> Option<QuizDocument> {
    if let Some(candidate) = extract_embedded_object(text) {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(candidate) {
            return Some(map);
        }
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        Ok(other) => {
            log::error!(
                "quiz payload parsed but root is not an object (got {}); raw: {}",
                json_type_name(&other),
                text
            );
            None
        }
        Err(err) => {
            log::error!("failed to parse quiz payload: {}; raw: {}", err, text);
            None
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The shapes a payload's `options` value is allowed to take. Detection is
/// a closed match, not open-ended probing: anything that is neither a
/// mapping nor a sequence is stored as its string representation.
enum OptionsShape<'a> {
    Mapping(&'a serde_json::Map<String, Value>),
    Sequence(&'a [Value]),
    Other(&'a Value),
}

impl<'a> OptionsShape<'a> {
    fn detect(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => OptionsShape::Mapping(map),
            Value::Array(items) => OptionsShape::Sequence(items),
            other => OptionsShape::Other(other),
        }
    }

    fn into_choices(self) -> Vec<Choice> {
        match self {
            OptionsShape::Mapping(map) => map
                .iter()
                .map(|(label, text)| Choice::new(label.clone(), value_text(text)))
                .collect(),
            OptionsShape::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(idx, text)| Choice::new((idx + 1).to_string(), value_text(text)))
                .collect(),
            OptionsShape::Other(value) => vec![Choice::new("", value_text(value))],
        }
    }
}

/// Maps a parsed [`QuizDocument`] into normalized records, preserving the
/// document's entry order. Entries whose question text is empty after
/// trimming are dropped; that filtering is part of the contract, not an
/// error. An entry whose payload is not an object fails the whole
/// document: callers never see a partial quiz.
pub fn normalize(document: &QuizDocument) -> Option<Vec<QuestionRecord>> {
    let mut records = Vec::with_capacity(document.len());

    for (id, payload) in document {
        let Some(payload) = payload.as_object() else {
            log::error!("quiz entry '{}' is not an object; rejecting the document", id);
            return None;
        };

        let question = resolve_field(payload, "mcq", "question");
        let question = question.trim();
        if question.is_empty() {
            continue;
        }

        let choices = match payload.get("options") {
            Some(options) => OptionsShape::detect(options).into_choices(),
            None => Vec::new(),
        };

        // Raw answer-key value, untrimmed; resolved against the choices
        // only at grading time.
        let correct = resolve_field(payload, "correct", "answer");

        records.push(QuestionRecord {
            question: question.to_string(),
            choices,
            correct,
        });
    }

    Some(records)
}

/// Resolves `primary` with fallback to `secondary`. Missing, null and
/// empty-string values fall through; whitespace-only strings do not.
/// Non-string values are coerced to their string representation.
fn resolve_field(
    payload: &serde_json::Map<String, Value>,
    primary: &str,
    secondary: &str,
) -> String {
    for key in [primary, secondary] {
        match payload.get(key) {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) if s.is_empty() => continue,
            Some(value) => return value_text(value),
        }
    }
    String::new()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
