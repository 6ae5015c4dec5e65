//! JSON log line classification and field extraction.
//!
//! Each stdin line either parses as a JSON object and becomes a structured
//! [`LogRecord`], or it doesn't and passes through untouched. The three
//! well-known fields (message, level, timestamp) are pulled out by the keys
//! configured in [`Config`]; whatever remains lands in [`LogRecord::extra`]
//! in alphabetical order.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::level::Level;
use crate::timestamp::Timestamp;

/// The parsed classification of a stdin line.
#[derive(Debug)]
pub enum LineKind {
    /// The whole line is a JSON object.
    Json(LogRecord),
    /// Anything else, passed through unmodified.
    Raw,
}

/// A structured log entry extracted from a JSON object.
#[derive(Debug)]
pub struct LogRecord {
    pub timestamp: Option<Timestamp>,
    /// Canonical level when the level field held a recognized string or
    /// number; drives colorization and filtering.
    pub level: Option<Level>,
    /// Text shown inside the level brackets: the raw string as it appeared,
    /// or the canonical name for numeric levels.
    pub level_label: Option<String>,
    /// Message text; `None` when the field is absent or not a string.
    pub message: Option<String>,
    /// Remaining fields, ordered alphabetically. Never contains the
    /// configured message/level/timestamp keys.
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Parse a single stdin line into a [`LineKind`].
///
/// Only JSON *objects* become records; arrays, scalars, malformed JSON, and
/// plain text are all [`LineKind::Raw`].
pub fn parse_line(line: &str, config: &Config) -> LineKind {
    let Some(serde_json::Value::Object(mut map)) = parse_value(line) else {
        return LineKind::Raw;
    };

    let timestamp = map
        .remove(config.timestamp_field.as_str())
        .and_then(|v| Timestamp::from_json_value(&v));

    let (level_label, level) = match map.remove(config.level_field.as_str()) {
        Some(v) => extract_level(&v),
        None => (None, None),
    };

    let message = match map.remove(config.message_field.as_str()) {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    };

    LineKind::Json(LogRecord {
        timestamp,
        level,
        level_label,
        message,
        extra: map.into_iter().collect(),
    })
}

#[cfg(not(feature = "simd"))]
fn parse_value(line: &str) -> Option<serde_json::Value> {
    serde_json::from_str(line).ok()
}

#[cfg(feature = "simd")]
fn parse_value(line: &str) -> Option<serde_json::Value> {
    let mut buf = line.as_bytes().to_vec();
    simd_json::serde::from_slice(&mut buf).ok()
}

/// Split a level value into its display label and canonical [`Level`].
///
/// String values keep their original spelling as the label even when the
/// canonical lookup fails; numeric values are labeled with the canonical
/// name. Other value types yield neither.
fn extract_level(value: &serde_json::Value) -> (Option<String>, Option<Level>) {
    match value {
        serde_json::Value::String(s) => (Some(s.clone()), Level::from_str_loose(s)),
        serde_json::Value::Number(n) => {
            #[allow(clippy::cast_possible_truncation)]
            let numeric = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64));
            match numeric {
                Some(i) => {
                    let level = Level::from_numeric(i);
                    (Some(level.as_str().to_string()), Some(level))
                }
                None => (None, None),
            }
        }
        _ => (None, None),
    }
}
