//! Render parsed log lines as friendly, colorful text.
//!
//! Output layout:
//!
//! ```text
//! [2026-01-15 10:30:00 AM][info] server started | port=8080 | region=eu-west-1
//! ```
//!
//! The timestamp segment is omitted when the record has no parseable
//! timestamp; the level and message segments always appear, falling back to
//! `???` when the record lacks a usable value. Colors: magenta timestamp,
//! level-specific level label, green extra-field keys.

use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::parser::{LineKind, LogRecord, parse_line};

/// Placeholder for a level or message the record does not usably carry.
const UNKNOWN_LABEL: &str = "???";

/// Parse and format a single input line, appending the result to `out`.
///
/// Returns `false` when the line parsed as JSON but its level is excluded by
/// `config.filter_levels`; the caller should skip printing in that case.
/// Non-JSON lines pass through verbatim and are never filtered.
pub fn format_line(line: &str, config: &Config, use_color: bool, out: &mut String) -> bool {
    match parse_line(line, config) {
        LineKind::Json(record) => {
            if should_filter(&record, config) {
                return false;
            }
            format_record(&record, config, use_color, out);
            true
        }
        LineKind::Raw => {
            out.push_str(line);
            true
        }
    }
}

/// A record is dropped only when a filter set is configured and the record's
/// level parsed to something outside it. Records without a recognized level
/// always pass.
fn should_filter(record: &LogRecord, config: &Config) -> bool {
    if config.filter_levels.is_empty() {
        return false;
    }
    match record.level {
        Some(level) => !config.filter_levels.contains(&level),
        None => false,
    }
}

fn format_record(record: &LogRecord, config: &Config, use_color: bool, out: &mut String) {
    if let Some(ref ts) = record.timestamp {
        let rendered = ts.format_in(&config.timestamp_format, &config.tz);
        if use_color {
            let _ = write!(out, "[{}]", rendered.magenta());
        } else {
            let _ = write!(out, "[{rendered}]");
        }
    }

    let label = record.level_label.as_deref().unwrap_or(UNKNOWN_LABEL);
    match record.level.and_then(|level| level.style()) {
        Some(style) if use_color => {
            let _ = write!(out, "[{}]", label.style(style));
        }
        _ => {
            let _ = write!(out, "[{label}]");
        }
    }

    out.push(' ');
    out.push_str(record.message.as_deref().unwrap_or(UNKNOWN_LABEL));

    if config.hide_extra_fields {
        return;
    }

    for (key, value) in &record.extra {
        if config.exclude_fields.contains(key) {
            continue;
        }
        let _ = write!(out, " {} ", config.separator);
        if use_color {
            let _ = write!(out, "{}", key.green());
        } else {
            out.push_str(key);
        }
        out.push('=');
        out.push_str(&format_value(value));
    }
}

/// Scalar JSON values print bare; null prints as `NULL`; arrays and objects
/// print as compact JSON.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "NULL".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
