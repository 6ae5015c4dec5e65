//! Timestamp parsing and formatting for log records.
//!
//! Accepts numeric Unix epochs (seconds, milliseconds, nanoseconds,
//! disambiguated by magnitude) as well as ISO 8601 / RFC 3339 and
//! `YYYY-MM-DD HH:MM:SS` strings. Rendering goes through jiff's strftime
//! in a caller-supplied time zone.

use jiff::tz::TimeZone;

/// Parsed timestamp plus the JSON token it came from.
#[derive(Debug, Clone)]
pub struct Timestamp {
    /// Normalized instant.
    pub value: jiff::Timestamp,
    /// Original representation, shown when the display format cannot be
    /// applied.
    pub original: String,
}

impl Timestamp {
    /// Parse a timestamp from a [`serde_json::Value`].
    ///
    /// Supports:
    /// - ISO 8601 / RFC 3339 strings
    /// - `YYYY-MM-DD HH:MM:SS[.fff]` strings (assumed UTC)
    /// - Unix epoch seconds (integer or float, < 1e12)
    /// - Unix epoch milliseconds (< 1e15)
    /// - Unix epoch nanoseconds (anything larger)
    pub fn from_json_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Self::parse_string(s),
            serde_json::Value::Number(n) => Self::parse_number(n),
            _ => None,
        }
    }

    /// Render with the given strftime format in the given time zone.
    ///
    /// A format jiff rejects falls back to the original JSON token.
    pub fn format_in(&self, format: &str, tz: &TimeZone) -> String {
        let zdt = self.value.to_zoned(tz.clone());
        match jiff::fmt::strtime::format(format, &zdt) {
            Ok(rendered) => rendered,
            Err(_) => self.original.clone(),
        }
    }

    fn parse_string(s: &str) -> Option<Self> {
        let original = s.to_string();

        // ISO 8601 / RFC 3339; jiff handles these natively
        if let Ok(ts) = s.parse::<jiff::Timestamp>() {
            return Some(Self {
                value: ts,
                original,
            });
        }

        // YYYY-MM-DD HH:MM:SS, no zone annotation
        if let Ok(dt) = jiff::civil::DateTime::strptime("%Y-%m-%d %H:%M:%S", s)
            && let Ok(zdt) = dt.to_zoned(TimeZone::UTC)
        {
            return Some(Self {
                value: zdt.timestamp(),
                original,
            });
        }

        // YYYY-MM-DD HH:MM:SS.fff
        if let Ok(dt) = jiff::civil::DateTime::strptime("%Y-%m-%d %H:%M:%S%.f", s)
            && let Ok(zdt) = dt.to_zoned(TimeZone::UTC)
        {
            return Some(Self {
                value: zdt.timestamp(),
                original,
            });
        }

        None
    }

    fn parse_number(n: &serde_json::Number) -> Option<Self> {
        if let Some(i) = n.as_i64() {
            Self::from_epoch_integer(i, n.to_string())
        } else if let Some(f) = n.as_f64() {
            Self::from_epoch_float(f, n.to_string())
        } else {
            None
        }
    }

    fn from_epoch_integer(value: i64, original: String) -> Option<Self> {
        let ts = if value < 1_000_000_000_000 {
            // seconds
            jiff::Timestamp::from_second(value).ok()?
        } else if value < 1_000_000_000_000_000 {
            // milliseconds
            jiff::Timestamp::from_millisecond(value).ok()?
        } else {
            // nanoseconds
            jiff::Timestamp::from_nanosecond(i128::from(value)).ok()?
        };
        Some(Self {
            value: ts,
            original,
        })
    }

    fn from_epoch_float(value: f64, original: String) -> Option<Self> {
        if value < 1e12 {
            // seconds with a fractional part
            #[allow(clippy::cast_possible_truncation)]
            let secs = value.trunc() as i64;
            #[allow(clippy::cast_possible_truncation)]
            let nanos = (value.fract() * 1_000_000_000.0) as i32;
            let ts = jiff::Timestamp::new(secs, nanos).ok()?;
            Some(Self {
                value: ts,
                original,
            })
        } else if value < 1e15 {
            // milliseconds as float
            #[allow(clippy::cast_possible_truncation)]
            let ms = value as i64;
            let ts = jiff::Timestamp::from_millisecond(ms).ok()?;
            Some(Self {
                value: ts,
                original,
            })
        } else {
            // nanoseconds as float
            #[allow(clippy::cast_possible_truncation)]
            let ns = value as i128;
            let ts = jiff::Timestamp::from_nanosecond(ns).ok()?;
            Some(Self {
                value: ts,
                original,
            })
        }
    }
}
