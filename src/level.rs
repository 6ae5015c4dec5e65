//! Log level vocabulary with parsing and colorization.
//!
//! Levels follow the six names the formatter colorizes: trace, debug, info,
//! warning, error, critical. String parsing is case-insensitive and accepts
//! the common aliases other frameworks emit (`warn`, `err`, `fatal`, ...).
//! Numeric levels use the bunyan/pino convention (30 = info, 40 = warning).

use owo_colors::Style;

/// Canonical log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Canonical lowercase name, used as the display label for numeric levels.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Style for this level's bracket segment, or `None` for levels that
    /// render unstyled.
    ///
    /// Palette: info blue, warning yellow, error and critical red. Trace and
    /// debug stay plain.
    pub const fn style(self) -> Option<Style> {
        match self {
            Self::Trace | Self::Debug => None,
            Self::Info => Some(Style::new().blue()),
            Self::Warning => Some(Style::new().yellow()),
            Self::Error | Self::Critical => Some(Style::new().red()),
        }
    }

    /// Parse a string into a [`Level`], case-insensitive.
    ///
    /// Returns `None` for unrecognized strings.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" | "trc" => Some(Self::Trace),
            "debug" | "dbg" => Some(Self::Debug),
            "info" | "inf" | "information" => Some(Self::Info),
            "warning" | "warn" | "wrn" => Some(Self::Warning),
            "error" | "err" => Some(Self::Error),
            "critical" | "crit" | "fatal" | "panic" | "emerg" | "emergency" => {
                Some(Self::Critical)
            }
            _ => None,
        }
    }

    /// Map a numeric level onto a [`Level`] using the bunyan/pino convention:
    /// 10 = trace, 20 = debug, 30 = info, 40 = warning, 50 = error,
    /// 60 = critical. Values between thresholds round to the nearest level.
    pub const fn from_numeric(n: i64) -> Self {
        match n {
            ..=14 => Self::Trace,
            15..=24 => Self::Debug,
            25..=34 => Self::Info,
            35..=44 => Self::Warning,
            45..=54 => Self::Error,
            55.. => Self::Critical,
        }
    }
}
