//! `jlf` — Pretty-print JSON log lines from stdin.
//!
//! This library provides the core parsing and formatting functionality for
//! the `jlf` CLI tool. It reads JSON-structured log lines (zap, pino,
//! bunyan, and friends), pulls out the configured message, level, and
//! timestamp fields, and renders each line as friendly, colorful text with
//! the remaining fields appended as `key=value` pairs.
//!
//! # Example
//!
//! ```
//! use jlf::{Config, format_line};
//!
//! let config = Config::default();
//! let mut out = String::new();
//!
//! format_line(r#"{"level":"info","msg":"ready","port":8080}"#, &config, false, &mut out);
//! assert_eq!(out, "[info] ready | port=8080");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod level;
pub mod parser;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use config::Config;
pub use error::JlfError;
pub use formatter::format_line;
pub use level::Level;
pub use parser::{LineKind, LogRecord, parse_line};
pub use timestamp::Timestamp;
