//! Command-line argument definitions for `jlf`.
//!
//! Uses [`clap`] derive macros for argument parsing. Value-carrying flags are
//! optional here so that [`Config`](crate::config::Config) can tell "user
//! passed it" apart from "use the config file or the default".

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::level::Level;

/// Pretty-print JSON log lines from stdin.
///
/// Reads newline-delimited JSON from stdin and writes colorized,
/// human-readable lines to stdout. Lines that are not JSON objects are
/// passed through unchanged.
#[derive(Debug, Parser)]
#[command(name = "jlf", version, about, long_about = None)]
pub struct Cli {
    /// JSON key holding the log message.
    #[arg(short = 'm', long, value_name = "KEY")]
    pub message_field: Option<String>,

    /// JSON key holding the log level.
    #[arg(short = 'l', long, value_name = "KEY")]
    pub level_field: Option<String>,

    /// JSON key holding the timestamp.
    #[arg(short = 't', long, value_name = "KEY")]
    pub timestamp_field: Option<String>,

    /// strftime format for timestamp display.
    #[arg(short = 'T', long, value_name = "FORMAT")]
    pub timestamp_format: Option<String>,

    /// Token printed between extra fields.
    #[arg(short = 's', long, value_name = "STRING")]
    pub separator: Option<String>,

    /// Extra fields to hide (comma-separated).
    #[arg(short = 'e', long, value_delimiter = ',', value_name = "KEYS")]
    pub exclude_fields: Option<Vec<String>>,

    /// Only show records with these levels (comma-separated).
    ///
    /// Lines without a recognizable level always pass through.
    #[arg(
        short = 'f',
        long,
        value_delimiter = ',',
        value_name = "LEVELS",
        value_parser = parse_level_arg
    )]
    pub filter_levels: Option<Vec<Level>>,

    /// Hide all extra fields, printing only timestamp, level, and message.
    #[arg(short = 'H', long)]
    pub hide_extra_fields: bool,

    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// Path to configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a completion script for the given shell and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

/// Parse a level name into a [`Level`], case-insensitive.
fn parse_level_arg(s: &str) -> Result<Level, String> {
    Level::from_str_loose(s).ok_or_else(|| {
        format!(
            "unrecognized level '{s}': expected one of trace, debug, info, warning, error, critical"
        )
    })
}
