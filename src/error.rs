//! Error types for `jlf`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur in `jlf`.
///
/// Maps to exit codes: [`Config`](Self::Config) and [`Toml`](Self::Toml)
/// → exit 1, [`Io`](Self::Io) → exit 2 (except `BrokenPipe`, which exits 0).
#[derive(Debug, Error)]
pub enum JlfError {
    /// Configuration error (invalid flag value, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading stdin or writing stdout.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error in the config file.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}
