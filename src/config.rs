//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/jlf/config.toml` or `$XDG_CONFIG_HOME/jlf/config.toml`)
//! 3. Built-in defaults

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::JlfError;
use crate::level::Level;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// JSON key holding the log message.
    pub message_field: String,
    /// JSON key holding the log level.
    pub level_field: String,
    /// JSON key holding the timestamp.
    pub timestamp_field: String,
    /// strftime format for timestamp display.
    pub timestamp_format: String,
    /// Token printed between extra fields.
    pub separator: String,
    /// Extra fields hidden from output.
    pub exclude_fields: HashSet<String>,
    /// Levels to keep; empty means no filtering.
    pub filter_levels: HashSet<Level>,
    /// Suppress all extra fields.
    pub hide_extra_fields: bool,
    /// Time zone used to render timestamps.
    pub tz: TimeZone,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            message_field: "msg".to_string(),
            level_field: "level".to_string(),
            timestamp_field: "ts".to_string(),
            timestamp_format: "%Y-%m-%d %I:%M:%S %p".to_string(),
            separator: "|".to_string(),
            exclude_fields: HashSet::new(),
            filter_levels: HashSet::new(),
            hide_extra_fields: false,
            tz: TimeZone::UTC,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults. Timestamps
    /// render in the system time zone.
    pub fn from_cli(cli: &Cli) -> Result<Self, JlfError> {
        let mut config = Self {
            tz: TimeZone::system(),
            ..Self::default()
        };

        match cli.config {
            // An explicitly requested config file must exist.
            Some(ref path) => {
                let file_config = FileConfig::load(path)?;
                config.apply_file_config(file_config)?;
            }
            None => {
                let path = Self::default_config_path();
                if path.exists() {
                    let file_config = FileConfig::load(&path)?;
                    config.apply_file_config(file_config)?;
                }
            }
        }

        if let Some(color) = cli.color {
            config.color_mode = color;
        }
        if let Some(ref key) = cli.message_field {
            config.message_field.clone_from(key);
        }
        if let Some(ref key) = cli.level_field {
            config.level_field.clone_from(key);
        }
        if let Some(ref key) = cli.timestamp_field {
            config.timestamp_field.clone_from(key);
        }
        if let Some(ref format) = cli.timestamp_format {
            config.timestamp_format.clone_from(format);
        }
        if let Some(ref separator) = cli.separator {
            config.separator.clone_from(separator);
        }
        if let Some(ref excluded) = cli.exclude_fields {
            config.exclude_fields = excluded.iter().cloned().collect();
        }
        if let Some(ref levels) = cli.filter_levels {
            config.filter_levels = levels.iter().copied().collect();
        }
        if cli.hide_extra_fields {
            config.hide_extra_fields = true;
        }

        validate_timestamp_format(&config.timestamp_format)?;

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/jlf/config.toml` or `~/.config/jlf/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("jlf").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("jlf")
                .join("config.toml")
        } else {
            PathBuf::from(".config/jlf/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) -> Result<(), JlfError> {
        if let Some(color) = file.color {
            self.color_mode = match color.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                "auto" => ColorMode::Auto,
                other => {
                    return Err(JlfError::Config(format!(
                        "invalid color mode '{other}': expected auto, always, or never"
                    )));
                }
            };
        }

        if let Some(separator) = file.separator {
            self.separator = separator;
        }

        if let Some(format) = file.timestamp_format {
            self.timestamp_format = format;
        }

        if let Some(hide) = file.hide_extra_fields {
            self.hide_extra_fields = hide;
        }

        if let Some(excluded) = file.exclude_fields {
            self.exclude_fields = excluded.into_iter().collect();
        }

        if let Some(levels) = file.filter_levels {
            let mut filter = HashSet::new();
            for name in levels {
                match Level::from_str_loose(&name) {
                    Some(level) => {
                        filter.insert(level);
                    }
                    None => {
                        return Err(JlfError::Config(format!(
                            "unrecognized level '{name}' in filter_levels"
                        )));
                    }
                }
            }
            self.filter_levels = filter;
        }

        if let Some(fields) = file.fields {
            if let Some(message) = fields.message {
                self.message_field = message;
            }
            if let Some(level) = fields.level {
                self.level_field = level;
            }
            if let Some(timestamp) = fields.timestamp {
                self.timestamp_field = timestamp;
            }
        }

        Ok(())
    }
}

/// Reject display formats jiff cannot render before the read loop starts.
fn validate_timestamp_format(format: &str) -> Result<(), JlfError> {
    let probe = jiff::Timestamp::UNIX_EPOCH.to_zoned(TimeZone::UTC);
    jiff::fmt::strtime::format(format, &probe)
        .map(|_| ())
        .map_err(|e| JlfError::Config(format!("invalid timestamp format '{format}': {e}")))
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    color: Option<String>,
    separator: Option<String>,
    timestamp_format: Option<String>,
    hide_extra_fields: Option<bool>,
    exclude_fields: Option<Vec<String>>,
    filter_levels: Option<Vec<String>>,
    fields: Option<FieldsConfig>,
}

#[derive(Debug, Deserialize)]
struct FieldsConfig {
    message: Option<String>,
    level: Option<String>,
    timestamp: Option<String>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, JlfError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            JlfError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
