//! Environment configuration

use std::env;
use std::io;

use measura_core::FormatSettings;
use tracing::Level;

/// Significant digits for the `display` field
pub const DIGITS_VAR: &str = "MEASURA_RELEVANT_DIGITS";
/// Log level: error, warn, info, debug or trace
pub const LOG_VAR: &str = "MEASURA_LOG";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub format: FormatSettings,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unset or unparsable values fall back to the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let format = lookup(DIGITS_VAR)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .map(|digits| FormatSettings::new().with_relevant_digits(digits))
            .unwrap_or_default();

        let log_level = lookup(LOG_VAR)
            .and_then(|v| v.trim().parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        Config { format, log_level }
    }

    /// Log to stderr; stdout carries the protocol
    pub fn init_logging(&self) {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_max_level(self.log_level)
            .with_target(false)
            .init();
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: FormatSettings::default(),
            log_level: Level::WARN,
        }
    }
}
