//! Logging setup.
//!
//! # Environment Variables
//!
//! - `LOG_FORMAT`: `text` (default), `compact` or `pretty`
//! - `RUST_LOG`: Log level filter (default: `info`)

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Single-line human-readable output.
    #[default]
    Text,
    /// Shorter single-line output.
    Compact,
    /// Multi-line output for local development.
    Pretty,
}

impl LogFormat {
    /// Parse a log format name. Unknown names fall back to `Text`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "compact" => LogFormat::Compact,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Text,
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,

    /// Level filter used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Read the configuration from `LOG_FORMAT` and `RUST_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(defaults.format),
            level: lookup("RUST_LOG").unwrap_or(defaults.level),
        }
    }
}

/// Install the global tracing subscriber. Call once at startup.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry.with(fmt::layer()).init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
    }
}
