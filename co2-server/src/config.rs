//! Server configuration.
//!
//! # Environment Variables
//!
//! - `CO2_BIND_ADDR`: address to listen on (default `127.0.0.1:3000`)
//! - `CO2_STATIC_DIR`: static assets directory (default `static`)
//! - `CO2_EMISSION_CONFIG`: optional JSON file overriding emission factors
//!   and credit pricing

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::calculator::{ConfigError, EmissionConfig};

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default static assets directory.
const DEFAULT_STATIC_DIR: &str = "static";

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub emission_config_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Read the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup("CO2_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr.parse().map_err(|_| {
            ConfigError::Invalid(format!("CO2_BIND_ADDR is not a socket address: {addr}"))
        })?;

        let static_dir = lookup("CO2_STATIC_DIR")
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
            .into();

        let emission_config_path = lookup("CO2_EMISSION_CONFIG")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            static_dir,
            emission_config_path,
        })
    }

    /// Load the emission configuration: the configured file if any,
    /// otherwise the built-in defaults.
    pub fn load_emission_config(&self) -> Result<EmissionConfig, ConfigError> {
        match &self.emission_config_path {
            Some(path) => EmissionConfig::from_file(path),
            None => Ok(EmissionConfig::default()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            emission_config_path: None,
        }
    }
}
