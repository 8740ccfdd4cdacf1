//! Emission and carbon-credit configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::TransportMode;

/// Errors that can occur when loading or validating an [`EmissionConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for this schema
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Emission factors in kg CO₂ per kilometre, one per transport mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    pub bicycle: f64,
    pub car: f64,
    pub bus: f64,
    pub truck: f64,
}

impl EmissionFactors {
    /// The factor for a mode.
    pub fn get(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Bicycle => self.bicycle,
            TransportMode::Car => self.car,
            TransportMode::Bus => self.bus,
            TransportMode::Truck => self.truck,
        }
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            bicycle: 0.0,
            car: 0.12,
            bus: 0.089,
            truck: 0.96,
        }
    }
}

/// Static configuration read by the emission calculator.
///
/// Loaded once at startup and never mutated; tests construct their own
/// values instead of touching a shared default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionConfig {
    /// Emission factor per transport mode.
    pub factors: EmissionFactors,

    /// Kilograms of CO₂ represented by one carbon credit.
    pub kg_per_credit: f64,

    /// Lowest market price of one credit.
    pub price_min_per_credit: f64,

    /// Highest market price of one credit.
    pub price_max_per_credit: f64,

    /// Currency symbol used when displaying prices.
    pub currency: String,
}

impl EmissionConfig {
    /// Load a configuration from a JSON file and validate it.
    ///
    /// Fields missing from the file take their default values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for mode in TransportMode::ALL {
            let factor = self.factors.get(mode);
            if !factor.is_finite() || factor < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "emission factor for {mode} must be a non-negative number, got {factor}"
                )));
            }
        }

        if !self.kg_per_credit.is_finite() || self.kg_per_credit <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "kg_per_credit must be positive, got {}",
                self.kg_per_credit
            )));
        }

        if !self.price_min_per_credit.is_finite() || self.price_min_per_credit < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "price_min_per_credit must be non-negative, got {}",
                self.price_min_per_credit
            )));
        }

        if !self.price_max_per_credit.is_finite()
            || self.price_max_per_credit < self.price_min_per_credit
        {
            return Err(ConfigError::Invalid(format!(
                "price_max_per_credit must be at least price_min_per_credit, got {} < {}",
                self.price_max_per_credit, self.price_min_per_credit
            )));
        }

        Ok(())
    }
}

impl Default for EmissionConfig {
    fn default() -> Self {
        Self {
            factors: EmissionFactors::default(),
            kg_per_credit: 1000.0,
            price_min_per_credit: 50.0,
            price_max_per_credit: 150.0,
            currency: "R$".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let config = EmissionConfig::default();

        assert_eq!(config.factors.get(TransportMode::Bicycle), 0.0);
        assert_eq!(config.factors.get(TransportMode::Car), 0.12);
        assert_eq!(config.factors.get(TransportMode::Bus), 0.089);
        assert_eq!(config.factors.get(TransportMode::Truck), 0.96);
        assert_eq!(config.kg_per_credit, 1000.0);
        assert_eq!(config.price_min_per_credit, 50.0);
        assert_eq!(config.price_max_per_credit, 150.0);
        assert_eq!(config.currency, "R$");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config = EmissionConfig::from_json(r#"{"kg_per_credit": 500}"#).unwrap();

        assert_eq!(config.kg_per_credit, 500.0);
        assert_eq!(config.factors, EmissionFactors::default());
        assert_eq!(config.price_max_per_credit, 150.0);
    }

    #[test]
    fn full_json() {
        let json = r#"{
            "factors": {"bicycle": 0.0, "car": 0.2, "bus": 0.05, "truck": 1.1},
            "kg_per_credit": 1000,
            "price_min_per_credit": 10,
            "price_max_per_credit": 20,
            "currency": "US$"
        }"#;
        let config = EmissionConfig::from_json(json).unwrap();

        assert_eq!(config.factors.get(TransportMode::Car), 0.2);
        assert_eq!(config.factors.get(TransportMode::Truck), 1.1);
        assert_eq!(config.currency, "US$");
    }

    #[test]
    fn reject_malformed_json() {
        let err = EmissionConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn reject_negative_factor() {
        let mut config = EmissionConfig::default();
        config.factors.bus = -0.1;

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config: emission factor for bus must be a non-negative number, got -0.1"
        );
    }

    #[test]
    fn reject_non_positive_kg_per_credit() {
        let mut config = EmissionConfig::default();
        config.kg_per_credit = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.kg_per_credit = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn reject_inverted_price_range() {
        let mut config = EmissionConfig::default();
        config.price_min_per_credit = 200.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn reject_negative_price() {
        let mut config = EmissionConfig::default();
        config.price_min_per_credit = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn equal_prices_are_allowed() {
        let mut config = EmissionConfig::default();
        config.price_min_per_credit = 80.0;
        config.price_max_per_credit = 80.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"price_min_per_credit": 30, "price_max_per_credit": 90}}"#).unwrap();

        let config = EmissionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.price_min_per_credit, 30.0);
        assert_eq!(config.price_max_per_credit, 90.0);
    }

    #[test]
    fn load_from_file_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"kg_per_credit": -5}}"#).unwrap();

        assert!(matches!(
            EmissionConfig::from_file(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EmissionConfig::from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
