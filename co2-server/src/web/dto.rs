//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::calculator::{EmissionCalculator, EmissionReport};
use crate::domain::TransportMode;

/// Request to calculate emissions for a trip.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    /// Origin city label
    #[serde(default)]
    pub origin: String,

    /// Destination city label
    #[serde(default)]
    pub destination: String,

    /// Transport mode key (e.g., "bus")
    pub mode: Option<String>,

    /// Manual distance in km; overrides the route catalog when present
    pub distance_km: Option<DistanceInput>,
}

/// A distance as submitted by a client.
///
/// HTML forms send text, API clients send numbers; both are accepted and
/// validated in the same place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DistanceInput {
    Number(f64),
    Text(String),
}

/// Where the distance used for a calculation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceSource {
    /// Looked up in the route catalog
    Catalog,
    /// Entered by the user
    Manual,
}

/// Response for an emission calculation.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    /// Origin city label, as submitted
    pub origin: String,

    /// Destination city label, as submitted
    pub destination: String,

    /// How the distance was obtained
    pub distance_source: DistanceSource,

    /// Emission, comparison, savings and credit figures
    #[serde(flatten)]
    pub report: EmissionReport,
}

/// Query for a catalog distance lookup.
#[derive(Debug, Deserialize)]
pub struct DistanceQuery {
    #[serde(default)]
    pub origin: String,

    #[serde(default)]
    pub destination: String,
}

/// Response for a catalog distance lookup.
///
/// An unknown pair is not an error: `found` is false and the client should
/// ask for a manual distance.
#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub origin: String,
    pub destination: String,
    pub distance_km: Option<f64>,
    pub found: bool,
}

/// Response listing known cities.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    /// City labels, sorted
    pub cities: Vec<String>,
}

/// A transport mode with its display metadata and factor.
#[derive(Debug, Serialize)]
pub struct ModeInfo {
    pub mode: TransportMode,
    pub label: String,
    pub icon: String,
    pub factor_kg_per_km: f64,
}

impl ModeInfo {
    /// Describe every mode using the calculator's factors.
    pub fn all(calculator: &EmissionCalculator) -> Vec<ModeInfo> {
        TransportMode::ALL
            .iter()
            .map(|&mode| ModeInfo {
                mode,
                label: mode.label().to_string(),
                icon: mode.icon().to_string(),
                factor_kg_per_km: calculator.factor(mode),
            })
            .collect()
    }
}

/// Response listing transport modes.
#[derive(Debug, Serialize)]
pub struct ModesResponse {
    pub modes: Vec<ModeInfo>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::EmissionConfig;

    #[test]
    fn request_with_numeric_distance() {
        let req: CalculateRequest = serde_json::from_str(
            r#"{"origin": "Recife, PE", "destination": "Natal, RN", "mode": "bus", "distance_km": 286}"#,
        )
        .unwrap();

        assert_eq!(req.origin, "Recife, PE");
        assert_eq!(req.mode.as_deref(), Some("bus"));
        assert_eq!(req.distance_km, Some(DistanceInput::Number(286.0)));
    }

    #[test]
    fn request_with_text_distance() {
        let req: CalculateRequest =
            serde_json::from_str(r#"{"origin": "A", "destination": "B", "distance_km": "12,5"}"#)
                .unwrap();

        assert_eq!(req.distance_km, Some(DistanceInput::Text("12,5".into())));
        assert!(req.mode.is_none());
    }

    #[test]
    fn request_fields_default() {
        let req: CalculateRequest = serde_json::from_str("{}").unwrap();

        assert!(req.origin.is_empty());
        assert!(req.destination.is_empty());
        assert!(req.mode.is_none());
        assert!(req.distance_km.is_none());
    }

    #[test]
    fn distance_source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DistanceSource::Catalog).unwrap(),
            "\"catalog\""
        );
        assert_eq!(
            serde_json::to_string(&DistanceSource::Manual).unwrap(),
            "\"manual\""
        );
    }

    #[test]
    fn calculate_response_flattens_report() {
        let calculator = EmissionCalculator::default();
        let response = CalculateResponse {
            origin: "São Paulo, SP".into(),
            destination: "Rio de Janeiro, RJ".into(),
            distance_source: DistanceSource::Catalog,
            report: calculator.report(430.0, TransportMode::Bus),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["distance_source"], "catalog");
        assert_eq!(json["emission"]["mode"], "bus");
        assert_eq!(json["emission"]["emission_kg"], 38.27);
        assert_eq!(json["comparison"].as_array().unwrap().len(), 4);
        assert_eq!(json["credits"]["credits"], 0.0383);
    }

    #[test]
    fn mode_info_uses_configured_factors() {
        let mut config = EmissionConfig::default();
        config.factors.car = 0.2;
        let modes = ModeInfo::all(&EmissionCalculator::new(config));

        assert_eq!(modes.len(), 4);
        assert_eq!(modes[1].mode, TransportMode::Car);
        assert_eq!(modes[1].factor_kg_per_km, 0.2);
        assert_eq!(modes[1].label, "Car");
    }
}
