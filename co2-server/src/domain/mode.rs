//! Transport mode type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {input:?}")]
pub struct InvalidTransportMode {
    input: String,
}

impl InvalidTransportMode {
    /// The rejected input, as received.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A means of transport whose emissions can be estimated.
///
/// The set is closed: every value of this type has an emission factor in
/// [`EmissionConfig`](crate::calculator::EmissionConfig), so there is no
/// "unknown mode" case once a value exists. Free-form input is converted
/// with [`TransportMode::parse`] at the edge of the system.
///
/// Declaration order is significant. It is the tie-break order when modes
/// with equal emissions are compared.
///
/// # Examples
///
/// ```
/// use co2_server::domain::TransportMode;
///
/// let mode = TransportMode::parse("Car").unwrap();
/// assert_eq!(mode, TransportMode::Car);
/// assert_eq!(mode.as_str(), "car");
///
/// assert!(TransportMode::parse("hovercraft").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Bicycle,
    Car,
    Bus,
    Truck,
}

impl TransportMode {
    /// Every mode, in declaration order.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Bicycle,
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Truck,
    ];

    /// The mode used as the comparison baseline.
    pub const BASELINE: TransportMode = TransportMode::Car;

    /// Parse a mode key such as `"bus"`.
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive.
    pub fn parse(s: &str) -> Result<Self, InvalidTransportMode> {
        match s.trim().to_lowercase().as_str() {
            "bicycle" => Ok(TransportMode::Bicycle),
            "car" => Ok(TransportMode::Car),
            "bus" => Ok(TransportMode::Bus),
            "truck" => Ok(TransportMode::Truck),
            _ => Err(InvalidTransportMode {
                input: s.to_string(),
            }),
        }
    }

    /// The stable lowercase key for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Bicycle => "bicycle",
            TransportMode::Car => "car",
            TransportMode::Bus => "bus",
            TransportMode::Truck => "truck",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Bicycle => "Bicycle",
            TransportMode::Car => "Car",
            TransportMode::Bus => "Bus",
            TransportMode::Truck => "Truck",
        }
    }

    /// Icon shown next to the label.
    pub fn icon(&self) -> &'static str {
        match self {
            TransportMode::Bicycle => "🚲",
            TransportMode::Car => "🚗",
            TransportMode::Bus => "🚌",
            TransportMode::Truck => "🚚",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
