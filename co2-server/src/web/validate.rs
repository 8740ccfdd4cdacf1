//! Validation of calculator form input.
//!
//! The calculator itself accepts any distance; everything a user can get
//! wrong is rejected here, before the core is called.

use tracing::warn;

use crate::catalog::RouteCatalog;
use crate::domain::{InvalidTransportMode, TransportMode};

use super::dto::{CalculateRequest, DistanceInput, DistanceSource};

/// Reasons a calculation request is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("origin city is required")]
    EmptyOrigin,

    #[error("destination city is required")]
    EmptyDestination,

    #[error("transport mode is required")]
    MissingMode,

    #[error(transparent)]
    InvalidMode(#[from] InvalidTransportMode),

    #[error("distance must be a number, got {0:?}")]
    NonNumericDistance(String),

    #[error("distance must be greater than zero, got {0}")]
    NonPositiveDistance(f64),

    /// Neither the catalog nor the user supplied a distance
    #[error("no known route between {origin} and {destination}; enter the distance manually")]
    DistanceNotFound { origin: String, destination: String },
}

/// A calculation request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculateInput {
    pub origin: String,
    pub destination: String,
    pub mode: TransportMode,

    /// Positive distance entered by the user, if any.
    pub manual_distance_km: Option<f64>,
}

impl CalculateInput {
    /// Validate a raw request.
    pub fn from_request(req: CalculateRequest) -> Result<Self, ValidationError> {
        let origin = req.origin.trim().to_string();
        if origin.is_empty() {
            return Err(ValidationError::EmptyOrigin);
        }

        let destination = req.destination.trim().to_string();
        if destination.is_empty() {
            return Err(ValidationError::EmptyDestination);
        }

        let mode = match req.mode.as_deref().map(str::trim) {
            None | Some("") => return Err(ValidationError::MissingMode),
            Some(key) => TransportMode::parse(key).inspect_err(|e| {
                warn!(input = e.input(), "rejected unknown transport mode");
            })?,
        };

        let manual_distance_km = req.distance_km.map(parse_distance).transpose()?.flatten();

        Ok(Self {
            origin,
            destination,
            mode,
            manual_distance_km,
        })
    }

    /// Pick the distance to use: the manual value if given, otherwise the
    /// catalog distance.
    pub fn resolve_distance(
        &self,
        catalog: &RouteCatalog,
    ) -> Result<(f64, DistanceSource), ValidationError> {
        if let Some(km) = self.manual_distance_km {
            return Ok((km, DistanceSource::Manual));
        }

        catalog
            .find_distance(&self.origin, &self.destination)
            .map(|km| (km, DistanceSource::Catalog))
            .ok_or_else(|| ValidationError::DistanceNotFound {
                origin: self.origin.clone(),
                destination: self.destination.clone(),
            })
    }
}

/// Parse a submitted distance.
///
/// Blank text means "not given". Text follows the same pt-BR conventions
/// the results page uses: see [`parse_decimal`].
fn parse_distance(input: DistanceInput) -> Result<Option<f64>, ValidationError> {
    let km = match input {
        DistanceInput::Number(km) => km,
        DistanceInput::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            parse_decimal(trimmed)
                .filter(|km| km.is_finite())
                .ok_or(ValidationError::NonNumericDistance(text))?
        }
    };

    if km <= 0.0 {
        return Err(ValidationError::NonPositiveDistance(km));
    }

    Ok(Some(km))
}

/// Parse a number written the pt-BR way, as [`format_number`] prints it.
///
/// - `,` is the decimal separator; any `.` before it must be well-formed
///   thousands grouping (`1.109,0` is 1109).
/// - Without a comma, a `.` followed by groups of exactly three digits is
///   thousands grouping (`1.234` is 1234); any other `.` is a decimal point
///   (`12.5`).
///
/// Anything else, such as `1.5,0` or `1,2,3`, is rejected.
///
/// [`format_number`]: crate::format::format_number
fn parse_decimal(text: &str) -> Option<f64> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };

    let normalized = match digits.split_once(',') {
        Some((whole, fraction)) => format!("{}.{fraction}", ungroup(whole)?),
        None if is_grouped(digits) => digits.replace('.', ""),
        None => digits.to_string(),
    };

    format!("{sign}{normalized}").parse().ok()
}

/// Strip thousands separators from the integer part, if it has any.
fn ungroup(whole: &str) -> Option<String> {
    if !whole.contains('.') {
        Some(whole.to_string())
    } else if is_grouped(whole) {
        Some(whole.replace('.', ""))
    } else {
        None
    }
}

/// Whether `s` is digits in `.`-separated thousands groups, e.g. `1.234.567`.
fn is_grouped(s: &str) -> bool {
    let mut groups = s.split('.');
    let Some(first) = groups.next() else {
        return false;
    };

    let all_digits = |g: &str| g.bytes().all(|b| b.is_ascii_digit());
    let mut rest = groups.peekable();

    (1..=3).contains(&first.len())
        && all_digits(first)
        && rest.peek().is_some()
        && rest.all(|g| g.len() == 3 && all_digits(g))
}
