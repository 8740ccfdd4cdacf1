//! Route records and city-name normalization.

/// A road distance between two cities.
///
/// Routes are undirected: the same record answers lookups in either
/// direction, so the reverse pair is never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// City label as curated, e.g. "Curitiba, PR".
    pub origin: String,

    /// City label as curated.
    pub destination: String,

    /// Distance in kilometres.
    pub distance_km: f64,
}

impl Route {
    /// Create a new route.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, distance_km: f64) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            distance_km,
        }
    }

    /// The order-independent lookup key for this route.
    ///
    /// Stored labels are lower-cased but not trimmed: a curated label with
    /// stray padding never matches a (trimmed) query.
    pub(super) fn key(&self) -> PairKey {
        PairKey::new(&self.origin.to_lowercase(), &self.destination.to_lowercase())
    }
}

/// Normalize a user-supplied city name for lookup.
///
/// Trims surrounding whitespace and lower-cases. No diacritic folding is done,
/// so "São Paulo" and "Sao Paulo" stay distinct.
pub fn normalize_city(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Unordered pair of normalized city names.
///
/// The lexicographically smaller name is always stored first, so `(a, b)`
/// and `(b, a)` produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(super) struct PairKey(String, String);

impl PairKey {
    pub(super) fn new(a: &str, b: &str) -> Self {
        if a <= b {
            PairKey(a.to_string(), b.to_string())
        } else {
            PairKey(b.to_string(), a.to_string())
        }
    }
}
