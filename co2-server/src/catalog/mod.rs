//! Static road distances between cities.
//!
//! The catalog answers two questions for the calculator form: which cities
//! are known (for autocomplete), and how far apart two of them are. An
//! unknown pair is a normal outcome; the caller asks the user for a manual
//! distance instead.

mod brazil;
mod route;

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

pub use brazil::brazil_routes;
pub use route::{Route, normalize_city};

use route::PairKey;

/// An immutable, undirected collection of city-pair distances.
///
/// Routes are indexed by their normalized unordered city pair, so a lookup
/// is a single hash probe regardless of direction or letter case.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    /// Routes in load order.
    routes: Vec<Route>,

    /// Map from normalized pair to index in `routes`.
    index: HashMap<PairKey, usize>,

    /// Distinct city labels, sorted.
    cities: Vec<String>,
}

impl RouteCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from route records.
    ///
    /// A record whose city pair (in either direction, ignoring case) is
    /// already present is a data-entry defect: it is logged and skipped, and
    /// the first record wins. A skipped record's labels do not appear in
    /// [`cities`](Self::cities), even when they differ in case from the kept
    /// ones.
    pub fn from_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        let mut kept = Vec::new();
        let mut index = HashMap::new();

        for route in routes {
            let key = route.key();
            if index.contains_key(&key) {
                warn!(
                    origin = %route.origin,
                    destination = %route.destination,
                    "duplicate route ignored"
                );
                continue;
            }
            index.insert(key, kept.len());
            kept.push(route);
        }

        let cities = kept
            .iter()
            .flat_map(|r| [r.origin.clone(), r.destination.clone()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            routes: kept,
            index,
            cities,
        }
    }

    /// Distinct city labels, sorted by byte order.
    ///
    /// Labels are compared exactly (case-sensitive, untrimmed). The result is
    /// an owned snapshot.
    pub fn cities(&self) -> Vec<String> {
        self.cities.clone()
    }

    /// Look up the distance between two cities, in kilometres.
    ///
    /// Both inputs are trimmed and lower-cased, and matched against the
    /// lower-cased stored labels in either direction. Returns `None` when no
    /// route connects them, including when either input is blank.
    pub fn find_distance(&self, a: &str, b: &str) -> Option<f64> {
        let a = normalize_city(a);
        let b = normalize_city(b);

        let found = self
            .index
            .get(&PairKey::new(&a, &b))
            .map(|&i| self.routes[i].distance_km);

        debug!(origin = %a, destination = %b, distance_km = ?found, "route lookup");
        found
    }

    /// Iterate over the routes in load order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the catalog has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Builder for creating a route catalog.
///
/// Provides a fluent API for adding routes.
#[derive(Debug, Default)]
pub struct RouteCatalogBuilder {
    routes: Vec<Route>,
}

impl RouteCatalogBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route.
    pub fn add(mut self, origin: &str, destination: &str, distance_km: f64) -> Self {
        self.routes.push(Route::new(origin, destination, distance_km));
        self
    }

    /// Build the catalog.
    pub fn build(self) -> RouteCatalog {
        RouteCatalog::from_routes(self.routes)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// A catalog with distinct pairs drawn from a fixed city list.
    fn catalog_strategy() -> impl Strategy<Value = RouteCatalog> {
        const CITIES: [&str; 6] = [
            "Belém, PA",
            "Manaus, AM",
            "Macapá, AP",
            "Palmas, TO",
            "Boa Vista, RR",
            "Porto Velho, RO",
        ];

        proptest::collection::vec((0..6usize, 0..6usize, 1.0f64..5000.0), 0..20).prop_map(
            |entries| {
                RouteCatalog::from_routes(
                    entries
                        .into_iter()
                        .map(|(a, b, km)| Route::new(CITIES[a], CITIES[b], km)),
                )
            },
        )
    }

    proptest! {
        /// Lookup never depends on argument order
        #[test]
        fn direction_independent(catalog in catalog_strategy()) {
            for route in catalog.routes() {
                let forward = catalog.find_distance(&route.origin, &route.destination);
                let reverse = catalog.find_distance(&route.destination, &route.origin);
                prop_assert_eq!(forward, Some(route.distance_km));
                prop_assert_eq!(reverse, Some(route.distance_km));
            }
        }

        /// Case and padding never change the answer
        #[test]
        fn case_and_padding_insensitive(catalog in catalog_strategy()) {
            for route in catalog.routes() {
                let shouted = format!("  {}  ", route.origin.to_uppercase());
                prop_assert_eq!(
                    catalog.find_distance(&shouted, &route.destination),
                    Some(route.distance_km)
                );
            }
        }

        /// The city list is strictly increasing and covers every endpoint
        #[test]
        fn cities_sorted_unique_complete(catalog in catalog_strategy()) {
            let cities = catalog.cities();
            prop_assert!(cities.windows(2).all(|w| w[0] < w[1]));

            let expected: BTreeSet<_> = catalog
                .routes()
                .flat_map(|r| [r.origin.clone(), r.destination.clone()])
                .collect();
            prop_assert_eq!(cities.len(), expected.len());
        }
    }
}
