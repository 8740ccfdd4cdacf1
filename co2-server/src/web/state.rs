//! Application state for the web layer.

use std::sync::Arc;

use crate::calculator::EmissionCalculator;
use crate::catalog::RouteCatalog;

/// Shared application state.
///
/// Both members are immutable after startup, so handlers share them
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// Known city-pair distances
    pub catalog: Arc<RouteCatalog>,

    /// Emission calculator with its configuration
    pub calculator: Arc<EmissionCalculator>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: RouteCatalog, calculator: EmissionCalculator) -> Self {
        Self {
            catalog: Arc::new(catalog),
            calculator: Arc::new(calculator),
        }
    }
}
