//! Web layer for the CO₂ calculator.
//!
//! Serves the calculator pages and a small JSON API over the route catalog
//! and the emission calculator.

mod dto;
mod routes;
mod state;
pub mod templates;
mod validate;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
pub use validate::{CalculateInput, ValidationError};
