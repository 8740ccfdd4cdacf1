//! Domain types for the CO₂ calculator.
//!
//! Input from users is converted into these types at the edge of the
//! system, so the calculator never sees an unknown transport mode.

mod mode;

pub use mode::{InvalidTransportMode, TransportMode};
