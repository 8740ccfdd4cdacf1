//! Emission calculator.
//!
//! Turns a trip distance and transport mode into kilograms of CO₂, compares
//! the result across every mode, and prices the carbon credits needed to
//! offset it. All arithmetic is pure and driven by an injected
//! [`EmissionConfig`].

mod config;
mod emission;
mod rounding;

pub use config::{ConfigError, EmissionConfig, EmissionFactors};
pub use emission::{
    CarbonCreditResult, CreditPrice, EmissionCalculator, EmissionReport, EmissionResult,
    ModeComparison, SavingsResult,
};
pub use rounding::{round_to, round2, round4};
