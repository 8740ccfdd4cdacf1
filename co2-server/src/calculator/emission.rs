//! Emission, comparison and carbon-credit arithmetic.

use serde::Serialize;
use tracing::debug;

use crate::domain::TransportMode;

use super::config::EmissionConfig;
use super::rounding::{round2, round4};

/// Emission for one trip in one mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionResult {
    pub mode: TransportMode,
    pub distance_km: f64,
    pub emission_kg: f64,
}

/// One row of the cross-mode comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeComparison {
    pub mode: TransportMode,
    pub emission_kg: f64,

    /// Emission as a percentage of the car emission for the same distance.
    /// Zero when the car emission is zero.
    pub percentage_vs_car: f64,
}

/// Emission avoided relative to a baseline.
///
/// Negative values mean the chosen mode emits more than the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsResult {
    pub saved_kg: f64,
    pub percentage: f64,
}

/// Price range for offsetting a number of credits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditPrice {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// Credits needed to offset an emission, with their estimated price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarbonCreditResult {
    pub credits: f64,
    pub price_min: f64,
    pub price_max: f64,
    pub price_average: f64,
}

/// Everything the results page shows for a single trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionReport {
    pub emission: EmissionResult,

    /// Car emission for the same distance.
    pub baseline_emission_kg: f64,

    /// Savings of the chosen mode against the car.
    pub savings: SavingsResult,

    /// All modes, lowest emission first.
    pub comparison: Vec<ModeComparison>,

    pub credits: CarbonCreditResult,
}

/// Converts distances into emissions and carbon-credit figures.
///
/// Every method is a pure function of its arguments and the configuration
/// supplied at construction. Input validation (positive distances and the
/// like) is the caller's job; out-of-range values flow through the
/// arithmetic unchanged.
#[derive(Debug, Clone, Default)]
pub struct EmissionCalculator {
    config: EmissionConfig,
}

impl EmissionCalculator {
    /// Create a calculator with the given configuration.
    pub fn new(config: EmissionConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &EmissionConfig {
        &self.config
    }

    /// Emission factor for a mode, in kg CO₂ per km.
    pub fn factor(&self, mode: TransportMode) -> f64 {
        self.config.factors.get(mode)
    }

    /// Emission in kg CO₂ for travelling `distance_km` by `mode`.
    pub fn calculate_emission(&self, distance_km: f64, mode: TransportMode) -> f64 {
        let emission = round2(distance_km * self.factor(mode));
        debug!(%mode, distance_km, emission_kg = emission, "calculated emission");
        emission
    }

    /// Emission for every mode, sorted ascending by emission.
    ///
    /// Modes with equal emission keep their declaration order.
    pub fn calculate_all_modes(&self, distance_km: f64) -> Vec<ModeComparison> {
        let car_emission = self.calculate_emission(distance_km, TransportMode::BASELINE);

        let mut rows: Vec<ModeComparison> = TransportMode::ALL
            .iter()
            .map(|&mode| {
                let emission_kg = self.calculate_emission(distance_km, mode);
                let percentage_vs_car = if car_emission == 0.0 {
                    0.0
                } else {
                    round2(emission_kg / car_emission * 100.0)
                };
                ModeComparison {
                    mode,
                    emission_kg,
                    percentage_vs_car,
                }
            })
            .collect();

        // sort_by is stable, so ties stay in declaration order
        rows.sort_by(|a, b| a.emission_kg.total_cmp(&b.emission_kg));
        rows
    }

    /// Savings of `emission` against `baseline_emission`, both in kg.
    pub fn calculate_savings(&self, emission: f64, baseline_emission: f64) -> SavingsResult {
        let saved_kg = round2(baseline_emission - emission);
        let percentage = if baseline_emission == 0.0 {
            0.0
        } else {
            round2(saved_kg / baseline_emission * 100.0)
        };

        SavingsResult {
            saved_kg,
            percentage,
        }
    }

    /// Number of carbon credits covering `emission_kg`, to 4 decimal places.
    pub fn calculate_carbon_credits(&self, emission_kg: f64) -> f64 {
        round4(emission_kg / self.config.kg_per_credit)
    }

    /// Price range for buying `credits` credits.
    pub fn estimate_credit_price(&self, credits: f64) -> CreditPrice {
        let min = round2(credits * self.config.price_min_per_credit);
        let max = round2(credits * self.config.price_max_per_credit);
        let average = round2((min + max) / 2.0);

        CreditPrice { min, max, average }
    }

    /// Credits and price range for offsetting `emission_kg`.
    pub fn carbon_credits(&self, emission_kg: f64) -> CarbonCreditResult {
        let credits = self.calculate_carbon_credits(emission_kg);
        let price = self.estimate_credit_price(credits);

        CarbonCreditResult {
            credits,
            price_min: price.min,
            price_max: price.max,
            price_average: price.average,
        }
    }

    /// Full set of figures for one trip.
    pub fn report(&self, distance_km: f64, mode: TransportMode) -> EmissionReport {
        let emission_kg = self.calculate_emission(distance_km, mode);
        let baseline_emission_kg = self.calculate_emission(distance_km, TransportMode::BASELINE);

        EmissionReport {
            emission: EmissionResult {
                mode,
                distance_km,
                emission_kg,
            },
            baseline_emission_kg,
            savings: self.calculate_savings(emission_kg, baseline_emission_kg),
            comparison: self.calculate_all_modes(distance_km),
            credits: self.carbon_credits(emission_kg),
        }
    }
}
