//! Askama templates for the web frontend.

use askama::Template;

use crate::calculator::{EmissionCalculator, EmissionConfig, EmissionReport};
use crate::domain::TransportMode;
use crate::format::{format_currency, format_kg, format_number, format_percentage};

use super::dto::DistanceSource;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the calculator form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub cities: Vec<String>,
    pub modes: Vec<ModeView>,
}

/// About page describing the factors and pricing in use.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub modes: Vec<ModeView>,
    pub route_count: usize,
    pub city_count: usize,
    pub kg_per_credit: String,
    pub price_min: String,
    pub price_max: String,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Calculation results fragment.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub results: ResultsView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Transport mode view model.
#[derive(Debug, Clone)]
pub struct ModeView {
    pub key: String,
    pub label: String,
    pub icon: String,
    pub factor: String,
}

impl ModeView {
    /// Describe every mode, in declaration order.
    pub fn all(calculator: &EmissionCalculator) -> Vec<ModeView> {
        TransportMode::ALL
            .iter()
            .map(|&mode| ModeView {
                key: mode.as_str().to_string(),
                label: mode.label().to_string(),
                icon: mode.icon().to_string(),
                factor: format_number(calculator.factor(mode), 3),
            })
            .collect()
    }
}

impl AboutTemplate {
    /// Build the about page from the running configuration.
    pub fn new(calculator: &EmissionCalculator, route_count: usize, city_count: usize) -> Self {
        let config = calculator.config();
        Self {
            modes: ModeView::all(calculator),
            route_count,
            city_count,
            kg_per_credit: format_kg(config.kg_per_credit),
            price_min: format_currency(config.price_min_per_credit, &config.currency),
            price_max: format_currency(config.price_max_per_credit, &config.currency),
        }
    }
}

/// Calculation results view model, with every figure pre-formatted.
#[derive(Debug, Clone)]
pub struct ResultsView {
    pub origin: String,
    pub destination: String,
    pub distance: String,
    pub is_manual_distance: bool,
    pub mode_label: String,
    pub mode_icon: String,
    pub emission: String,
    pub baseline_emission: String,
    /// Whether the chosen mode is the baseline itself (no savings to show).
    pub is_baseline: bool,
    pub saved: String,
    pub saved_percentage: String,
    /// Whether the chosen mode emits more than the baseline.
    pub is_loss: bool,
    pub credits: String,
    pub price_min: String,
    pub price_max: String,
    pub price_average: String,
    pub comparison: Vec<ComparisonRowView>,
}

impl ResultsView {
    /// Create from a domain report.
    pub fn from_report(
        origin: &str,
        destination: &str,
        source: DistanceSource,
        report: &EmissionReport,
        config: &EmissionConfig,
    ) -> Self {
        let mode = report.emission.mode;

        let max_emission = report
            .comparison
            .iter()
            .map(|row| row.emission_kg)
            .fold(0.0_f64, f64::max);

        let comparison = report
            .comparison
            .iter()
            .map(|row| ComparisonRowView {
                label: row.mode.label().to_string(),
                icon: row.mode.icon().to_string(),
                emission: format_kg(row.emission_kg),
                percentage_vs_car: format_percentage(row.percentage_vs_car),
                bar_width: bar_width(row.emission_kg, max_emission),
                is_selected: row.mode == mode,
            })
            .collect();

        // Losses are shown as positive amounts with a "more than" wording
        let is_loss = report.savings.saved_kg < 0.0;

        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance: format!("{} km", format_number(report.emission.distance_km, 1)),
            is_manual_distance: source == DistanceSource::Manual,
            mode_label: mode.label().to_string(),
            mode_icon: mode.icon().to_string(),
            emission: format_kg(report.emission.emission_kg),
            baseline_emission: format_kg(report.baseline_emission_kg),
            is_baseline: mode == TransportMode::BASELINE,
            saved: format_kg(report.savings.saved_kg.abs()),
            saved_percentage: format_percentage(report.savings.percentage.abs()),
            is_loss,
            credits: format_number(report.credits.credits, 4),
            price_min: format_currency(report.credits.price_min, &config.currency),
            price_max: format_currency(report.credits.price_max, &config.currency),
            price_average: format_currency(report.credits.price_average, &config.currency),
            comparison,
        }
    }
}

/// One row of the mode comparison chart.
#[derive(Debug, Clone)]
pub struct ComparisonRowView {
    pub label: String,
    pub icon: String,
    pub emission: String,
    pub percentage_vs_car: String,
    /// Bar length as a percentage of the largest emission (0-100).
    pub bar_width: u32,
    pub is_selected: bool,
}

/// Bar length for a chart row, relative to the largest value.
fn bar_width(value: f64, max: f64) -> u32 {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    (value / max * 100.0).round().clamp(0.0, 100.0) as u32
}
