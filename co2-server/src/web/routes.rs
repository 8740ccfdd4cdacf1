//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use super::dto::*;
use super::state::AppState;
use super::templates::*;
use super::validate::{CalculateInput, ValidationError};

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/api/cities", get(list_cities))
        .route("/api/modes", get(list_modes))
        .route("/api/distance", get(find_distance))
        .route("/calculate", post(calculate))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_page)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the calculator form.
async fn index_page(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate {
        cities: state.catalog.cities(),
        modes: ModeView::all(&state.calculator),
    }
}

/// About page.
async fn about_page(State(state): State<AppState>) -> AboutTemplate {
    AboutTemplate::new(
        &state.calculator,
        state.catalog.len(),
        state.catalog.cities().len(),
    )
}

/// Page shown for unknown paths.
async fn not_found_page() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        ErrorTemplate {
            title: "Page not found".into(),
            message: "The page you asked for does not exist.".into(),
        },
    )
}

/// List known cities for autocomplete.
async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    Json(CitiesResponse {
        cities: state.catalog.cities(),
    })
}

/// List transport modes with their emission factors.
async fn list_modes(State(state): State<AppState>) -> Json<ModesResponse> {
    Json(ModesResponse {
        modes: ModeInfo::all(&state.calculator),
    })
}

/// Look up the catalog distance between two cities.
async fn find_distance(
    State(state): State<AppState>,
    Query(req): Query<DistanceQuery>,
) -> Json<DistanceResponse> {
    let distance_km = state.catalog.find_distance(&req.origin, &req.destination);

    Json(DistanceResponse {
        origin: req.origin,
        destination: req.destination,
        distance_km,
        found: distance_km.is_some(),
    })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Calculate emissions for a trip.
async fn calculate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: CalculateRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(
            error = %e,
            body = %String::from_utf8_lossy(&body),
            "rejected calculate request body"
        );
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let input = CalculateInput::from_request(req)?;
    let (distance_km, source) = input.resolve_distance(&state.catalog)?;

    let report = state.calculator.report(distance_km, input.mode);
    debug!(
        origin = %input.origin,
        destination = %input.destination,
        mode = %input.mode,
        distance_km,
        emission_kg = report.emission.emission_kg,
        "calculated trip"
    );

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = ResultsTemplate {
            results: ResultsView::from_report(
                &input.origin,
                &input.destination,
                source,
                &report,
                state.calculator.config(),
            ),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(CalculateResponse {
            origin: input.origin,
            destination: input.destination,
            distance_source: source,
            report,
        })
        .into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::DistanceNotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;

    #[test]
    fn accepts_html_header() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_html(&headers));

        headers.insert(header::ACCEPT, "application/json".parse().unwrap());
        assert!(!accepts_html(&headers));

        headers.insert(
            header::ACCEPT,
            "text/html,application/xhtml+xml".parse().unwrap(),
        );
        assert!(accepts_html(&headers));
    }

    #[test]
    fn validation_errors_map_to_status() {
        let not_found: AppError = ValidationError::DistanceNotFound {
            origin: "A".into(),
            destination: "B".into(),
        }
        .into();
        assert!(matches!(not_found, AppError::NotFound { .. }));

        let bad: AppError = ValidationError::EmptyOrigin.into();
        assert!(matches!(bad, AppError::BadRequest { .. }));

        let mode = TransportMode::parse("jetpack").unwrap_err();
        let bad: AppError = ValidationError::from(mode).into();
        assert!(matches!(bad, AppError::BadRequest { message } if message.contains("jetpack")));
    }

    #[test]
    fn app_error_status_codes() {
        let response = AppError::BadRequest {
            message: "x".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::Internal {
            message: "x".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
