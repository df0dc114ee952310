//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::domain::AirportCode;
use crate::planner::{SearchError, SearchParameters, find_trips};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/flights", get(flight_count))
        .route("/search", get(search_trips))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Number of flights in the loaded table.
async fn flight_count(State(state): State<AppState>) -> Json<FlightCountResponse> {
    Json(FlightCountResponse {
        count: state.flights.len(),
    })
}

/// Search for trips between two airports.
async fn search_trips(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let origin = parse_airport("origin", &query.origin)?;
    let destination = parse_airport("destination", &query.destination)?;

    let params = SearchParameters::new(origin, destination)
        .with_bags(query.bags)
        .with_max_stops(query.stops)
        .with_return_trip(query.return_trip);

    if let Some(report) = state.cache.get(&params).await {
        debug!(%origin, %destination, "search cache hit");
        return Ok(Json(SearchResponse::from_report(&report)));
    }

    // Enumeration is CPU-bound and can run long for high stop counts.
    let flights = state.flights.clone();
    let config = state.config.clone();
    let task_params = params.clone();
    let report = tokio::task::spawn_blocking(move || find_trips(&flights, &task_params, &config))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("search task failed: {e}"),
        })??;

    let report = Arc::new(report);
    state.cache.insert(params, report.clone()).await;

    Ok(Json(SearchResponse::from_report(&report)))
}

fn parse_airport(field: &str, value: &str) -> Result<AirportCode, AppError> {
    AirportCode::parse_normalized(value).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {field}: {e}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
