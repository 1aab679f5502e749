//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::sl::SlError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/times/:station_id", get(departure_times))
        .route("/stations", get(search_stations))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Live departures for a station.
///
/// The path parameter must be a numeric site id; anything else is a 422.
/// Responses are never cached.
async fn departure_times(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
) -> Result<Json<DeparturesResponse>, AppError> {
    let site_id: i64 = station_id.parse().map_err(|_| {
        AppError::validation(
            "stationId",
            format!("stationId must be a numeric string, got {station_id:?}"),
        )
    })?;

    let results = state.sl.realtime_departures(site_id).await?;

    Ok(Json(DeparturesResponse {
        station_id: site_id,
        results,
    }))
}

/// Station-name typeahead search.
///
/// Results are cached per raw query string for the life of the process;
/// only a cache miss reaches the upstream API.
async fn search_stations(
    State(state): State<AppState>,
    Query(params): Query<StationSearchParams>,
) -> Result<Json<StationSearchResponse>, AppError> {
    let Some(query) = params.q else {
        return Err(AppError::validation(
            "q",
            "q is a required query parameter".to_string(),
        ));
    };

    if let Some(results) = state.search_cache.get(&query).await {
        tracing::debug!(%query, "station search cache hit");
        return Ok(Json(StationSearchResponse { query, results }));
    }

    tracing::debug!(%query, "station search cache miss");
    let results = state.sl.typeahead(&query).await?;
    state
        .search_cache
        .insert(query.clone(), results.clone())
        .await;

    Ok(Json(StationSearchResponse { query, results }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Request failed validation; rendered as a structured 422.
    Validation {
        message: String,
        errors: Vec<String>,
        cause: Vec<String>,
    },
    /// Upstream call failed; rendered as a generic 500.
    Upstream(SlError),
}

impl AppError {
    fn validation(field: &str, issue: String) -> Self {
        AppError::Validation {
            message: "invalid request parameters".to_string(),
            errors: vec![field.to_string()],
            cause: vec![issue],
        }
    }
}

impl From<SlError> for AppError {
    fn from(e: SlError) -> Self {
        AppError::Upstream(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation {
                message,
                errors,
                cause,
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse {
                    message,
                    errors,
                    cause,
                }),
            )
                .into_response(),
            AppError::Upstream(e) => {
                tracing::error!(error = %e, "upstream request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "upstream request failed".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
