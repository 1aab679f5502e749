//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters for station search.
///
/// `q` is optional at the extraction layer so its absence produces a
/// structured 422 instead of axum's default rejection.
#[derive(Debug, Deserialize)]
pub struct StationSearchParams {
    /// Partial station name to search for
    pub q: Option<String>,
}

/// Departures for a station.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    /// Numeric site identifier the departures were fetched for
    #[serde(rename = "stationId")]
    pub station_id: i64,

    /// Upstream `ResponseData` payload, forwarded verbatim
    pub results: Value,
}

/// Station search results.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    /// The raw query string that was searched
    pub query: String,

    /// Upstream `ResponseData` payload, forwarded verbatim
    pub results: Value,
}

/// Body of a 422 validation failure.
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    /// Human-readable summary
    pub message: String,

    /// Names of the offending fields
    pub errors: Vec<String>,

    /// Per-field issue descriptions
    pub cause: Vec<String>,
}

/// Generic error body for non-validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
