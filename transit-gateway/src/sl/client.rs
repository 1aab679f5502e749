//! SL Trafiklab HTTP client.

use serde::Deserialize;
use serde_json::Value;

use super::error::SlError;

/// Departure look-ahead window in minutes.
const TIME_WINDOW_MINS: u16 = 60;

/// Maximum number of typeahead matches requested.
const MAX_SEARCH_RESULTS: u16 = 10;

/// Wrapper for SL responses; every endpoint nests its payload under
/// `ResponseData`. A missing key deserializes to `Value::Null` and is
/// forwarded as-is.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "ResponseData", default)]
    response_data: Value,
}

/// Configuration for the SL client.
#[derive(Debug, Clone)]
pub struct SlConfig {
    /// Base URL of the API.
    pub base_url: String,
    /// API key for the realtime departures endpoint.
    pub api_key: String,
    /// API key for the typeahead endpoint.
    pub stop_lookup_api_key: String,
}

impl SlConfig {
    /// Create a new config.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        stop_lookup_api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            stop_lookup_api_key: stop_lookup_api_key.into(),
        }
    }
}

/// Client for the SL API.
///
/// No request timeout is set: a stalled upstream call stalls the
/// corresponding client request.
#[derive(Debug, Clone)]
pub struct SlClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    stop_lookup_api_key: String,
}

impl SlClient {
    /// Create a new SL client.
    pub fn new(config: SlConfig) -> Result<Self, SlError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            stop_lookup_api_key: config.stop_lookup_api_key,
        })
    }

    /// Fetch live departures for a site within the next hour.
    ///
    /// Returns the upstream `ResponseData` payload verbatim.
    pub async fn realtime_departures(&self, site_id: i64) -> Result<Value, SlError> {
        let url = format!("{}/realtimedeparturesV4.json", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.clone()),
                ("siteId", site_id.to_string()),
                ("timewindow", TIME_WINDOW_MINS.to_string()),
            ])
            .send()
            .await?;

        Self::parse_envelope(response).await
    }

    /// Search stations by partial name.
    ///
    /// Returns the upstream `ResponseData` payload verbatim.
    pub async fn typeahead(&self, query: &str) -> Result<Value, SlError> {
        let url = format!("{}/typeahead.json", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.stop_lookup_api_key.clone()),
                ("searchstring", query.to_string()),
                ("stationsonly", "true".to_string()),
                ("maxresults", MAX_SEARCH_RESULTS.to_string()),
            ])
            .send()
            .await?;

        Self::parse_envelope(response).await
    }

    async fn parse_envelope(response: reqwest::Response) -> Result<Value, SlError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SlError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SlError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let envelope: Envelope = serde_json::from_str(&body).map_err(|e| SlError::Json {
            message: e.to_string(),
        })?;

        Ok(envelope.response_data)
    }
}
