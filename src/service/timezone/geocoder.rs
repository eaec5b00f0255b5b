//! Reqwest-backed geocoding adapter.
//!
//! `Geocoder` is the seam the resolver talks to; `NominatimGeocoder` implements it
//! against a Nominatim-compatible search endpoint. The adapter owns transport details
//! only: query construction, timeout and HTTP error mapping, and decoding the first
//! match's coordinates.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::{error::timezone::TimezoneError, model::timezone::Coordinates};

/// Looks up the coordinates of a place by name.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Searches for a place.
    ///
    /// # Returns
    /// - `Ok(Some(Coordinates))` - Coordinates of the best match
    /// - `Ok(None)` - The service knows no place by that name
    /// - `Err(TimezoneError)` - The request failed or the answer was unreadable
    async fn search(&self, query: &str) -> Result<Option<Coordinates>, TimezoneError>;
}

/// A single search result. Nominatim encodes coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct PlaceDto {
    lat: String,
    lon: String,
}

/// Geocoder for the Nominatim search API (`?q=<city>&format=json`).
pub struct NominatimGeocoder {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl NominatimGeocoder {
    /// Builds the geocoder with a reqwest client bound to `timeout`.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, user_agent: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            user_agent,
        })
    }

    fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json");
        url
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, query: &str) -> Result<Option<Coordinates>, TimezoneError> {
        let response = self
            .client
            .get(self.search_url(query))
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_first_place(body.as_ref())
    }
}

fn parse_first_place(body: &[u8]) -> Result<Option<Coordinates>, TimezoneError> {
    let places: Vec<PlaceDto> = serde_json::from_slice(body)
        .map_err(|error| TimezoneError::Decode(format!("invalid geocoding JSON payload: {error}")))?;

    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };

    Ok(Some(Coordinates {
        latitude: parse_degrees("lat", &place.lat)?,
        longitude: parse_degrees("lon", &place.lon)?,
    }))
}

fn parse_degrees(field: &str, raw: &str) -> Result<f64, TimezoneError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| TimezoneError::Decode(format!("{field} is not a number: {raw:?}")))
}

fn map_transport_error(error: reqwest::Error) -> TimezoneError {
    if error.is_timeout() {
        TimezoneError::Timeout(error.to_string())
    } else {
        TimezoneError::Transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> TimezoneError {
    TimezoneError::Status {
        status: status.as_u16(),
        message: body_preview(body),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_match_only() {
        let body = br#"[
            {"place_id": 1, "lat": "35.6828387", "lon": "139.7594549", "display_name": "Tokyo, Japan"},
            {"place_id": 2, "lat": "1.0", "lon": "2.0"}
        ]"#;

        let coordinates = parse_first_place(body).unwrap().unwrap();

        assert!((coordinates.latitude - 35.6828387).abs() < 1e-9);
        assert!((coordinates.longitude - 139.7594549).abs() < 1e-9);
    }

    #[test]
    fn empty_result_is_no_match() {
        assert_eq!(parse_first_place(b"[]").unwrap(), None);
    }

    #[test]
    fn non_numeric_coordinates_fail_to_decode() {
        let result = parse_first_place(br#"[{"lat": "north", "lon": "0"}]"#);

        assert!(matches!(result, Err(TimezoneError::Decode(ref msg)) if msg.contains("lat")));
    }

    #[test]
    fn non_array_body_fails_to_decode() {
        let result = parse_first_place(br#"{"error": "Unable to geocode"}"#);

        assert!(matches!(result, Err(TimezoneError::Decode(_))));
    }

    #[test]
    fn maps_status_with_compacted_body() {
        let error = map_status_error(StatusCode::SERVICE_UNAVAILABLE, b"  busy \n  try later ");

        assert_eq!(
            error,
            TimezoneError::Status {
                status: 503,
                message: "busy try later".to_string()
            }
        );
        assert!(error.is_transient());
    }

    #[test]
    fn truncates_long_bodies() {
        let body = "x".repeat(500);

        let preview = body_preview(body.as_bytes());

        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn builds_search_url_with_encoded_query() {
        let geocoder = NominatimGeocoder::new(
            Url::parse("https://nominatim.openstreetmap.org/search.php").unwrap(),
            "leaguebot-test".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();

        let url = geocoder.search_url("New York");

        assert_eq!(
            url.as_str(),
            "https://nominatim.openstreetmap.org/search.php?q=New+York&format=json"
        );
    }
}
