//! HospitalLocator implementation using Nominatim.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::types::{Hospital, HospitalSearch, LocatorError, SearchStatus};

/// Configuration for HospitalLocator.
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    /// Nominatim base URL.
    pub base_url: String,
    /// User-Agent header. Nominatim's usage policy requires an
    /// identifying agent string.
    pub user_agent: String,
    /// Maximum number of results to request.
    pub limit: u32,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "sehat/0.1".to_string(),
            limit: 15,
        }
    }
}

/// One place record in a Nominatim search response.
#[derive(Debug, Clone, Deserialize)]
struct NominatimPlace {
    /// Full display name.
    #[serde(default)]
    display_name: Option<String>,
    /// Latitude as a decimal string.
    lat: String,
    /// Longitude as a decimal string.
    lon: String,
}

/// A hospital search client backed by Nominatim.
#[derive(Debug, Clone)]
pub struct HospitalLocator {
    client: Client,
    config: LocatorConfig,
}

impl HospitalLocator {
    /// Create a new HospitalLocator with the given configuration.
    pub fn new(config: LocatorConfig) -> Result<Self, LocatorError> {
        let client = Client::builder()
            .build()
            .map_err(|e| LocatorError::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Search for hospitals near a free-text location.
    pub async fn search(&self, location: &str) -> Result<HospitalSearch, LocatorError> {
        let url = format!("{}/search", self.config.base_url);
        let query = format!("hospital near {}", location);
        let limit = self.config.limit.to_string();

        debug!(location, "Searching for hospitals");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("format", "json"),
                ("limit", limit.as_str()),
            ])
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .send()
            .await
            .map_err(|e| LocatorError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LocatorError::Api(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| LocatorError::Api(format!("Failed to parse response: {}", e)))?;

        from_places(places)
    }
}

/// Convert raw Nominatim places into a search result.
fn from_places(places: Vec<NominatimPlace>) -> Result<HospitalSearch, LocatorError> {
    if places.is_empty() {
        return Ok(HospitalSearch {
            status: SearchStatus::ZeroResults,
            results: Vec::new(),
        });
    }

    let mut results = Vec::with_capacity(places.len());
    for place in places {
        let lat = place
            .lat
            .parse::<f64>()
            .map_err(|_| LocatorError::Api(format!("malformed latitude: {}", place.lat)))?;
        let lon = place
            .lon
            .parse::<f64>()
            .map_err(|_| LocatorError::Api(format!("malformed longitude: {}", place.lon)))?;

        results.push(Hospital {
            name: place
                .display_name
                .unwrap_or_else(|| "Unnamed Hospital".to_string()),
            lat,
            lon,
        });
    }

    Ok(HospitalSearch {
        status: SearchStatus::Ok,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places_from_json(body: &str) -> Vec<NominatimPlace> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_decodes_places() {
        let places = places_from_json(
            r#"[
                {"display_name": "AIIMS, Delhi", "lat": "28.5672", "lon": "77.2100"},
                {"lat": "28.6", "lon": "77.3"}
            ]"#,
        );

        let search = from_places(places).unwrap();
        assert_eq!(search.status, SearchStatus::Ok);
        assert_eq!(search.results.len(), 2);
        assert_eq!(search.results[0].name, "AIIMS, Delhi");
        assert!((search.results[0].lat - 28.5672).abs() < 1e-9);
        assert_eq!(search.results[1].name, "Unnamed Hospital");
    }

    #[test]
    fn test_empty_is_zero_results() {
        let search = from_places(Vec::new()).unwrap();
        assert_eq!(search.status, SearchStatus::ZeroResults);
        assert!(search.results.is_empty());
    }

    #[test]
    fn test_malformed_coordinates_error() {
        let places = places_from_json(r#"[{"display_name": "X", "lat": "not-a-number", "lon": "77"}]"#);
        assert!(matches!(from_places(places), Err(LocatorError::Api(_))));
    }

    #[test]
    fn test_status_serializes_to_wire_labels() {
        assert_eq!(
            serde_json::to_string(&SearchStatus::ZeroResults).unwrap(),
            "\"ZERO_RESULTS\""
        );
        assert_eq!(serde_json::to_string(&SearchStatus::Ok).unwrap(), "\"OK\"");
    }
}
