//! Hospital search result types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A hospital with display name and coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    /// Display name from the geocoder.
    pub name: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

/// Outcome status of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    /// At least one hospital was found.
    #[serde(rename = "OK")]
    Ok,
    /// The search completed but matched nothing.
    #[serde(rename = "ZERO_RESULTS")]
    ZeroResults,
}

/// A completed hospital search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalSearch {
    /// Outcome status.
    pub status: SearchStatus,
    /// Matched hospitals; empty when status is `ZERO_RESULTS`.
    pub results: Vec<Hospital>,
}

/// Errors that can occur during a hospital search.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// The geocoder could not be reached.
    #[error("locator network error: {0}")]
    Network(String),

    /// The geocoder answered with an error or an unusable response.
    #[error("locator API error: {0}")]
    Api(String),
}
