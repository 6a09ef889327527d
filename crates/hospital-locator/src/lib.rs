//! Hospital search against the OpenStreetMap Nominatim API.
//!
//! Takes a free-text location and returns nearby hospitals as
//! `{name, latitude, longitude}` records. Results are never persisted by
//! the rest of the system.

mod locator;
mod types;

pub use locator::{HospitalLocator, LocatorConfig};
pub use types::{Hospital, HospitalSearch, LocatorError, SearchStatus};
