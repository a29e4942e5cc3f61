#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Free-text place search for the site map.
//!
//! Queries are delegated to a Nominatim / `OpenStreetMap` instance
//! configured in `services/nominatim.toml` (up to 5 results, restricted to
//! one country). Consumers talk to the [`PlaceSearch`] trait so the map
//! session can run against a fake.
//!
//! [`session::SearchSession`] tracks the search box state and tags every
//! request with a sequence number, so a slow response to an old keystroke
//! can never overwrite the results of a newer one.

pub mod nominatim;
pub mod service;
pub mod session;

use async_trait::async_trait;
use h2_sites_site_models::LatLng;
use serde::Serialize;
use thiserror::Error;

pub use nominatim::NominatimClient;
pub use service::NominatimService;
pub use session::{SearchSession, SearchState, SearchTicket};

/// A geocoded place returned by a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Provider place ID.
    pub id: u64,
    /// Full display name (comma-separated hierarchy).
    pub name: String,
    /// Place position.
    pub position: LatLng,
    /// Provider place type (e.g. `"city"`, `"village"`).
    pub kind: String,
}

impl Place {
    /// The leading component of the display name (`"Bhuj"` for
    /// `"Bhuj, Kachchh, Gujarat, India"`).
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name.split(',').next().unwrap_or_default().trim()
    }
}

/// Errors from geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The geocoder answered with a non-success status.
    #[error("Geocoder returned status {status}")]
    Status {
        /// The HTTP status code returned.
        status: u16,
    },

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,
}

/// A free-text place search provider.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Searches for places matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the lookup fails.
    async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_is_first_component() {
        let place = Place {
            id: 1,
            name: "Bhuj, Kachchh, Gujarat, India".to_string(),
            position: LatLng::new(23.25, 69.67),
            kind: "city".to_string(),
        };
        assert_eq!(place.short_name(), "Bhuj");
    }

    #[test]
    fn short_name_without_commas() {
        let place = Place {
            id: 2,
            name: "India".to_string(),
            position: LatLng::new(22.35, 78.67),
            kind: "country".to_string(),
        };
        assert_eq!(place.short_name(), "India");
    }
}
