#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! HTTP client for the hydrogen sites API.
//!
//! The API exposes a single listing endpoint (`GET /ml/sites/top`) that
//! returns a JSON array of [`Site`] records. Any non-2xx status, transport
//! error, or malformed record fails the whole fetch; there is no retry.
//!
//! Consumers depend on the [`SiteSource`] trait rather than on
//! [`SitesApiClient`] directly so the landing view can be driven by a fake
//! in tests.

pub mod service;

use std::time::Duration;

use async_trait::async_trait;
use h2_sites_site_models::Site;
use thiserror::Error;

pub use service::SitesService;

/// Errors from sites API operations.
#[derive(Debug, Error)]
pub enum SitesApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Failed to fetch sites data (status {status})")]
    Status {
        /// The HTTP status code returned.
        status: u16,
    },

    /// The response body was not a valid list of site records.
    #[error("Invalid sites payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anything that can produce the externally fetched site list.
#[async_trait]
pub trait SiteSource: Send + Sync {
    /// Fetches the current list of sites.
    ///
    /// # Errors
    ///
    /// Returns [`SitesApiError`] if the fetch fails for any reason.
    async fn fetch_sites(&self) -> Result<Vec<Site>, SitesApiError>;
}

/// `reqwest`-backed client for the sites API.
#[derive(Debug, Clone)]
pub struct SitesApiClient {
    client: reqwest::Client,
    service: SitesService,
}

impl SitesApiClient {
    /// Builds a client for the given service configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SitesApiError::Http`] if the HTTP client cannot be built.
    pub fn new(service: SitesService) -> Result<Self, SitesApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(service.timeout_secs))
            .user_agent(concat!("h2_sites/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, service })
    }

    /// Builds a client from the embedded config plus environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`SitesApiError::Http`] if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, SitesApiError> {
        Self::new(SitesService::from_env())
    }

    /// The service configuration this client talks to.
    #[must_use]
    pub const fn service(&self) -> &SitesService {
        &self.service
    }

    /// Fetches the top-ranked sites.
    ///
    /// # Errors
    ///
    /// Returns [`SitesApiError`] on transport failure, a non-2xx status, or
    /// an undecodable body.
    pub async fn top_sites(&self) -> Result<Vec<Site>, SitesApiError> {
        let url = self.service.top_sites_url();
        log::debug!("Fetching sites from {url}");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            log::warn!("Sites API returned status {status}");
            return Err(SitesApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let sites = parse_sites(&body)?;
        log::info!("Fetched {} sites from {}", sites.len(), self.service.name);
        Ok(sites)
    }
}

#[async_trait]
impl SiteSource for SitesApiClient {
    async fn fetch_sites(&self) -> Result<Vec<Site>, SitesApiError> {
        self.top_sites().await
    }
}

/// Parses a sites listing body.
fn parse_sites(body: &str) -> Result<Vec<Site>, SitesApiError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SITES: &str = r#"[
        {
            "City": "Jamnagar",
            "Latitude": 22.4707,
            "Longitude": 70.0577,
            "Solar_Irradiance_kWh/m²/day": 6.0,
            "Temperature_C": 27.0,
            "Wind_Speed_m/s": 7.9,
            "PV_Power_kW": 2700,
            "Wind_Power_kW": 2050,
            "Electrolyzer_Efficiency_%": 79,
            "Hydrogen_Production_kg/day": 470,
            "Desalination_Power_kW": 330,
            "System_Efficiency_%": 74,
            "Feasibility_Score": 91.0,
            "LCOH": 3.4,
            "ROI": 17.0
        },
        {
            "City": "Bhuj",
            "Latitude": 23.242,
            "Longitude": 69.6669,
            "Solar_Irradiance_kWh/m²/day": 6.1,
            "Temperature_C": 27.8,
            "Wind_Speed_m/s": 8.1,
            "PV_Power_kW": 2800,
            "Wind_Power_kW": 2100,
            "Electrolyzer_Efficiency_%": 80,
            "Hydrogen_Production_kg/day": 485,
            "Desalination_Power_kW": 340,
            "System_Efficiency_%": 75,
            "Feasibility_Score": 96.5,
            "LCOH": 3.2,
            "ROI": 18.5
        }
    ]"#;

    #[test]
    fn parses_site_listing_in_order() {
        let sites = parse_sites(TWO_SITES).unwrap();
        let cities: Vec<&str> = sites.iter().map(|s| s.city.as_str()).collect();
        assert_eq!(cities, ["Jamnagar", "Bhuj"]);
    }

    #[test]
    fn parses_empty_listing() {
        assert!(parse_sites("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array_body() {
        let err = parse_sites(r#"{"error": "down"}"#).unwrap_err();
        assert!(matches!(err, SitesApiError::Json(_)));
    }

    #[test]
    fn status_error_message() {
        let err = SitesApiError::Status { status: 503 };
        assert_eq!(err.to_string(), "Failed to fetch sites data (status 503)");
    }

    #[tokio::test]
    async fn unreachable_host_is_an_http_error() {
        let service = SitesService::embedded().with_base_url("http://127.0.0.1:9");
        let client = SitesApiClient::new(service).unwrap();
        let err = client.fetch_sites().await.unwrap_err();
        assert!(matches!(err, SitesApiError::Http(_)));
    }
}
