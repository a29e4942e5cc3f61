//! Nominatim service configuration.
//!
//! Embedded from `services/nominatim.toml`; `H2_SITES_GEOCODER_URL`
//! overrides the base URL at runtime.

use serde::Deserialize;

/// Environment variable overriding [`NominatimService::base_url`].
pub const BASE_URL_ENV: &str = "H2_SITES_GEOCODER_URL";

/// A Nominatim endpoint configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimService {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Search endpoint URL.
    pub base_url: String,
    /// Maximum number of results per query.
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,
    /// ISO 3166-1 alpha-2 country restriction.
    pub country_code: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_result_limit() -> u32 {
    5
}

const fn default_timeout_secs() -> u64 {
    10
}

const SERVICE_TOML: &str = include_str!("../services/nominatim.toml");

impl NominatimService {
    /// Returns the embedded default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    #[must_use]
    pub fn embedded() -> Self {
        toml::de::from_str(SERVICE_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse geocoding service config: {e}"))
    }

    /// Returns the embedded configuration with `H2_SITES_GEOCODER_URL`
    /// applied.
    #[must_use]
    pub fn from_env() -> Self {
        let mut service = Self::embedded();
        if let Ok(url) = std::env::var(BASE_URL_ENV)
            && !url.trim().is_empty()
        {
            log::debug!("Using geocoder URL from {BASE_URL_ENV}: {url}");
            service.base_url = url.trim().to_string();
        }
        service
    }
}
