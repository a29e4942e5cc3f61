//! Sites API service configuration.
//!
//! The default endpoint is embedded at compile time from
//! `services/sites.toml`. `H2_SITES_API_URL` overrides the base URL at
//! runtime.

use serde::Deserialize;

/// Environment variable overriding [`SitesService::base_url`].
pub const BASE_URL_ENV: &str = "H2_SITES_API_URL";

/// A sites API endpoint configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SitesService {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// API base URL without a trailing slash.
    pub base_url: String,
    /// Path of the top-sites listing endpoint.
    pub top_sites_path: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

const SERVICE_TOML: &str = include_str!("../services/sites.toml");

impl SitesService {
    /// Returns the embedded default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed (a development error caught
    /// by the tests below).
    #[must_use]
    pub fn embedded() -> Self {
        toml::de::from_str(SERVICE_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse sites service config: {e}"))
    }

    /// Returns the embedded configuration with `H2_SITES_API_URL` applied.
    #[must_use]
    pub fn from_env() -> Self {
        let service = Self::embedded();
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                log::debug!("Using sites API base URL from {BASE_URL_ENV}: {url}");
                service.with_base_url(&url)
            }
            _ => service,
        }
    }

    /// Replaces the base URL, dropping any trailing slash.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Full URL of the top-sites endpoint.
    #[must_use]
    pub fn top_sites_url(&self) -> String {
        format!("{}{}", self.base_url, self.top_sites_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let service = SitesService::embedded();
        assert_eq!(service.id, "sites");
        assert!(!service.name.is_empty());
        assert!(service.base_url.starts_with("https://"));
        assert!(service.timeout_secs > 0);
    }

    #[test]
    fn top_sites_url_joins_path() {
        let service = SitesService::embedded().with_base_url("http://localhost:8000/");
        assert_eq!(service.top_sites_url(), "http://localhost:8000/ml/sites/top");
    }
}
