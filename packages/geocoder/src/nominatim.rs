//! Nominatim / `OpenStreetMap` place search client.
//!
//! The public instance allows at most 1 request per second and requires an
//! identifying `User-Agent`; the search box does not debounce, so a busy
//! typist can trip [`GeocodeError::RateLimited`].
//!
//! See <https://nominatim.org/release-docs/develop/api/Search/>

use std::time::Duration;

use async_trait::async_trait;
use h2_sites_site_models::LatLng;

use crate::{GeocodeError, NominatimService, Place, PlaceSearch};

/// Searches Nominatim for a free-form query.
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request or response parsing fails.
pub async fn search_freeform(
    client: &reqwest::Client,
    base_url: &str,
    query: &str,
    limit: u32,
    country_code: &str,
) -> Result<Vec<Place>, GeocodeError> {
    let limit_param = limit.to_string();
    let resp = client
        .get(base_url)
        .query(&[
            ("format", "json"),
            ("q", query),
            ("limit", limit_param.as_str()),
            ("countrycodes", country_code),
        ])
        .send()
        .await?;

    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GeocodeError::RateLimited);
    }

    if !resp.status().is_success() {
        return Err(GeocodeError::Status {
            status: resp.status().as_u16(),
        });
    }

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body, limit)
}

/// Parses a Nominatim search response into at most `limit` places.
fn parse_response(body: &serde_json::Value, limit: u32) -> Result<Vec<Place>, GeocodeError> {
    let results = body.as_array().ok_or_else(|| GeocodeError::Parse {
        message: "Nominatim response is not an array".to_string(),
    })?;

    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    if results.len() > limit {
        log::debug!(
            "Nominatim returned {} results, keeping the first {limit}",
            results.len()
        );
    }

    results.iter().take(limit).map(parse_place).collect()
}

fn parse_place(item: &serde_json::Value) -> Result<Place, GeocodeError> {
    let id = item["place_id"]
        .as_u64()
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing place_id in Nominatim response".to_string(),
        })?;

    let lat = coordinate(item, "lat")?;
    let lng = coordinate(item, "lon")?;

    Ok(Place {
        id,
        name: item["display_name"].as_str().unwrap_or_default().to_string(),
        position: LatLng::new(lat, lng),
        kind: item["type"].as_str().unwrap_or_default().to_string(),
    })
}

/// Nominatim encodes coordinates as strings.
fn coordinate(item: &serde_json::Value, key: &str) -> Result<f64, GeocodeError> {
    item[key]
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::Parse {
            message: format!("Missing {key} in Nominatim response"),
        })
}

/// [`PlaceSearch`] implementation backed by a Nominatim service.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    service: NominatimService,
}

impl NominatimClient {
    /// Builds a client for the given service.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the HTTP client cannot be built.
    pub fn new(service: NominatimService) -> Result<Self, GeocodeError> {
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
    /// Returns [`GeocodeError::Http`] if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, GeocodeError> {
        Self::new(NominatimService::from_env())
    }
}

#[async_trait]
impl PlaceSearch for NominatimClient {
    async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        log::debug!("Searching {} for {query:?}", self.service.name);
        search_freeform(
            &self.client,
            &self.service.base_url,
            query,
            self.service.result_limit,
            &self.service.country_code,
        )
        .await
    }
}
