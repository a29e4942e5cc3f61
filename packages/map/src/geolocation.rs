//! One-shot user position lookup.

use async_trait::async_trait;
use h2_sites_site_models::LatLng;
use thiserror::Error;

/// Environment variable holding a fixed `"lat,lng"` position.
pub const LOCATION_ENV: &str = "H2_SITES_LOCATION";

/// Errors from a position request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// No positioning facility is available.
    #[error("Geolocation is not supported.")]
    Unsupported,

    /// The facility exists but could not produce a position.
    #[error("Unable to retrieve your location.")]
    Unavailable {
        /// Underlying reason, for logs.
        message: String,
    },
}

/// A source of the user's current position.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Requests the current position once.
    ///
    /// # Errors
    ///
    /// Returns [`GeolocationError`] if no position can be obtained.
    async fn current_position(&self) -> Result<LatLng, GeolocationError>;
}

/// Always answers with the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub LatLng);

#[async_trait]
impl Geolocator for FixedLocation {
    async fn current_position(&self) -> Result<LatLng, GeolocationError> {
        Ok(self.0)
    }
}

/// Reads the position from [`LOCATION_ENV`] on every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvGeolocator;

#[async_trait]
impl Geolocator for EnvGeolocator {
    async fn current_position(&self) -> Result<LatLng, GeolocationError> {
        let raw = std::env::var(LOCATION_ENV).map_err(|_| GeolocationError::Unsupported)?;
        parse_position(&raw)
    }
}

/// Parses `"lat,lng"`.
///
/// # Errors
///
/// * [`GeolocationError::Unavailable`] if the text is not two numbers or
///   the numbers are outside WGS84 bounds.
pub fn parse_position(raw: &str) -> Result<LatLng, GeolocationError> {
    let unavailable = |message: String| GeolocationError::Unavailable { message };

    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| unavailable(format!("expected \"lat,lng\", got {raw:?}")))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| unavailable(format!("bad latitude {lat:?}: {e}")))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|e| unavailable(format!("bad longitude {lng:?}: {e}")))?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(unavailable(format!("position out of range: {lat},{lng}")));
    }

    Ok(LatLng::new(lat, lng))
}
