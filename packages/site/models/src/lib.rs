#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Hydrogen site record types and feasibility categories.
//!
//! [`Site`] is the canonical record shape shared by the seed catalog and
//! the sites API. Field names on the wire are kept exactly as the API emits
//! them (`Hydrogen_Production_kg/day`, `Feasibility_Score`, ...), so a
//! payload missing any field fails to deserialize instead of reaching the
//! summary statistics.
//!
//! Presentational shapes (map markers, landing cards) are projections of
//! [`Site`] and are never maintained by hand.

pub mod catalog;
pub mod format;
pub mod marker;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use catalog::{CatalogEntry, SiteStatus, catalog, seed_sites};
pub use marker::SiteMarker;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.lat, self.lng)
    }
}

/// A candidate hydrogen production site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// City label.
    #[serde(rename = "City")]
    pub city: String,
    /// Latitude (decimal degrees).
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    /// Longitude (decimal degrees).
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    /// Solar irradiance in kWh/m²/day.
    #[serde(rename = "Solar_Irradiance_kWh/m²/day")]
    pub solar_irradiance: f64,
    /// Ambient temperature in °C.
    #[serde(rename = "Temperature_C")]
    pub temperature_c: f64,
    /// Wind speed in m/s.
    #[serde(rename = "Wind_Speed_m/s")]
    pub wind_speed: f64,
    /// Photovoltaic generation capacity in kW.
    #[serde(rename = "PV_Power_kW")]
    pub pv_power_kw: f64,
    /// Wind generation capacity in kW.
    #[serde(rename = "Wind_Power_kW")]
    pub wind_power_kw: f64,
    /// Electrolyzer efficiency in percent.
    #[serde(rename = "Electrolyzer_Efficiency_%")]
    pub electrolyzer_efficiency: f64,
    /// Hydrogen output in kg/day.
    #[serde(rename = "Hydrogen_Production_kg/day")]
    pub hydrogen_production: f64,
    /// Desalination power draw in kW.
    #[serde(rename = "Desalination_Power_kW")]
    pub desalination_power_kw: f64,
    /// Overall system efficiency in percent.
    #[serde(rename = "System_Efficiency_%")]
    pub system_efficiency: f64,
    /// Composite feasibility score, 0-100.
    #[serde(rename = "Feasibility_Score")]
    pub feasibility_score: f64,
    /// Levelized cost of hydrogen, currency per kg.
    #[serde(rename = "LCOH")]
    pub lcoh: f64,
    /// Return on investment in percent.
    #[serde(rename = "ROI")]
    pub roi: f64,
}

impl Site {
    /// Returns the site position.
    #[must_use]
    pub const fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// Returns the feasibility category for this site's score.
    #[must_use]
    pub fn category(&self) -> FeasibilityCategory {
        FeasibilityCategory::from_score(self.feasibility_score)
    }
}

/// Feasibility bucket used for every score-dependent style (badge and
/// text color alike).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeasibilityCategory {
    /// Score below 70.
    Poor,
    /// Score in `[70, 80)`.
    Fair,
    /// Score in `[80, 90)`.
    Good,
    /// Score of 90 or above.
    Excellent,
}

impl FeasibilityCategory {
    /// Classifies a feasibility score.
    ///
    /// Total over `f64`: anything that is not `>= 70` (including `NaN`)
    /// is [`Self::Poor`].
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::Excellent
        } else if score >= 80.0 {
            Self::Good
        } else if score >= 70.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Returns all variants, worst first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Poor, Self::Fair, Self::Good, Self::Excellent]
    }
}
