//! The built-in site catalog.
//!
//! One list feeds both the landing seed sites and the map markers. Only
//! entries with [`SiteStatus::AiRecommended`] are landing seeds; every
//! entry is plotted on the map.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::Site;

/// Review status shown on a site's map marker.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum SiteStatus {
    /// Ranked by the recommendation pipeline; shown on the landing page.
    #[strum(serialize = "AI Recommended")]
    #[serde(rename = "AI Recommended")]
    AiRecommended,
    /// Still being evaluated; map only.
    #[strum(serialize = "Under Analysis")]
    #[serde(rename = "Under Analysis")]
    UnderAnalysis,
}

/// A catalog site with its map identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Stable marker ID.
    pub id: u32,
    /// Facility name shown on the map (e.g. "Bhuj Green Hydrogen Hub").
    pub name: String,
    /// Review status.
    pub status: SiteStatus,
    /// The underlying site record.
    pub site: Site,
}

#[cfg(test)]
const EXPECTED_CATALOG_SIZE: usize = 3;

/// Returns every catalog entry in display order.
#[must_use]
pub fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            id: 1,
            name: "Bhuj Green Hydrogen Hub".to_string(),
            status: SiteStatus::AiRecommended,
            site: Site {
                city: "Bhuj".to_string(),
                latitude: 23.242,
                longitude: 69.6669,
                solar_irradiance: 6.1,
                temperature_c: 27.8,
                wind_speed: 8.1,
                pv_power_kw: 2800.0,
                wind_power_kw: 2100.0,
                electrolyzer_efficiency: 80.0,
                hydrogen_production: 485.0,
                desalination_power_kw: 340.0,
                system_efficiency: 75.0,
                feasibility_score: 96.5,
                lcoh: 3.2,
                roi: 18.5,
            },
        },
        CatalogEntry {
            id: 2,
            name: "Rajkot Solar-H2 Plant".to_string(),
            status: SiteStatus::AiRecommended,
            site: Site {
                city: "Rajkot".to_string(),
                latitude: 22.3039,
                longitude: 70.8022,
                solar_irradiance: 5.8,
                temperature_c: 28.5,
                wind_speed: 7.2,
                pv_power_kw: 2500.0,
                wind_power_kw: 1800.0,
                electrolyzer_efficiency: 78.0,
                hydrogen_production: 450.0,
                desalination_power_kw: 320.0,
                system_efficiency: 72.0,
                feasibility_score: 94.2,
                lcoh: 3.8,
                roi: 15.2,
            },
        },
        CatalogEntry {
            id: 3,
            name: "Gandhinagar Wind-H2 Facility".to_string(),
            status: SiteStatus::UnderAnalysis,
            site: Site {
                city: "Gandhinagar".to_string(),
                latitude: 23.2156,
                longitude: 72.6369,
                solar_irradiance: 5.6,
                temperature_c: 27.4,
                wind_speed: 6.4,
                pv_power_kw: 2300.0,
                wind_power_kw: 1600.0,
                electrolyzer_efficiency: 77.0,
                hydrogen_production: 420.0,
                desalination_power_kw: 300.0,
                system_efficiency: 70.0,
                feasibility_score: 89.1,
                lcoh: 4.1,
                roi: 14.8,
            },
        },
    ]
}

/// Returns the landing-page seed sites: the AI-recommended catalog
/// entries, in catalog order.
#[must_use]
pub fn seed_sites() -> Vec<Site> {
    catalog()
        .into_iter()
        .filter(|entry| entry.status == SiteStatus::AiRecommended)
        .map(|entry| entry.site)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn catalog_size() {
        assert_eq!(catalog().len(), EXPECTED_CATALOG_SIZE);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut seen = BTreeSet::new();
        for entry in &catalog() {
            assert!(seen.insert(entry.id), "Duplicate catalog ID: {}", entry.id);
        }
    }

    #[test]
    fn seed_sites_are_recommended_entries_in_order() {
        let cities: Vec<String> = seed_sites().into_iter().map(|s| s.city).collect();
        assert_eq!(cities, ["Bhuj", "Rajkot"]);
    }

    #[test]
    fn status_labels() {
        assert_eq!(SiteStatus::AiRecommended.to_string(), "AI Recommended");
        assert_eq!(SiteStatus::UnderAnalysis.to_string(), "Under Analysis");
    }
}
