//! Landing card projection of a [`Site`].

use h2_sites_site_models::{
    FeasibilityCategory, Site,
    format::{one_decimal, thousands},
};
use serde::Serialize;

/// Display-ready strings for one landing-page site card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCard {
    /// City label.
    pub city: String,
    /// `"23.2420°, 69.6669°"`.
    pub coordinates: String,
    /// Feasibility score to one decimal.
    pub score: String,
    /// Category driving both badge and text styling.
    pub category: FeasibilityCategory,
    /// `"$3.2/kg"`.
    pub lcoh: String,
    /// `"18.5%"`.
    pub roi: String,
    /// `"485 kg/day"`.
    pub production: String,
    /// `"80%"`.
    pub electrolyzer_efficiency: String,
    /// `"75%"`.
    pub system_efficiency: String,
    /// `"6.1 kWh/m²/day"`.
    pub solar_irradiance: String,
    /// `"27.8 °C"`.
    pub temperature: String,
    /// `"8.1 m/s"`.
    pub wind_speed: String,
    /// `"2,800 kW"`.
    pub pv_power: String,
    /// `"2,100 kW"`.
    pub wind_power: String,
    /// `"340 kW"`.
    pub desalination_power: String,
}

impl From<&Site> for SiteCard {
    fn from(site: &Site) -> Self {
        Self {
            city: site.city.clone(),
            coordinates: site.position().to_string(),
            score: one_decimal(site.feasibility_score),
            category: site.category(),
            lcoh: format!("${}/kg", site.lcoh),
            roi: format!("{}%", site.roi),
            production: format!("{} kg/day", site.hydrogen_production),
            electrolyzer_efficiency: format!("{}%", site.electrolyzer_efficiency),
            system_efficiency: format!("{}%", site.system_efficiency),
            solar_irradiance: format!("{} kWh/m²/day", site.solar_irradiance),
            temperature: format!("{} °C", site.temperature_c),
            wind_speed: format!("{} m/s", site.wind_speed),
            pv_power: format!("{} kW", thousands(site.pv_power_kw)),
            wind_power: format!("{} kW", thousands(site.wind_power_kw)),
            desalination_power: format!("{} kW", site.desalination_power_kw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use h2_sites_site_models::seed_sites;

    #[test]
    fn projects_bhuj() {
        let card = SiteCard::from(&seed_sites()[0]);
        assert_eq!(card.city, "Bhuj");
        assert_eq!(card.coordinates, "23.2420°, 69.6669°");
        assert_eq!(card.score, "96.5");
        assert_eq!(card.category, FeasibilityCategory::Excellent);
        assert_eq!(card.lcoh, "$3.2/kg");
        assert_eq!(card.roi, "18.5%");
        assert_eq!(card.production, "485 kg/day");
        assert_eq!(card.pv_power, "2,800 kW");
        assert_eq!(card.wind_power, "2,100 kW");
        assert_eq!(card.desalination_power, "340 kW");
        assert_eq!(card.system_efficiency, "75%");
    }

    #[test]
    fn card_category_matches_site_category() {
        for site in seed_sites() {
            assert_eq!(SiteCard::from(&site).category, site.category());
        }
    }
}
