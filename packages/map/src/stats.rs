//! Header statistics shown above the map.

use h2_sites_site_models::CatalogEntry;
use h2_sites_site_models::format::{one_decimal, thousands};
use serde::Serialize;

/// Figures derived from the plotted catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStats {
    /// Number of plotted sites.
    pub site_count: usize,
    /// Summed production, e.g. `"1,355 kg/day"`.
    pub total_production: String,
    /// Mean ROI, e.g. `"16.2%"`.
    pub average_roi: String,
}

impl MapStats {
    /// Counts the entries, sums their production and averages their ROI.
    #[must_use]
    pub fn from_catalog(entries: &[CatalogEntry]) -> Self {
        let total: f64 = entries.iter().map(|e| e.site.hydrogen_production).sum();
        #[allow(clippy::cast_precision_loss)]
        let average_roi = if entries.is_empty() {
            0.0
        } else {
            entries.iter().map(|e| e.site.roi).sum::<f64>() / entries.len() as f64
        };

        Self {
            site_count: entries.len(),
            total_production: format!("{} kg/day", thousands(total)),
            average_roi: format!("{}%", one_decimal(average_roi)),
        }
    }
}
