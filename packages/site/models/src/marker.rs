//! Map marker projection of catalog entries.

use serde::Serialize;

use crate::{CatalogEntry, LatLng, SiteStatus};

/// The map-facing view of a catalog site.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMarker {
    /// Catalog ID.
    pub id: u32,
    /// Facility name.
    pub name: String,
    /// Marker position.
    pub position: LatLng,
    /// Production label, e.g. `"485 kg/day"`.
    pub production: String,
    /// LCOH label, e.g. `"$3.2/kg"`.
    pub lcoh: String,
    /// ROI label, e.g. `"18.5%"`.
    pub roi: String,
    /// Review status.
    pub status: SiteStatus,
}

impl From<&CatalogEntry> for SiteMarker {
    fn from(entry: &CatalogEntry) -> Self {
        let site = &entry.site;
        Self {
            id: entry.id,
            name: entry.name.clone(),
            position: site.position(),
            production: format!("{} kg/day", site.hydrogen_production),
            lcoh: format!("${}/kg", site.lcoh),
            roi: format!("{}%", site.roi),
            status: entry.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn projects_catalog_entry() {
        let entries = catalog();
        let marker = SiteMarker::from(&entries[0]);
        assert_eq!(marker.id, 1);
        assert_eq!(marker.name, "Bhuj Green Hydrogen Hub");
        assert_eq!(marker.production, "485 kg/day");
        assert_eq!(marker.lcoh, "$3.2/kg");
        assert_eq!(marker.roi, "18.5%");
        assert_eq!(marker.status, SiteStatus::AiRecommended);
        assert_eq!(marker.position, LatLng::new(23.242, 69.6669));
    }

    #[test]
    fn under_analysis_entry_keeps_status() {
        let entries = catalog();
        let marker = SiteMarker::from(&entries[2]);
        assert_eq!(marker.status.to_string(), "Under Analysis");
        assert_eq!(marker.production, "420 kg/day");
        assert_eq!(marker.lcoh, "$4.1/kg");
    }
}
