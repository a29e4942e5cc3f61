//! Base-map tile styles.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::widget::TileLayer;

/// Maximum zoom served by every style.
pub const MAX_ZOOM: u8 = 19;

/// Interchangeable base-map styles.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TileStyle {
    /// `OpenStreetMap` standard tiles.
    #[default]
    Street,
    /// Esri World Imagery.
    Satellite,
    /// CARTO dark basemap.
    Dark,
}

impl TileStyle {
    /// Returns all styles in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Street, Self::Satellite, Self::Dark]
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Street => "Street",
            Self::Satellite => "Satellite",
            Self::Dark => "Dark",
        }
    }

    /// URL template for this style.
    #[must_use]
    pub const fn url(self) -> &'static str {
        match self {
            Self::Street => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            Self::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
            Self::Dark => "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
        }
    }

    /// Attribution text required by the tile provider.
    #[must_use]
    pub const fn attribution(self) -> &'static str {
        match self {
            Self::Street => "© OpenStreetMap contributors",
            Self::Satellite => "© Esri",
            Self::Dark => "© CartoDB",
        }
    }

    /// Builds the tile layer for this style.
    #[must_use]
    pub fn tile_layer(self) -> TileLayer {
        TileLayer {
            url: self.url().to_string(),
            attribution: self.attribution().to_string(),
            max_zoom: MAX_ZOOM,
        }
    }
}
