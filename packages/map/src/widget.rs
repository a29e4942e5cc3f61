//! The map widget seam.
//!
//! [`MapWidget`] is the narrow surface the session needs from a slippy-map
//! implementation: a view (center + zoom) and an ordered set of layers that
//! can be added, removed, and enumerated. Layer swapping is built on
//! enumeration, so a widget never has to know about tile styles.

use h2_sites_site_models::LatLng;
use serde::Serialize;

use crate::popup::Popup;

/// Handle for a layer added to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LayerId(pub u64);

/// Current map viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    /// Viewport center.
    pub center: LatLng,
    /// Zoom level.
    pub zoom: u8,
}

/// A raster base-map layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    /// URL template (`{s}`, `{z}`, `{x}`, `{y}`, `{r}` placeholders).
    pub url: String,
    /// Attribution text.
    pub attribution: String,
    /// Maximum zoom level served.
    pub max_zoom: u8,
}

/// Visual role of a marker; determines its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerKind {
    /// A catalog site.
    Site,
    /// Temporary marker for a selected search result.
    SearchResult,
    /// The user's own position.
    UserLocation,
    /// An illustrative recommendation.
    Recommendation,
}

impl MarkerKind {
    /// Icon size in pixels (width, height).
    #[must_use]
    pub const fn icon_size(self) -> (u16, u16) {
        match self {
            Self::Site => (32, 32),
            Self::SearchResult => (24, 24),
            Self::UserLocation => (16, 16),
            Self::Recommendation => (40, 40),
        }
    }

    /// Icon anchor in pixels from the top-left corner.
    #[must_use]
    pub const fn icon_anchor(self) -> (u16, u16) {
        match self {
            Self::Site => (16, 32),
            Self::SearchResult => (12, 12),
            Self::UserLocation => (8, 8),
            Self::Recommendation => (20, 40),
        }
    }
}

/// A point marker with an optional popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Marker position.
    pub position: LatLng,
    /// Icon role.
    pub kind: MarkerKind,
    /// Popup bound to the marker.
    pub popup: Option<Popup>,
}

/// Anything a widget can hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Layer {
    /// Base-map tiles.
    Tile(TileLayer),
    /// A point marker.
    Marker(Marker),
}

impl Layer {
    /// Whether this is a tile layer.
    #[must_use]
    pub const fn is_tile(&self) -> bool {
        matches!(self, Self::Tile(_))
    }

    /// The marker, if this is a marker layer.
    #[must_use]
    pub const fn as_marker(&self) -> Option<&Marker> {
        match self {
            Self::Marker(marker) => Some(marker),
            Self::Tile(_) => None,
        }
    }
}

/// A pannable/zoomable map.
pub trait MapWidget {
    /// Pans and zooms to `center` at `zoom`.
    fn set_view(&mut self, center: LatLng, zoom: u8);

    /// Returns the current viewport.
    fn view(&self) -> MapView;

    /// Adds a layer on top of the existing ones.
    fn add_layer(&mut self, layer: Layer) -> LayerId;

    /// Removes a layer. Returns `false` if it was not present.
    fn remove_layer(&mut self, id: LayerId) -> bool;

    /// Enumerates the current layers in insertion order.
    fn layers(&self) -> Vec<(LayerId, &Layer)>;

    /// Opens the popup bound to a marker layer. Returns `false` if the
    /// layer is missing or has no popup.
    fn open_popup(&mut self, id: LayerId) -> bool;

    /// Releases the widget's resources. Called once when the owning
    /// session is dropped.
    fn dispose(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_anchor_lies_within_icon() {
        for kind in [
            MarkerKind::Site,
            MarkerKind::SearchResult,
            MarkerKind::UserLocation,
            MarkerKind::Recommendation,
        ] {
            let (w, h) = kind.icon_size();
            let (x, y) = kind.icon_anchor();
            assert!(x <= w && y <= h, "{kind:?} anchor outside icon");
        }
    }
}
