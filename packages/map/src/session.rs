//! A live map: owns the widget and every layer the presenter put on it.
//!
//! The session is the only thing that touches the widget. Dropping it
//! disposes the widget.

use std::time::{Duration, Instant};

use h2_sites_geocoder::Place;
use h2_sites_site_models::{LatLng, SiteMarker};

use crate::popup::Popup;
use crate::recommend::Recommendation;
use crate::tiles::TileStyle;
use crate::widget::{Layer, LayerId, MapView, MapWidget, Marker, MarkerKind};

/// Initial map center (Gujarat).
pub const INITIAL_CENTER: LatLng = LatLng::new(23.0225, 72.5714);
/// Initial zoom level.
pub const INITIAL_ZOOM: u8 = 7;
/// Zoom used when focusing a search result.
pub const PLACE_ZOOM: u8 = 12;
/// Zoom used when showing the user's position.
pub const USER_LOCATION_ZOOM: u8 = 15;
/// Zoom used when showing a recommendation.
pub const RECOMMENDATION_ZOOM: u8 = 12;
/// Lifetime of a search-result marker.
pub const SEARCH_MARKER_TTL: Duration = Duration::from_secs(3);

/// An open map with its layers.
#[derive(Debug)]
pub struct MapSession<W: MapWidget> {
    widget: W,
    style: TileStyle,
    site_layers: Vec<LayerId>,
    temporary: Vec<(LayerId, Instant)>,
    user_marker: Option<LayerId>,
}

impl<W: MapWidget> MapSession<W> {
    /// Opens a session on `widget`: initial view, street tiles, and one
    /// marker per site.
    pub fn open(widget: W, sites: &[SiteMarker]) -> Self {
        let mut session = Self {
            widget,
            style: TileStyle::default(),
            site_layers: Vec::with_capacity(sites.len()),
            temporary: Vec::new(),
            user_marker: None,
        };

        session.widget.set_view(INITIAL_CENTER, INITIAL_ZOOM);
        session
            .widget
            .add_layer(Layer::Tile(session.style.tile_layer()));
        session.plot_sites(sites);

        log::debug!("Opened map session with {} site markers", sites.len());
        session
    }

    /// Adds a site marker (with popup) for each of `sites`.
    pub fn plot_sites(&mut self, sites: &[SiteMarker]) {
        for site in sites {
            let id = self.widget.add_layer(Layer::Marker(Marker {
                position: site.position,
                kind: MarkerKind::Site,
                popup: Some(Popup::for_site(site)),
            }));
            self.site_layers.push(id);
        }
    }

    /// Replaces the base map with `style`.
    ///
    /// Every tile layer is removed before the new one is added, so the map
    /// holds exactly one tile layer afterwards even when `style` is the
    /// current style.
    pub fn switch_style(&mut self, style: TileStyle) {
        let tiles: Vec<LayerId> = self
            .widget
            .layers()
            .into_iter()
            .filter(|(_, layer)| layer.is_tile())
            .map(|(id, _)| id)
            .collect();

        for id in tiles {
            self.widget.remove_layer(id);
        }

        self.widget.add_layer(Layer::Tile(style.tile_layer()));
        self.style = style;
        log::debug!("Switched tile style to {style}");
    }

    /// Centers on a search result and drops a temporary marker that
    /// [`Self::expire_temporary`] removes once `now + SEARCH_MARKER_TTL`
    /// has passed.
    pub fn focus_place(&mut self, place: &Place, now: Instant) -> LayerId {
        self.widget.set_view(place.position, PLACE_ZOOM);
        let id = self.widget.add_layer(Layer::Marker(Marker {
            position: place.position,
            kind: MarkerKind::SearchResult,
            popup: None,
        }));
        self.temporary.push((id, now + SEARCH_MARKER_TTL));
        id
    }

    /// Removes temporary markers whose lifetime ended at or before `now`.
    /// Returns how many were removed.
    pub fn expire_temporary(&mut self, now: Instant) -> usize {
        let (expired, live): (Vec<_>, Vec<_>) = self
            .temporary
            .drain(..)
            .partition(|(_, expires_at)| *expires_at <= now);
        self.temporary = live;

        for (id, _) in &expired {
            self.widget.remove_layer(*id);
        }
        expired.len()
    }

    /// Centers on the user's position and marks it, replacing any earlier
    /// user marker.
    pub fn show_user_location(&mut self, position: LatLng) -> LayerId {
        if let Some(previous) = self.user_marker.take() {
            self.widget.remove_layer(previous);
        }

        self.widget.set_view(position, USER_LOCATION_ZOOM);
        let id = self.widget.add_layer(Layer::Marker(Marker {
            position,
            kind: MarkerKind::UserLocation,
            popup: Some(Popup::text("Your Location")),
        }));
        self.widget.open_popup(id);
        self.user_marker = Some(id);
        id
    }

    /// Centers on a recommendation and adds its marker with the popup open.
    pub fn show_recommendation(&mut self, recommendation: &Recommendation) -> LayerId {
        self.widget
            .set_view(recommendation.position, RECOMMENDATION_ZOOM);
        let id = self.widget.add_layer(Layer::Marker(Marker {
            position: recommendation.position,
            kind: MarkerKind::Recommendation,
            popup: Some(Popup::for_recommendation(recommendation)),
        }));
        self.widget.open_popup(id);
        id
    }

    /// Current tile style.
    #[must_use]
    pub const fn style(&self) -> TileStyle {
        self.style
    }

    /// Current viewport.
    #[must_use]
    pub fn view(&self) -> MapView {
        self.widget.view()
    }

    /// Number of site markers plotted.
    #[must_use]
    pub fn site_count(&self) -> usize {
        self.site_layers.len()
    }

    /// Number of tile layers on the map.
    #[must_use]
    pub fn tile_layer_count(&self) -> usize {
        self.widget
            .layers()
            .iter()
            .filter(|(_, layer)| layer.is_tile())
            .count()
    }

    /// Markers of the given kind currently on the map.
    #[must_use]
    pub fn markers(&self, kind: MarkerKind) -> Vec<&Marker> {
        self.widget
            .layers()
            .into_iter()
            .filter_map(|(_, layer)| layer.as_marker())
            .filter(|marker| marker.kind == kind)
            .collect()
    }

    /// Read access to the widget.
    #[must_use]
    pub const fn widget(&self) -> &W {
        &self.widget
    }
}

impl<W: MapWidget> Drop for MapSession<W> {
    fn drop(&mut self) {
        self.widget.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessMap;
    use crate::recommend::ILLUSTRATIVE_NOTICE;
    use h2_sites_site_models::catalog;
    use std::cell::Cell;
    use std::rc::Rc;

    fn markers() -> Vec<SiteMarker> {
        catalog().iter().map(SiteMarker::from).collect()
    }

    fn open() -> MapSession<HeadlessMap> {
        MapSession::open(HeadlessMap::new(), &markers())
    }

    fn place() -> Place {
        Place {
            id: 1,
            name: "Kandla, Kachchh, Gujarat, India".to_string(),
            position: LatLng::new(23.0333, 70.2167),
            kind: "town".to_string(),
        }
    }

    #[test]
    fn opens_over_gujarat_with_sites() {
        let session = open();
        assert_eq!(session.view().center, INITIAL_CENTER);
        assert_eq!(session.view().zoom, INITIAL_ZOOM);
        assert_eq!(session.style(), TileStyle::Street);
        assert_eq!(session.tile_layer_count(), 1);
        assert_eq!(session.markers(MarkerKind::Site).len(), 3);
        assert_eq!(session.site_count(), 3);
    }

    #[test]
    fn switching_styles_keeps_one_tile_layer() {
        let mut session = open();
        session.switch_style(TileStyle::Satellite);
        session.switch_style(TileStyle::Satellite);
        assert_eq!(session.tile_layer_count(), 1);
        session.switch_style(TileStyle::Dark);
        assert_eq!(session.tile_layer_count(), 1);
        assert_eq!(session.style(), TileStyle::Dark);
        assert_eq!(session.markers(MarkerKind::Site).len(), 3);
    }

    #[test]
    fn search_marker_expires_after_ttl() {
        let mut session = open();
        let start = Instant::now();
        session.focus_place(&place(), start);

        assert_eq!(session.view().zoom, PLACE_ZOOM);
        assert_eq!(session.markers(MarkerKind::SearchResult).len(), 1);

        assert_eq!(
            session.expire_temporary(start + Duration::from_millis(2999)),
            0
        );
        assert_eq!(session.expire_temporary(start + SEARCH_MARKER_TTL), 1);
        assert!(session.markers(MarkerKind::SearchResult).is_empty());
    }

    #[test]
    fn user_location_replaces_previous_marker() {
        let mut session = open();
        session.show_user_location(LatLng::new(23.0, 72.5));
        let id = session.show_user_location(LatLng::new(23.1, 72.6));

        assert_eq!(session.view().zoom, USER_LOCATION_ZOOM);
        assert_eq!(session.markers(MarkerKind::UserLocation).len(), 1);
        assert_eq!(session.widget().open_popup_layer(), Some(id));
    }

    #[test]
    fn recommendation_marker_carries_notice() {
        let mut session = open();
        let rec = Recommendation {
            city: "Pune".to_string(),
            position: LatLng::new(18.5204, 73.8567),
            capital: "50".to_string(),
            lcoh: 3.04,
            roi: 17.96,
            feasibility: 88.0,
            generated_at: chrono::Utc::now(),
            notice: ILLUSTRATIVE_NOTICE,
        };
        session.show_recommendation(&rec);

        assert_eq!(session.view().center, rec.position);
        assert_eq!(session.view().zoom, RECOMMENDATION_ZOOM);
        let markers = session.markers(MarkerKind::Recommendation);
        let popup = markers[0].popup.as_ref().unwrap();
        assert_eq!(popup.rows[0].1, "₹50 Cr");
        assert_eq!(popup.rows[1].1, "3.0/kg");
        assert_eq!(popup.rows[2].1, "18.0%");
        assert_eq!(popup.footer.as_deref(), Some(ILLUSTRATIVE_NOTICE));
    }

    struct Tracked {
        inner: HeadlessMap,
        disposed: Rc<Cell<bool>>,
    }

    impl MapWidget for Tracked {
        fn set_view(&mut self, center: LatLng, zoom: u8) {
            self.inner.set_view(center, zoom);
        }
        fn view(&self) -> MapView {
            self.inner.view()
        }
        fn add_layer(&mut self, layer: Layer) -> LayerId {
            self.inner.add_layer(layer)
        }
        fn remove_layer(&mut self, id: LayerId) -> bool {
            self.inner.remove_layer(id)
        }
        fn layers(&self) -> Vec<(LayerId, &Layer)> {
            self.inner.layers()
        }
        fn open_popup(&mut self, id: LayerId) -> bool {
            self.inner.open_popup(id)
        }
        fn dispose(&mut self) {
            self.inner.dispose();
            self.disposed.set(true);
        }
    }

    #[test]
    fn dropping_session_disposes_widget() {
        let disposed = Rc::new(Cell::new(false));
        let session = MapSession::open(
            Tracked {
                inner: HeadlessMap::new(),
                disposed: Rc::clone(&disposed),
            },
            &markers(),
        );
        assert!(!disposed.get());
        drop(session);
        assert!(disposed.get());
    }
}
