//! In-memory [`MapWidget`] with no rendering.
//!
//! Used by the terminal front-end and by tests: every operation is
//! recorded so the map state can be printed or asserted on.

use std::collections::BTreeMap;

use h2_sites_site_models::LatLng;

use crate::widget::{Layer, LayerId, MapView, MapWidget};

/// A map widget that only keeps state.
#[derive(Debug)]
pub struct HeadlessMap {
    view: MapView,
    layers: BTreeMap<LayerId, Layer>,
    next_id: u64,
    open_popup: Option<LayerId>,
    disposed: bool,
}

impl Default for HeadlessMap {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessMap {
    /// Creates an empty map at (0, 0), zoom 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            view: MapView {
                center: LatLng::new(0.0, 0.0),
                zoom: 0,
            },
            layers: BTreeMap::new(),
            next_id: 1,
            open_popup: None,
            disposed: false,
        }
    }

    /// The marker layer whose popup is open, if any.
    #[must_use]
    pub const fn open_popup_layer(&self) -> Option<LayerId> {
        self.open_popup
    }

    /// Whether [`MapWidget::dispose`] has run.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl MapWidget for HeadlessMap {
    fn set_view(&mut self, center: LatLng, zoom: u8) {
        log::trace!("set_view {center} z{zoom}");
        self.view = MapView { center, zoom };
    }

    fn view(&self) -> MapView {
        self.view
    }

    fn add_layer(&mut self, layer: Layer) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.insert(id, layer);
        id
    }

    fn remove_layer(&mut self, id: LayerId) -> bool {
        if self.open_popup == Some(id) {
            self.open_popup = None;
        }
        self.layers.remove(&id).is_some()
    }

    fn layers(&self) -> Vec<(LayerId, &Layer)> {
        self.layers.iter().map(|(id, layer)| (*id, layer)).collect()
    }

    fn open_popup(&mut self, id: LayerId) -> bool {
        let has_popup = self
            .layers
            .get(&id)
            .and_then(Layer::as_marker)
            .is_some_and(|marker| marker.popup.is_some());
        if has_popup {
            self.open_popup = Some(id);
        }
        has_popup
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        log::debug!("Disposing headless map ({} layers)", self.layers.len());
        self.layers.clear();
        self.open_popup = None;
        self.disposed = true;
    }
}
