//! The map view's controller.
//!
//! [`MapPresenter`] wires the map session to its collaborators: place
//! search, geolocation, and the recommendation generator. Each of these
//! fails on its own; a failure surfaces as [`MapPresenter::message`] and
//! leaves the map as it was.

use std::time::Instant;

use h2_sites_geocoder::{Place, PlaceSearch, SearchSession, SearchState};
use h2_sites_site_models::{LatLng, SiteMarker, catalog};

use crate::geolocation::{GeolocationError, Geolocator};
use crate::recommend::{RecommendError, RecommendState, Recommendation, Recommender};
use crate::session::MapSession;
use crate::stats::MapStats;
use crate::tiles::TileStyle;
use crate::widget::MapWidget;

/// Everything behind the map view.
pub struct MapPresenter<W: MapWidget> {
    session: MapSession<W>,
    search: SearchSession,
    places: Box<dyn PlaceSearch>,
    geolocator: Box<dyn Geolocator>,
    recommender: Recommender,
    capital: String,
    stats: MapStats,
    message: Option<String>,
}

impl<W: MapWidget> MapPresenter<W> {
    /// Opens the map on `widget` with every catalog site plotted.
    pub fn new(
        widget: W,
        places: Box<dyn PlaceSearch>,
        geolocator: Box<dyn Geolocator>,
        recommender: Recommender,
    ) -> Self {
        let entries = catalog();
        let markers: Vec<SiteMarker> = entries.iter().map(SiteMarker::from).collect();

        Self {
            session: MapSession::open(widget, &markers),
            search: SearchSession::new(),
            places,
            geolocator,
            recommender,
            capital: String::new(),
            stats: MapStats::from_catalog(&entries),
            message: None,
        }
    }

    /// Runs a search for `query` and returns the results now shown.
    pub async fn search(&mut self, query: &str) -> &[Place] {
        self.search.search(self.places.as_ref(), query).await;
        self.search.visible_results()
    }

    /// Selects a shown search result: focuses the map on it and drops a
    /// temporary marker.
    pub fn select_result(&mut self, index: usize, now: Instant) -> Option<Place> {
        let place = self.search.select(index)?;
        self.session.focus_place(&place, now);
        log::info!("Focused search result {}", place.short_name());
        Some(place)
    }

    /// Removes expired temporary markers.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.session.expire_temporary(now)
    }

    /// Centers the map on the user's position.
    ///
    /// # Errors
    ///
    /// * [`GeolocationError`] if no position is available; the map is
    ///   left untouched and [`Self::message`] is set.
    pub async fn locate(&mut self) -> Result<LatLng, GeolocationError> {
        match self.geolocator.current_position().await {
            Ok(position) => {
                self.message = None;
                self.session.show_user_location(position);
                Ok(position)
            }
            Err(e) => {
                if let GeolocationError::Unavailable { message } = &e {
                    log::warn!("Geolocation failed: {message}");
                }
                self.message = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Sets the investment amount (crore rupees) used by [`Self::recommend`].
    pub fn set_capital(&mut self, capital: &str) {
        capital.clone_into(&mut self.capital);
    }

    /// Whether a recommendation can be requested right now.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.capital.trim().is_empty() && self.recommender.state() == RecommendState::Idle
    }

    /// Generates an illustrative recommendation and shows it on the map.
    /// The capital is cleared on success.
    ///
    /// # Errors
    ///
    /// * [`RecommendError::MissingCapital`] if no capital is set; the map is
    ///   left untouched.
    /// * [`RecommendError::AlreadyGenerating`] if a generation is running.
    pub async fn recommend(&mut self) -> Result<Recommendation, RecommendError> {
        match self.recommender.generate(&self.capital).await {
            Ok(recommendation) => {
                self.message = None;
                self.capital.clear();
                self.session.show_recommendation(&recommendation);
                Ok(recommendation)
            }
            Err(e) => {
                self.message = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Replaces the base map.
    pub fn switch_style(&mut self, style: TileStyle) {
        self.session.switch_style(style);
    }

    /// Header statistics.
    #[must_use]
    pub const fn stats(&self) -> &MapStats {
        &self.stats
    }

    /// The last user-facing failure message, cleared by the next success.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Search box state.
    #[must_use]
    pub const fn search_state(&self) -> SearchState {
        self.search.state()
    }

    /// The underlying session.
    #[must_use]
    pub const fn session(&self) -> &MapSession<W> {
        &self.session
    }
}
