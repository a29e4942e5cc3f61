#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive map of hydrogen sites.
//!
//! A [`MapSession`] owns a [`MapWidget`] and everything plotted on it: the
//! base-map tile layer, catalog site markers, temporary search markers, the
//! user's position, and illustrative recommendations. [`MapPresenter`]
//! drives a session from place search, geolocation, and the
//! [`Recommender`].

pub mod geolocation;
pub mod headless;
pub mod popup;
pub mod presenter;
pub mod recommend;
pub mod session;
pub mod stats;
pub mod tiles;
pub mod widget;

pub use geolocation::{EnvGeolocator, FixedLocation, GeolocationError, Geolocator};
pub use headless::HeadlessMap;
pub use popup::Popup;
pub use presenter::MapPresenter;
pub use recommend::{
    ILLUSTRATIVE_NOTICE, RecommendError, RecommendState, Recommendation, Recommender,
};
pub use session::MapSession;
pub use stats::MapStats;
pub use tiles::TileStyle;
pub use widget::{Layer, LayerId, MapView, MapWidget, Marker, MarkerKind, TileLayer};
