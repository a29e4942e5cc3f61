//! Landing view state: seed sites plus a one-shot fetch.
//!
//! The view starts [`SiteLoad::Pending`]. [`SiteListView::mount`] performs
//! the single fetch for this view's lifetime; later calls are no-ops.
//! A failed fetch keeps its message and the seed sites remain usable.

use h2_sites_api::SiteSource;
use h2_sites_site_models::{Site, seed_sites};

use crate::{SiteSummary, aggregate};

/// Notice shown while the fetch is in flight.
pub const LOADING_NOTICE: &str = "Loading additional sites from backend...";

/// State of the additional-sites fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteLoad {
    /// Fetch not finished yet.
    Pending,
    /// Fetch succeeded with these sites.
    Loaded(Vec<Site>),
    /// Fetch failed; the message is kept for display.
    Failed(String),
}

/// The landing view's owned state.
pub struct SiteListView<S> {
    source: S,
    seed: Vec<Site>,
    load: SiteLoad,
    mounted: bool,
}

impl<S: SiteSource> SiteListView<S> {
    /// Creates a view over the built-in seed sites.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_seed(source, seed_sites())
    }

    /// Creates a view with an explicit seed list.
    #[must_use]
    pub const fn with_seed(source: S, seed: Vec<Site>) -> Self {
        Self {
            source,
            seed,
            load: SiteLoad::Pending,
            mounted: false,
        }
    }

    /// Runs the one-shot fetch. Subsequent calls do nothing.
    pub async fn mount(&mut self) {
        if self.mounted {
            log::debug!("Site list already mounted; skipping fetch");
            return;
        }
        self.mounted = true;
        self.load = SiteLoad::Pending;

        self.load = match self.source.fetch_sites().await {
            Ok(sites) => {
                log::info!("Loaded {} additional sites", sites.len());
                SiteLoad::Loaded(sites)
            }
            Err(e) => {
                log::error!("Error fetching backend sites: {e}");
                SiteLoad::Failed(e.to_string())
            }
        };
    }

    /// Current fetch state.
    #[must_use]
    pub const fn load(&self) -> &SiteLoad {
        &self.load
    }

    /// Whether the fetch is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.load, SiteLoad::Pending)
    }

    /// The failure message, if the fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.load {
            SiteLoad::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Fetched sites; empty unless the fetch succeeded.
    #[must_use]
    pub fn fetched(&self) -> &[Site] {
        match &self.load {
            SiteLoad::Loaded(sites) => sites.as_slice(),
            _ => &[],
        }
    }

    /// The seed sites this view was created with.
    #[must_use]
    pub fn seed(&self) -> &[Site] {
        &self.seed
    }

    /// Summary over seed + fetched sites.
    #[must_use]
    pub fn summary(&self) -> SiteSummary {
        aggregate(&self.seed, self.fetched())
    }

    /// User-facing status line for the current state, if any.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match &self.load {
            SiteLoad::Pending => Some(LOADING_NOTICE.to_string()),
            SiteLoad::Failed(message) => Some(format!(
                "Showing AI-recommended sites only. Backend connection: {message}"
            )),
            SiteLoad::Loaded(_) => None,
        }
    }
}
