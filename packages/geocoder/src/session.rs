//! Search box state with request sequencing.
//!
//! Every keystroke calls [`SearchSession::begin`], which bumps the sequence
//! number and hands back a [`SearchTicket`]. Only the completion carrying
//! the latest ticket is applied; anything older is dropped. An empty query
//! returns straight to [`SearchState::Idle`] with the results cleared.

use crate::{GeocodeError, Place, PlaceSearch};

/// Search box state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Nothing in flight, no results shown.
    Idle,
    /// A request for the current query is in flight.
    Searching,
    /// Results for the current query are shown.
    ResultsShown,
}

/// Identifies one search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    /// The query this ticket was issued for.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// State of the place search box.
#[derive(Debug)]
pub struct SearchSession {
    query: String,
    state: SearchState,
    results: Vec<Place>,
    latest: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: String::new(),
            state: SearchState::Idle,
            results: Vec::new(),
            latest: 0,
        }
    }

    /// Records a new query. Returns a ticket to search with, or `None` when
    /// the query is blank (the session goes idle and clears its results).
    pub fn begin(&mut self, query: &str) -> Option<SearchTicket> {
        self.query = query.to_string();
        self.latest += 1;

        if query.trim().is_empty() {
            self.results.clear();
            self.state = SearchState::Idle;
            return None;
        }

        self.state = SearchState::Searching;
        Some(SearchTicket {
            seq: self.latest,
            query: query.to_string(),
        })
    }

    /// Applies the outcome of a search. Returns `false` (and changes
    /// nothing) if a newer request has been issued since `ticket`.
    ///
    /// A failed search empties the results and returns to idle.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<Place>, GeocodeError>,
    ) -> bool {
        if ticket.seq != self.latest {
            log::debug!(
                "Dropping stale search response for {:?} (seq {} < {})",
                ticket.query,
                ticket.seq,
                self.latest
            );
            return false;
        }

        match outcome {
            Ok(places) => {
                self.results = places;
                self.state = SearchState::ResultsShown;
            }
            Err(e) => {
                log::error!("Search error: {e}");
                self.results.clear();
                self.state = SearchState::Idle;
            }
        }
        true
    }

    /// Runs one search to completion through `searcher`.
    pub async fn search<P: PlaceSearch + ?Sized>(&mut self, searcher: &P, query: &str) {
        let Some(ticket) = self.begin(query) else {
            return;
        };
        let outcome = searcher.search(ticket.query()).await;
        self.complete(&ticket, outcome);
    }

    /// Picks a shown result. Hides the list, clears the query, and
    /// invalidates any request still in flight.
    pub fn select(&mut self, index: usize) -> Option<Place> {
        if self.state != SearchState::ResultsShown {
            return None;
        }
        let place = self.results.get(index).cloned()?;
        self.query.clear();
        self.state = SearchState::Idle;
        self.latest += 1;
        Some(place)
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SearchState {
        self.state
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results visible to the user (empty unless results are shown).
    #[must_use]
    pub fn visible_results(&self) -> &[Place] {
        if self.state == SearchState::ResultsShown {
            self.results.as_slice()
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use h2_sites_site_models::LatLng;

    use super::*;

    fn place(id: u64, name: &str) -> Place {
        Place {
            id,
            name: name.to_string(),
            position: LatLng::new(23.0, 72.0),
            kind: "city".to_string(),
        }
    }

    struct FakeSearch;

    #[async_trait]
    impl PlaceSearch for FakeSearch {
        async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
            if query == "fail" {
                return Err(GeocodeError::RateLimited);
            }
            Ok(vec![place(1, &format!("{query}, Gujarat, India"))])
        }
    }

    #[tokio::test]
    async fn search_shows_results() {
        let mut session = SearchSession::new();
        session.search(&FakeSearch, "Bhuj").await;
        assert_eq!(session.state(), SearchState::ResultsShown);
        assert_eq!(session.visible_results().len(), 1);
        assert_eq!(session.visible_results()[0].short_name(), "Bhuj");
    }

    #[tokio::test]
    async fn blank_query_goes_idle_and_clears() {
        let mut session = SearchSession::new();
        session.search(&FakeSearch, "Bhuj").await;
        session.search(&FakeSearch, "   ").await;
        assert_eq!(session.state(), SearchState::Idle);
        assert!(session.visible_results().is_empty());
    }

    #[tokio::test]
    async fn failure_empties_results() {
        let mut session = SearchSession::new();
        session.search(&FakeSearch, "Bhuj").await;
        session.search(&FakeSearch, "fail").await;
        assert_eq!(session.state(), SearchState::Idle);
        assert!(session.visible_results().is_empty());
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut session = SearchSession::new();
        let first = session.begin("Bh").unwrap();
        let second = session.begin("Bhuj").unwrap();

        assert!(session.complete(&second, Ok(vec![place(2, "Bhuj, India")])));
        assert!(!session.complete(&first, Ok(vec![place(1, "Bharuch, India")])));

        assert_eq!(session.visible_results()[0].id, 2);
    }

    #[test]
    fn stale_response_cannot_revive_cleared_box() {
        let mut session = SearchSession::new();
        let ticket = session.begin("Raj").unwrap();
        assert!(session.begin("").is_none());
        assert!(!session.complete(&ticket, Ok(vec![place(1, "Rajkot, India")])));
        assert_eq!(session.state(), SearchState::Idle);
    }

    #[test]
    fn select_hides_list_and_clears_query() {
        let mut session = SearchSession::new();
        let ticket = session.begin("Rajkot").unwrap();
        session.complete(&ticket, Ok(vec![place(7, "Rajkot, Gujarat, India")]));

        let picked = session.select(0).unwrap();
        assert_eq!(picked.id, 7);
        assert_eq!(session.query(), "");
        assert_eq!(session.state(), SearchState::Idle);
        assert!(session.visible_results().is_empty());
        assert!(session.select(0).is_none());
    }
}
