//! Illustrative site recommendation generator.
//!
//! This is **not** a predictive model. After a fixed simulated delay it
//! picks one of a fixed set of cities uniformly at random and draws LCOH,
//! ROI, and feasibility figures uniformly from plausible ranges. Every
//! surface showing a [`Recommendation`] must carry [`ILLUSTRATIVE_NOTICE`].
//!
//! Only one generation may be in flight per [`Recommender`]; a concurrent
//! call is rejected with [`RecommendError::AlreadyGenerating`].

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use h2_sites_site_models::LatLng;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;

/// Disclaimer attached to every generated recommendation.
pub const ILLUSTRATIVE_NOTICE: &str = "Illustrative estimate, not a predictive model";

/// Default simulated generation delay.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// LCOH range in currency/kg.
pub const LCOH_RANGE: Range<f64> = 2.5..4.5;
/// ROI range in percent.
pub const ROI_RANGE: Range<f64> = 12.0..22.0;
/// Feasibility score range.
pub const FEASIBILITY_RANGE: Range<f64> = 75.0..95.0;

/// A candidate city for recommendations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// City name.
    pub name: &'static str,
    /// City center.
    pub position: LatLng,
}

/// Cities a recommendation can land on.
pub const CITIES: &[City] = &[
    City {
        name: "Mumbai",
        position: LatLng::new(19.076, 72.8777),
    },
    City {
        name: "Delhi",
        position: LatLng::new(28.7041, 77.1025),
    },
    City {
        name: "Bangalore",
        position: LatLng::new(12.9716, 77.5946),
    },
    City {
        name: "Chennai",
        position: LatLng::new(13.0827, 80.2707),
    },
    City {
        name: "Hyderabad",
        position: LatLng::new(17.385, 78.4867),
    },
    City {
        name: "Pune",
        position: LatLng::new(18.5204, 73.8567),
    },
    City {
        name: "Kolkata",
        position: LatLng::new(22.5726, 88.3639),
    },
    City {
        name: "Ahmedabad",
        position: LatLng::new(23.0225, 72.5714),
    },
];

/// Errors from [`Recommender::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// The capital amount was blank.
    #[error("Please enter a capital amount")]
    MissingCapital,

    /// Another generation is still running.
    #[error("A recommendation is already being generated")]
    AlreadyGenerating,
}

/// Generator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendState {
    /// Ready to generate.
    Idle,
    /// A generation is in flight.
    Generating,
}

/// One illustrative recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Chosen city.
    pub city: String,
    /// City position.
    pub position: LatLng,
    /// Capital amount as entered (crore rupees).
    pub capital: String,
    /// LCOH, currency/kg.
    pub lcoh: f64,
    /// ROI, percent.
    pub roi: f64,
    /// Feasibility score.
    pub feasibility: f64,
    /// When this was generated.
    pub generated_at: DateTime<Utc>,
    /// Always [`ILLUSTRATIVE_NOTICE`].
    pub notice: &'static str,
}

/// Releases the in-flight flag on drop, including when the generating
/// future is cancelled.
struct GeneratingGuard<'a>(&'a AtomicBool);

impl<'a> GeneratingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for GeneratingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// The recommendation generator.
#[derive(Debug)]
pub struct Recommender {
    delay: Duration,
    rng: Mutex<StdRng>,
    generating: AtomicBool,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

impl Recommender {
    /// Creates a generator seeded from the OS with the default delay.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a reproducible generator.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            delay: DEFAULT_DELAY,
            rng: Mutex::new(rng),
            generating: AtomicBool::new(false),
        }
    }

    /// Overrides the simulated delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> RecommendState {
        if self.generating.load(Ordering::Acquire) {
            RecommendState::Generating
        } else {
            RecommendState::Idle
        }
    }

    /// Generates a recommendation for `capital`.
    ///
    /// # Errors
    ///
    /// * [`RecommendError::MissingCapital`] if `capital` is blank; checked
    ///   before anything else, nothing changes.
    /// * [`RecommendError::AlreadyGenerating`] if another call is in flight.
    pub async fn generate(&self, capital: &str) -> Result<Recommendation, RecommendError> {
        let capital = capital.trim();
        if capital.is_empty() {
            return Err(RecommendError::MissingCapital);
        }

        let _guard =
            GeneratingGuard::acquire(&self.generating).ok_or(RecommendError::AlreadyGenerating)?;

        log::debug!("Generating recommendation for capital {capital}");
        tokio::time::sleep(self.delay).await;

        let recommendation = self.draw(capital);
        log::info!(
            "Generated illustrative recommendation at {}",
            recommendation.city
        );
        Ok(recommendation)
    }

    fn draw(&self, capital: &str) -> Recommendation {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let city = CITIES[rng.random_range(0..CITIES.len())];

        Recommendation {
            city: city.name.to_string(),
            position: city.position,
            capital: capital.to_string(),
            lcoh: rng.random_range(LCOH_RANGE),
            roi: rng.random_range(ROI_RANGE),
            feasibility: rng.random_range(FEASIBILITY_RANGE),
            generated_at: Utc::now(),
            notice: ILLUSTRATIVE_NOTICE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn blank_capital_is_rejected() {
        let recommender = Recommender::with_seed(7);
        assert_eq!(
            recommender.generate("   ").await,
            Err(RecommendError::MissingCapital)
        );
        assert_eq!(recommender.state(), RecommendState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn values_stay_in_range() {
        let recommender = Recommender::with_seed(42).with_delay(Duration::ZERO);
        for _ in 0..200 {
            let rec = recommender.generate("50").await.unwrap();
            assert!(LCOH_RANGE.contains(&rec.lcoh), "lcoh {}", rec.lcoh);
            assert!(ROI_RANGE.contains(&rec.roi), "roi {}", rec.roi);
            assert!(
                FEASIBILITY_RANGE.contains(&rec.feasibility),
                "feasibility {}",
                rec.feasibility
            );
            assert!(CITIES.iter().any(|c| c.name == rec.city));
            assert_eq!(rec.notice, ILLUSTRATIVE_NOTICE);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_call_is_rejected() {
        let recommender = Recommender::with_seed(1);
        let (first, second) = tokio::join!(recommender.generate("10"), async {
            tokio::task::yield_now().await;
            assert_eq!(recommender.state(), RecommendState::Generating);
            recommender.generate("20").await
        });

        assert_eq!(first.unwrap().capital, "10");
        assert_eq!(second, Err(RecommendError::AlreadyGenerating));
        assert_eq!(recommender.state(), RecommendState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_the_simulated_delay() {
        let recommender = Recommender::with_seed(3);
        let start = tokio::time::Instant::now();
        recommender.generate("5").await.unwrap();
        assert!(start.elapsed() >= DEFAULT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_generation_releases_guard() {
        let recommender = Recommender::with_seed(9);
        let timed_out =
            tokio::time::timeout(Duration::from_millis(10), recommender.generate("5")).await;
        assert!(timed_out.is_err());
        assert_eq!(recommender.state(), RecommendState::Idle);
        assert!(recommender.generate("5").await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn capital_is_trimmed() {
        let recommender = Recommender::with_seed(5).with_delay(Duration::ZERO);
        let rec = recommender.generate("  120 ").await.unwrap();
        assert_eq!(rec.capital, "120");
    }
}
