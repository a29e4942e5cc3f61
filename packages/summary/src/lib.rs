#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Site aggregation and summary statistics for the landing view.
//!
//! [`aggregate`] merges the seed sites with the fetched ones (seed first,
//! no de-duplication) and derives the header statistics. The landing
//! view's one-shot fetch lifecycle lives in [`view`], and the per-site card
//! projection in [`card`].

pub mod card;
pub mod view;

use h2_sites_site_models::{Site, format::one_decimal};
use serde::Serialize;

pub use card::SiteCard;
pub use view::{SiteListView, SiteLoad};

/// Merged site list plus derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSummary {
    /// Seed sites followed by fetched sites, in insertion order.
    pub all_sites: Vec<Site>,
    /// `all_sites.len()`.
    pub total_count: usize,
    /// Mean hydrogen production in kg/day, rounded; 0 when empty.
    pub avg_production: i64,
    /// Mean system efficiency in percent, rounded; 0 when empty.
    pub avg_efficiency: i64,
    /// Mean feasibility score to one decimal place; `"0"` when empty.
    pub avg_feasibility: String,
}

/// Merges seed and fetched sites and computes the summary statistics.
#[must_use]
pub fn aggregate(seed: &[Site], fetched: &[Site]) -> SiteSummary {
    let all_sites: Vec<Site> = seed.iter().chain(fetched).cloned().collect();

    let avg_production = mean(&all_sites, |s| s.hydrogen_production).map_or(0, round_half_up);
    let avg_efficiency = mean(&all_sites, |s| s.system_efficiency).map_or(0, round_half_up);
    let avg_feasibility =
        mean(&all_sites, |s| s.feasibility_score).map_or_else(|| "0".to_string(), one_decimal);

    SiteSummary {
        total_count: all_sites.len(),
        all_sites,
        avg_production,
        avg_efficiency,
        avg_feasibility,
    }
}

/// Arithmetic mean of one field, `None` for an empty slice.
#[allow(clippy::cast_precision_loss)]
fn mean(sites: &[Site], field: impl Fn(&Site) -> f64) -> Option<f64> {
    if sites.is_empty() {
        return None;
    }
    let sum: f64 = sites.iter().map(field).sum();
    Some(sum / sites.len() as f64)
}

/// Rounds to the nearest integer with halves going toward +infinity.
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

#[cfg(test)]
pub(crate) mod test_sites {
    use h2_sites_site_models::Site;

    pub fn site(city: &str, production: f64, efficiency: f64, score: f64) -> Site {
        Site {
            city: city.to_string(),
            latitude: 22.0,
            longitude: 71.0,
            solar_irradiance: 5.5,
            temperature_c: 28.0,
            wind_speed: 7.0,
            pv_power_kw: 2500.0,
            wind_power_kw: 1800.0,
            electrolyzer_efficiency: 78.0,
            hydrogen_production: production,
            desalination_power_kw: 320.0,
            system_efficiency: efficiency,
            feasibility_score: score,
            lcoh: 3.5,
            roi: 15.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_sites::site;
    use h2_sites_site_models::seed_sites;

    #[test]
    fn seed_only_example() {
        let seed = vec![
            site("Bhuj", 485.0, 75.0, 96.5),
            site("Rajkot", 450.0, 72.0, 94.2),
        ];
        let summary = aggregate(&seed, &[]);
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.avg_production, 468);
        assert_eq!(summary.avg_efficiency, 74);
        assert_eq!(summary.avg_feasibility, "95.3");
    }

    #[test]
    fn builtin_seed_matches_example() {
        let summary = aggregate(&seed_sites(), &[]);
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.avg_production, 468);
        assert_eq!(summary.avg_efficiency, 74);
        assert_eq!(summary.avg_feasibility, "95.3");
    }

    #[test]
    fn empty_fetch_keeps_seed_exactly() {
        let seed = seed_sites();
        let summary = aggregate(&seed, &[]);
        assert_eq!(summary.all_sites, seed);
    }

    #[test]
    fn seed_precedes_fetched_and_duplicates_are_kept() {
        let seed = vec![site("Bhuj", 485.0, 75.0, 96.5)];
        let fetched = vec![
            site("Kandla", 400.0, 70.0, 82.0),
            site("Bhuj", 480.0, 74.0, 95.0),
        ];
        let summary = aggregate(&seed, &fetched);
        let cities: Vec<&str> = summary.all_sites.iter().map(|s| s.city.as_str()).collect();
        assert_eq!(cities, ["Bhuj", "Kandla", "Bhuj"]);
        assert_eq!(summary.total_count, 3);
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let summary = aggregate(&[], &[]);
        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.avg_production, 0);
        assert_eq!(summary.avg_efficiency, 0);
        assert_eq!(summary.avg_feasibility, "0");
    }

    #[test]
    fn production_average_is_rounded_mean() {
        let lists = [
            vec![site("a", 100.0, 50.0, 50.0)],
            vec![site("a", 100.0, 50.0, 50.0), site("b", 101.0, 50.0, 50.0)],
            vec![
                site("a", 10.0, 50.0, 50.0),
                site("b", 10.0, 50.0, 50.0),
                site("c", 11.0, 50.0, 50.0),
            ],
            vec![site("a", 0.0, 0.0, 0.0), site("b", 0.4, 0.0, 0.0)],
        ];
        let expected = [100, 101, 10, 0];
        for (sites, want) in lists.iter().zip(expected) {
            let summary = aggregate(sites, &[]);
            assert_eq!(summary.avg_production, want);
            assert!(summary.avg_production >= 0);
        }
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_half_up(467.5), 468);
        assert_eq!(round_half_up(73.5), 74);
        assert_eq!(round_half_up(73.49), 73);
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0);
        assert_eq!(round_half_up(-2.5), -2);
    }

    #[test]
    fn feasibility_average_formats_one_decimal() {
        let sites = vec![site("a", 1.0, 1.0, 95.0), site("b", 1.0, 1.0, 95.5)];
        assert_eq!(aggregate(&sites, &[]).avg_feasibility, "95.3");

        let sites = vec![site("a", 1.0, 1.0, 80.0)];
        assert_eq!(aggregate(&sites, &[]).avg_feasibility, "80.0");
    }
}
