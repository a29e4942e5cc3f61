//! Interactive map session.
//!
//! Drives a [`MapPresenter`] over a [`HeadlessMap`] from a `dialoguer`
//! menu. Every action fails locally: a failed search, locate, or
//! recommendation prints its message and the loop continues.

use std::time::Instant;

use dialoguer::{Input, Select};
use h2_sites_cli_utils::{MultiProgress, Spinner};
use h2_sites_geocoder::NominatimClient;
use h2_sites_map::{EnvGeolocator, HeadlessMap, MapPresenter, Recommender, TileStyle};

use crate::render;

/// Actions offered in the map menu.
enum MapAction {
    Search,
    SwitchStyle,
    Locate,
    Recommend,
    Show,
    Quit,
}

impl MapAction {
    const ALL: &[Self] = &[
        Self::Search,
        Self::SwitchStyle,
        Self::Locate,
        Self::Recommend,
        Self::Show,
        Self::Quit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Search => "Search places",
            Self::SwitchStyle => "Switch map style",
            Self::Locate => "Locate me",
            Self::Recommend => "AI site recommendation",
            Self::Show => "Show map",
            Self::Quit => "Quit",
        }
    }
}

/// Runs the map menu until the user quits.
///
/// # Errors
///
/// Returns an error if the geocoding client cannot be built or a prompt
/// fails.
#[allow(clippy::future_not_send)]
pub async fn run(multi: &MultiProgress, style: TileStyle) -> Result<(), Box<dyn std::error::Error>> {
    let mut presenter = MapPresenter::new(
        HeadlessMap::new(),
        Box::new(NominatimClient::from_env()?),
        Box::new(EnvGeolocator),
        Recommender::new(),
    );
    log::debug!("Opening map session with {style} tiles");
    if style != TileStyle::default() {
        presenter.switch_style(style);
    }
    render::map_state(&presenter);

    let labels: Vec<&str> = MapAction::ALL.iter().map(MapAction::label).collect();

    loop {
        presenter.tick(Instant::now());

        let idx = Select::new()
            .with_prompt("Map")
            .items(&labels)
            .default(0)
            .interact()?;

        match MapAction::ALL[idx] {
            MapAction::Search => search(multi, &mut presenter).await?,
            MapAction::SwitchStyle => {
                let styles: Vec<&str> = TileStyle::all().iter().map(|s| s.label()).collect();
                let current = TileStyle::all()
                    .iter()
                    .position(|s| *s == presenter.session().style())
                    .unwrap_or(0);
                let picked = Select::new()
                    .with_prompt("Map style")
                    .items(&styles)
                    .default(current)
                    .interact()?;
                presenter.switch_style(TileStyle::all()[picked]);
            }
            MapAction::Locate => {
                if let Ok(position) = presenter.locate().await {
                    println!("Your Location: {position}");
                }
            }
            MapAction::Recommend => recommend(multi, &mut presenter).await?,
            MapAction::Show => {}
            MapAction::Quit => return Ok(()),
        }

        render::map_state(&presenter);
    }
}

#[allow(clippy::future_not_send)]
async fn search(
    multi: &MultiProgress,
    presenter: &mut MapPresenter<HeadlessMap>,
) -> Result<(), Box<dyn std::error::Error>> {
    let query: String = Input::new()
        .with_prompt("Search places")
        .allow_empty(true)
        .interact_text()?;

    let spinner = Spinner::fetch(multi, &format!("Searching {query:?}"));
    let results = presenter.search(&query).await.to_vec();
    spinner.clear();

    render::places(&results);
    if results.is_empty() {
        return Ok(());
    }

    let mut items: Vec<String> = results.iter().map(|p| p.name.clone()).collect();
    items.push("Cancel".to_string());
    let picked = Select::new()
        .with_prompt("Go to")
        .items(&items)
        .default(0)
        .interact()?;

    if picked < results.len() {
        presenter.select_result(picked, Instant::now());
    }
    Ok(())
}

#[allow(clippy::future_not_send)]
async fn recommend(
    multi: &MultiProgress,
    presenter: &mut MapPresenter<HeadlessMap>,
) -> Result<(), Box<dyn std::error::Error>> {
    let capital: String = Input::new()
        .with_prompt("Investment capital (₹ Cr)")
        .allow_empty(true)
        .interact_text()?;
    presenter.set_capital(&capital);

    if !presenter.can_generate() {
        println!("Please enter a capital amount");
        return Ok(());
    }

    let spinner = Spinner::work(multi, "Analyzing sites...");
    let outcome = presenter.recommend().await;
    spinner.clear();

    if let Ok(recommendation) = outcome {
        render::popup(&h2_sites_map::Popup::for_recommendation(&recommendation));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn menu_labels_are_distinct() {
        let labels: BTreeSet<&str> = MapAction::ALL.iter().map(MapAction::label).collect();
        assert_eq!(labels.len(), MapAction::ALL.len());
        assert!(labels.iter().all(|label| !label.is_empty()));
    }

    #[test]
    fn quit_is_last() {
        assert!(matches!(MapAction::ALL.last(), Some(MapAction::Quit)));
    }
}
