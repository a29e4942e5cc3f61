#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! `h2_sites`: terminal front-end for hydrogen site selection.
//!
//! `sites` prints the landing view (seed plus backend sites, with summary
//! statistics), `markers` lists the map catalog, `search` and `recommend`
//! run one map action each, and `map` opens an interactive map session.
//! Without a subcommand a menu picks one.
//!
//! Uses `indicatif-log-bridge` (via [`h2_sites_cli_utils::init_logger`])
//! so log lines and spinners never fight for the terminal.

mod interactive;
mod render;

use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use h2_sites_api::SitesApiClient;
use h2_sites_cli_utils::{MultiProgress, Spinner};
use h2_sites_geocoder::{NominatimClient, SearchSession};
use h2_sites_map::{MapStats, Popup, Recommender, TileStyle};
use h2_sites_site_models::{SiteMarker, catalog};
use h2_sites_summary::view::LOADING_NOTICE;
use h2_sites_summary::{SiteCard, SiteListView};

/// Hydrogen site selection from the terminal.
#[derive(Parser)]
#[command(name = "h2_sites")]
#[command(about = "Browse candidate green hydrogen sites")]
struct Cli {
    /// Subcommand to execute; omit for an interactive menu.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the landing site cards and summary statistics.
    Sites {
        /// Print the summary as JSON instead.
        #[arg(long)]
        json: bool,
    },

    /// List the map markers and header statistics.
    Markers {
        /// Print the markers as JSON instead.
        #[arg(long)]
        json: bool,
    },

    /// Search for places.
    Search {
        /// Free-text place query.
        query: String,
    },

    /// Generate an illustrative site recommendation.
    Recommend {
        /// Investment capital in crore rupees.
        #[arg(long)]
        capital: String,
    },

    /// Open an interactive map session.
    Map {
        /// Initial base-map style (street, satellite, dark).
        #[arg(long, default_value_t = TileStyle::Street)]
        style: TileStyle,
    },
}

/// Menu entries when no subcommand is given.
enum Tool {
    Sites,
    Markers,
    Search,
    Recommend,
    Map,
}

impl Tool {
    const ALL: &[Self] = &[
        Self::Sites,
        Self::Markers,
        Self::Search,
        Self::Recommend,
        Self::Map,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Sites => "Browse sites",
            Self::Markers => "List map markers",
            Self::Search => "Search places",
            Self::Recommend => "AI site recommendation",
            Self::Map => "Open map",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = h2_sites_cli_utils::init_logger();
    let cli = Cli::parse();

    let command = match cli.command {
        Some(command) => command,
        None => prompt_command()?,
    };

    match command {
        Commands::Sites { json } => sites(&multi, json).await,
        Commands::Markers { json } => markers(json),
        Commands::Search { query } => search(&multi, &query).await,
        Commands::Recommend { capital } => recommend(&multi, &capital).await,
        Commands::Map { style } => interactive::run(&multi, style).await,
    }
}

fn prompt_command() -> Result<Commands, Box<dyn std::error::Error>> {
    println!("Green Hydrogen Sites");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();
    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(match Tool::ALL[idx] {
        Tool::Sites => Commands::Sites { json: false },
        Tool::Markers => Commands::Markers { json: false },
        Tool::Search => Commands::Search {
            query: Input::new().with_prompt("Place").interact_text()?,
        },
        Tool::Recommend => Commands::Recommend {
            capital: Input::new()
                .with_prompt("Investment capital (₹ Cr)")
                .allow_empty(true)
                .interact_text()?,
        },
        Tool::Map => Commands::Map {
            style: TileStyle::default(),
        },
    })
}

async fn sites(multi: &MultiProgress, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = SiteListView::new(SitesApiClient::from_env()?);

    let spinner = Spinner::fetch(multi, LOADING_NOTICE);
    view.mount().await;
    let summary = view.summary();
    if view.error().is_some() {
        spinner.clear();
    } else {
        spinner.finish(&format!(
            "Loaded {} sites ({} from backend)",
            summary.total_count,
            view.fetched().len()
        ));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    render::summary(&summary);
    if let Some(notice) = view.notice() {
        render::notice(&notice);
    }
    for site in &summary.all_sites {
        render::card(&SiteCard::from(site));
    }
    Ok(())
}

fn markers(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let entries = catalog();
    let markers: Vec<SiteMarker> = entries.iter().map(SiteMarker::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&markers)?);
        return Ok(());
    }

    render::map_stats(&MapStats::from_catalog(&entries));
    for marker in &markers {
        render::marker(marker);
    }
    Ok(())
}

async fn search(multi: &MultiProgress, query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = NominatimClient::from_env()?;
    let mut session = SearchSession::new();

    let spinner = Spinner::fetch(multi, &format!("Searching {query:?}"));
    session.search(&client, query).await;
    spinner.clear();

    render::places(session.visible_results());
    Ok(())
}

async fn recommend(multi: &MultiProgress, capital: &str) -> Result<(), Box<dyn std::error::Error>> {
    let recommender = Recommender::new();

    let spinner = Spinner::work(multi, "Analyzing sites...");
    let outcome = recommender.generate(capital).await;
    spinner.clear();

    let recommendation = outcome?;
    render::popup(&Popup::for_recommendation(&recommendation));
    Ok(())
}
