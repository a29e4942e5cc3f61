//! Styled terminal output for sites, markers, places, and map state.

use console::{Color, StyledObject, style};
use h2_sites_geocoder::Place;
use h2_sites_map::{Layer, MapPresenter, MapStats, MapWidget, Popup};
use h2_sites_site_models::{FeasibilityCategory, SiteMarker, SiteStatus};
use h2_sites_summary::{SiteCard, SiteSummary};

const fn category_color(category: FeasibilityCategory) -> Color {
    match category {
        FeasibilityCategory::Excellent => Color::Green,
        FeasibilityCategory::Good => Color::Blue,
        FeasibilityCategory::Fair => Color::Yellow,
        FeasibilityCategory::Poor => Color::Red,
    }
}

/// Applies the category color; the badge and the score text share it.
fn category_style<D>(category: FeasibilityCategory, value: D) -> StyledObject<D> {
    style(value).fg(category_color(category))
}

/// Prints the landing statistics line.
pub fn summary(summary: &SiteSummary) {
    println!(
        "{}  {} sites   {} kg/day avg production   {}% avg efficiency   {} avg feasibility",
        style("Hydrogen Sites").bold(),
        style(summary.total_count).bold(),
        style(summary.avg_production).bold(),
        style(summary.avg_efficiency).bold(),
        style(&summary.avg_feasibility).bold(),
    );
}

/// Prints one landing card.
pub fn card(card: &SiteCard) {
    println!();
    println!(
        "{} {}  {}",
        style(&card.city).bold(),
        category_style(card.category, format!("[{}]", card.category)),
        category_style(card.category, &card.score).bold(),
    );
    println!("  {}", style(&card.coordinates).dim());
    println!(
        "  LCOH {}   ROI {}   Production {}",
        card.lcoh, card.roi, card.production
    );
    println!(
        "  Electrolyzer {}   System {}",
        card.electrolyzer_efficiency, card.system_efficiency
    );
    println!(
        "  Solar {}   Temp {}   Wind {}",
        card.solar_irradiance, card.temperature, card.wind_speed
    );
    println!(
        "  PV {}   Wind power {}   Desalination {}",
        card.pv_power, card.wind_power, card.desalination_power
    );
}

/// Prints a notice line (loading or degraded backend).
pub fn notice(message: &str) {
    println!("{}", style(message).yellow());
}

/// Prints the map header statistics.
pub fn map_stats(stats: &MapStats) {
    println!(
        "{} sites   {} total   {} avg ROI",
        style(stats.site_count).bold(),
        style(&stats.total_production).bold(),
        style(&stats.average_roi).bold(),
    );
}

/// Prints one catalog marker.
pub fn marker(marker: &SiteMarker) {
    let status = match marker.status {
        SiteStatus::AiRecommended => style(marker.status.to_string()).green(),
        SiteStatus::UnderAnalysis => style(marker.status.to_string()).yellow(),
    };
    println!(
        "{:>2}. {} [{}]  {}  {}  {}  {}",
        marker.id,
        style(&marker.name).bold(),
        status,
        marker.production,
        marker.lcoh,
        marker.roi,
        style(marker.position).dim(),
    );
}

/// Prints search results as a numbered list.
pub fn places(places: &[Place]) {
    if places.is_empty() {
        println!("{}", style("No places found.").dim());
        return;
    }
    for (i, place) in places.iter().enumerate() {
        println!(
            "{:>2}. {}  {}  {}",
            i + 1,
            style(place.short_name()).bold(),
            style(&place.name).dim(),
            style(place.position).dim(),
        );
    }
}

/// Prints a popup block.
pub fn popup(popup: &Popup) {
    println!("{}", style(popup).cyan());
}

/// Prints the current map state: view, style, and every layer.
pub fn map_state<W: MapWidget>(presenter: &MapPresenter<W>) {
    let session = presenter.session();
    let view = session.view();
    println!();
    println!(
        "{} {} at zoom {}   style: {}",
        style("Map").bold(),
        view.center,
        view.zoom,
        session.style().label(),
    );
    map_stats(presenter.stats());

    for (id, layer) in session.widget().layers() {
        match layer {
            Layer::Tile(tiles) => {
                println!("  #{} tiles  {}", id.0, style(&tiles.attribution).dim());
            }
            Layer::Marker(marker) => {
                let title = marker.popup.as_ref().map_or("", |p| p.title.as_str());
                println!(
                    "  #{} {:?}  {}  {}",
                    id.0,
                    marker.kind,
                    marker.position,
                    style(title).dim()
                );
            }
        }
    }

    if let Some(message) = presenter.message() {
        println!("{}", style(message).red());
    }
}
