//! Marker popup content.
//!
//! Popups are structured (title, badge, label/value rows, footer) and
//! left to the front-end to lay out.

use h2_sites_site_models::{SiteMarker, format::one_decimal};
use serde::Serialize;

use crate::recommend::{ILLUSTRATIVE_NOTICE, Recommendation};

/// Popup content bound to a marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Popup {
    /// Heading line.
    pub title: String,
    /// Short status badge next to the title.
    pub badge: Option<String>,
    /// Label/value rows.
    pub rows: Vec<(String, String)>,
    /// Trailing line (coordinates, disclaimers).
    pub footer: Option<String>,
}

impl Popup {
    /// A popup with just a title.
    #[must_use]
    pub fn text(title: &str) -> Self {
        Self {
            title: title.to_string(),
            badge: None,
            rows: Vec::new(),
            footer: None,
        }
    }

    /// Popup for a catalog site marker.
    #[must_use]
    pub fn for_site(marker: &SiteMarker) -> Self {
        Self {
            title: marker.name.clone(),
            badge: Some(marker.status.to_string()),
            rows: vec![
                ("Production".to_string(), marker.production.clone()),
                ("LCOH".to_string(), marker.lcoh.clone()),
                ("ROI".to_string(), marker.roi.clone()),
            ],
            footer: Some(marker.position.to_string()),
        }
    }

    /// Popup for an illustrative recommendation.
    #[must_use]
    pub fn for_recommendation(rec: &Recommendation) -> Self {
        Self {
            title: format!("{} AI Recommendation", rec.city),
            badge: Some("AI Generated".to_string()),
            rows: vec![
                ("Investment".to_string(), format!("₹{} Cr", rec.capital)),
                (
                    "Predicted LCOH".to_string(),
                    format!("{}/kg", one_decimal(rec.lcoh)),
                ),
                (
                    "Expected ROI".to_string(),
                    format!("{}%", one_decimal(rec.roi)),
                ),
                (
                    "Feasibility".to_string(),
                    format!("{}/100", one_decimal(rec.feasibility)),
                ),
            ],
            footer: Some(ILLUSTRATIVE_NOTICE.to_string()),
        }
    }
}

impl std::fmt::Display for Popup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)?;
        if let Some(badge) = &self.badge {
            write!(f, " [{badge}]")?;
        }
        for (label, value) in &self.rows {
            write!(f, "\n  {label}: {value}")?;
        }
        if let Some(footer) = &self.footer {
            write!(f, "\n  {footer}")?;
        }
        Ok(())
    }
}
