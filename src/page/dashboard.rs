//! Dashboard: headline stats, featured charts and the county impact map

use async_trait::async_trait;
use futures_util::try_join;
use serde::Serialize;

use super::{format_count, Page, StatCard};
use crate::client::{Backend, ClientResult};
use crate::models::{ClimateDataSeries, PetitionStats, StoryStats, VisualizationKind};
use crate::viz::{adapt, ChartSeries};

#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardPage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub climate: Vec<ClimateDataSeries>,
    pub petition: PetitionStats,
    pub stories: StoryStats,
}

#[async_trait(?Send)]
impl Page for DashboardPage {
    type View = DashboardView;
    const NAME: &'static str = "dashboard";

    async fn fetch(&self, backend: &dyn Backend) -> ClientResult<DashboardView> {
        let (climate, petition, stories) = try_join!(
            backend.fetch_all_climate_data(),
            backend.fetch_petition_stats(),
            backend.fetch_story_stats(),
        )?;

        Ok(DashboardView {
            climate,
            petition,
            stories,
        })
    }
}

impl DashboardView {
    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new(
                format_count(self.petition.total_signatures),
                "Petition Signatures",
            ),
            StatCard::new(format_count(self.stories.total_stories), "Impact Stories"),
            StatCard::new("<0.1%", "Global Emissions"),
            StatCard::new("4.3M", "People Affected by Drought"),
        ]
    }

    /// The two fixed comparison charts shown above the map
    pub fn featured_charts(&self) -> Vec<ChartSeries> {
        featured_charts()
    }

    pub fn impact_sites(&self) -> &'static [ImpactSite] {
        IMPACT_SITES
    }
}

/// Emissions comparison and vulnerability profile
pub fn featured_charts() -> Vec<ChartSeries> {
    let emissions = ClimateDataSeries::new(
        "CO2 Emissions Per Capita (2022)",
        "emissions",
        VisualizationKind::Bar,
    )
    .source("Global Carbon Project")
    .colored_point("Kenya", 0.4, "#2E8B57")
    .colored_point("USA", 14.7, "#DC143C")
    .colored_point("China", 8.2, "#FFD700")
    .colored_point("Germany", 8.9, "#000080")
    .colored_point("South Africa", 6.9, "#FF8C00")
    .colored_point("Global Avg", 4.7, "#6A5ACD");

    let vulnerability =
        ClimateDataSeries::new("Vulnerability Score", "vulnerability", VisualizationKind::Line)
            .colored_point("Drought Risk", 8.2, "rgba(255, 107, 107, 1)")
            .colored_point("Flood Risk", 7.8, "rgba(255, 107, 107, 1)")
            .colored_point("Food Security", 7.5, "rgba(255, 107, 107, 1)")
            .colored_point("Water Stress", 8.0, "rgba(255, 107, 107, 1)")
            .colored_point("Health Impact", 6.9, "rgba(255, 107, 107, 1)");

    vec![adapt(&emissions), adapt(&vulnerability).with_y_max(10.0)]
}

/// How hard a county is hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
        }
    }
}

/// A map marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactSite {
    pub county: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub impact: &'static str,
    pub severity: Severity,
}

impl ImpactSite {
    pub fn popup(&self) -> String {
        format!(
            "<strong>{} County</strong><br>Impact: {}<br>Severity: {}",
            self.county,
            self.impact,
            self.severity.as_str()
        )
    }
}

/// Map center and zoom level that frame the marked counties
pub const MAP_CENTER: (f64, f64) = (0.5, 38.0);
pub const MAP_ZOOM: u8 = 6;

pub const IMPACT_SITES: &[ImpactSite] = &[
    ImpactSite {
        county: "Turkana",
        lat: 3.1167,
        lng: 35.6,
        impact: "Severe Drought",
        severity: Severity::High,
    },
    ImpactSite {
        county: "Marsabit",
        lat: 2.3333,
        lng: 37.9833,
        impact: "Drought & Conflict",
        severity: Severity::High,
    },
    ImpactSite {
        county: "Mandera",
        lat: 3.9366,
        lng: 41.867,
        impact: "Food Insecurity",
        severity: Severity::High,
    },
    ImpactSite {
        county: "Wajir",
        lat: 1.75,
        lng: 40.05,
        impact: "Water Scarcity",
        severity: Severity::High,
    },
    ImpactSite {
        county: "Garissa",
        lat: -0.4569,
        lng: 39.6589,
        impact: "Flood Risk",
        severity: Severity::Medium,
    },
    ImpactSite {
        county: "Tana River",
        lat: -1.5,
        lng: 40.0,
        impact: "Flooding",
        severity: Severity::Medium,
    },
    ImpactSite {
        county: "Kitui",
        lat: -1.3667,
        lng: 38.0167,
        impact: "Desertification",
        severity: Severity::Medium,
    },
];
