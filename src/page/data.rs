//! Data page: every climate series, filterable by category

use std::fmt;

use async_trait::async_trait;
use futures_util::try_join;
use serde::Serialize;

use super::{ContentBlock, Page};
use crate::client::{Backend, ClientResult};
use crate::models::ClimateDataSeries;
use crate::viz::{adapt, ChartSeries};

#[derive(Debug, Clone, Copy, Default)]
pub struct DataPage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataView {
    pub series: Vec<ClimateDataSeries>,
    pub categories: Vec<String>,
}

#[async_trait(?Send)]
impl Page for DataPage {
    type View = DataView;
    const NAME: &'static str = "data";

    async fn fetch(&self, backend: &dyn Backend) -> ClientResult<DataView> {
        let (series, categories) = try_join!(
            backend.fetch_all_climate_data(),
            backend.fetch_climate_categories(),
        )?;

        Ok(DataView { series, categories })
    }
}

/// Category selection on the Data page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Selector value that means "no filter"
    pub const ALL: &'static str = "all";

    /// Parse a selector value; `"all"` maps to [`CategoryFilter::All`]
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, series: &ClimateDataSeries) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => series.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(value: Option<String>) -> Self {
        value.map_or(CategoryFilter::All, |v| CategoryFilter::parse(&v))
    }
}

impl DataView {
    /// Series passing `filter`, in fetched order
    pub fn filtered<'a>(
        &'a self,
        filter: &'a CategoryFilter,
    ) -> impl Iterator<Item = &'a ClimateDataSeries> + 'a {
        self.series.iter().filter(move |s| filter.matches(s))
    }

    /// One chart per visible series
    pub fn charts(&self, filter: &CategoryFilter) -> Vec<ChartSeries> {
        self.filtered(filter).map(adapt).collect()
    }
}

/// Button text for a category: first letter upper-cased
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub const EMPTY_TITLE: &str = "No data found";
pub const EMPTY_HINT: &str = "Try selecting a different category or check back later for more data.";

pub const KEY_INSIGHTS: [ContentBlock; 2] = [
    ContentBlock {
        heading: "The Paradox",
        body: "",
        points: &[
            "Kenya contributes less than 0.1% of global greenhouse gas emissions",
            "Yet it ranks among the most vulnerable countries to climate change",
            "This represents a fundamental climate injustice",
        ],
    },
    ContentBlock {
        heading: "The Solution",
        body: "",
        points: &[
            "Massive potential for renewable energy (geothermal, wind, solar)",
            "Climate-smart agriculture practices",
            "International climate finance and technology transfer",
            "Community-based adaptation strategies",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VisualizationKind;
    use crate::testing::StubBackend;

    fn co2_only() -> Vec<ClimateDataSeries> {
        let json = r#"[{
            "title": "CO2 per capita",
            "category": "emissions",
            "visualizationKind": "bar",
            "dataPoints": [
                {"label": "Kenya", "value": 0.4},
                {"label": "USA", "value": 14.7}
            ]
        }]"#;
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn test_all_filter_renders_one_chart_with_two_bars() {
        let backend = StubBackend::with_climate(co2_only());
        let view = DataPage.fetch(&backend).await.unwrap();

        let charts = view.charts(&CategoryFilter::parse("all"));
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].title, "CO2 per capita");
        assert_eq!(charts[0].kind, VisualizationKind::Bar);
        assert_eq!(charts[0].len(), 2);
        assert_eq!(view.categories, vec!["emissions"]);
    }

    #[tokio::test]
    async fn test_only_filter_keeps_exact_category_in_order() {
        let backend = StubBackend::seeded();
        let view = DataPage.fetch(&backend).await.unwrap();

        let only_emissions = CategoryFilter::Only("emissions".to_string());
        let emissions: Vec<&str> = view
            .filtered(&only_emissions)
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(emissions, vec!["CO2 per capita", "Sector emissions"]);

        assert_eq!(view.filtered(&CategoryFilter::All).count(), view.series.len());
        assert_eq!(
            view.filtered(&CategoryFilter::Only("Emissions".to_string())).count(),
            0
        );
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("rainfall"),
            CategoryFilter::Only("rainfall".to_string())
        );
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.to_string(), "all");
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("emissions"), "Emissions");
        assert_eq!(category_label(""), "");
    }
}
