//! Climate data series as served by `/climate-data`

use serde::{Deserialize, Serialize};

/// One named, categorized collection of labeled data points destined for one chart
///
/// Immutable once fetched; the Data page owns its copy for the lifetime of the view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClimateDataSeries {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
    pub category: String,
    /// Raw chart kind as sent by the backend. Resolved through [`VisualizationKind::resolve`].
    #[serde(
        default,
        rename = "visualizationType",
        alias = "visualizationKind",
        skip_serializing_if = "Option::is_none"
    )]
    pub visualization_kind: Option<String>,
    #[serde(default)]
    pub data_points: Vec<DataPoint>,
}

impl ClimateDataSeries {
    /// Create a series with no points
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        kind: VisualizationKind,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            source: String::new(),
            category: category.into(),
            visualization_kind: Some(kind.as_str().to_string()),
            data_points: Vec::new(),
        }
    }

    /// Builder method: set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method: set source attribution
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Builder method: append a point without a color
    pub fn point(mut self, label: impl Into<String>, value: f64) -> Self {
        self.data_points.push(DataPoint::new(label, value));
        self
    }

    /// Builder method: append a point with an explicit color
    pub fn colored_point(
        mut self,
        label: impl Into<String>,
        value: f64,
        color: impl Into<String>,
    ) -> Self {
        self.data_points
            .push(DataPoint::new(label, value).color(color));
        self
    }

    /// The rendering path this series takes
    pub fn kind(&self) -> VisualizationKind {
        VisualizationKind::resolve(self.visualization_kind.as_deref())
    }
}

/// A single labeled value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    /// Builder method: set color
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Chart type a series is drawn with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationKind {
    #[default]
    Bar,
    Line,
    Pie,
    Doughnut,
    Radar,
}

impl VisualizationKind {
    /// All kinds, in the order the backend documents them
    pub fn all() -> &'static [VisualizationKind] {
        &[
            VisualizationKind::Bar,
            VisualizationKind::Line,
            VisualizationKind::Pie,
            VisualizationKind::Doughnut,
            VisualizationKind::Radar,
        ]
    }

    /// Resolve a raw kind string. Unknown or missing kinds fall back to `Bar`.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("line") => VisualizationKind::Line,
            Some("pie") => VisualizationKind::Pie,
            Some("doughnut") => VisualizationKind::Doughnut,
            Some("radar") => VisualizationKind::Radar,
            _ => VisualizationKind::Bar,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VisualizationKind::Bar => "bar",
            VisualizationKind::Line => "line",
            VisualizationKind::Pie => "pie",
            VisualizationKind::Doughnut => "doughnut",
            VisualizationKind::Radar => "radar",
        }
    }

    /// Pie and doughnut charts have no value axis
    pub fn is_circular(&self) -> bool {
        matches!(self, VisualizationKind::Pie | VisualizationKind::Doughnut)
    }
}

impl std::fmt::Display for VisualizationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_kinds() {
        assert_eq!(VisualizationKind::resolve(Some("radar")), VisualizationKind::Radar);
        assert_eq!(VisualizationKind::resolve(Some("Line")), VisualizationKind::Line);
        assert_eq!(VisualizationKind::resolve(Some("doughnut")), VisualizationKind::Doughnut);
    }

    #[test]
    fn test_resolve_falls_back_to_bar() {
        assert_eq!(VisualizationKind::resolve(Some("scatter")), VisualizationKind::Bar);
        assert_eq!(VisualizationKind::resolve(Some("")), VisualizationKind::Bar);
        assert_eq!(VisualizationKind::resolve(None), VisualizationKind::Bar);
    }

    #[test]
    fn test_deserialize_accepts_both_kind_field_names() {
        let original = r#"{"title":"Rainfall","category":"weather","visualizationType":"line","dataPoints":[]}"#;
        let series: ClimateDataSeries = serde_json::from_str(original).unwrap();
        assert_eq!(series.kind(), VisualizationKind::Line);

        let aliased = r#"{"title":"Rainfall","category":"weather","visualizationKind":"pie","dataPoints":[]}"#;
        let series: ClimateDataSeries = serde_json::from_str(aliased).unwrap();
        assert_eq!(series.kind(), VisualizationKind::Pie);
    }

    #[test]
    fn test_deserialize_minimal_series() {
        let json = r#"{"title":"CO2","category":"emissions","dataPoints":[{"label":"Kenya","value":0.4}]}"#;
        let series: ClimateDataSeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.description, "");
        assert_eq!(series.kind(), VisualizationKind::Bar);
        assert_eq!(series.data_points[0].color, None);
    }
}
