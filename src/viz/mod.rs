//! Visualization Adapter
//!
//! Turns a [`ClimateDataSeries`] into a chart-agnostic [`ChartSeries`]:
//! parallel label/value/color vectors plus the resolved chart kind. The
//! browser hands [`ChartSeries::chart_config`] to Chart.js; the terminal
//! front end draws the same series as text.

mod chartjs;

use crate::models::{ClimateDataSeries, VisualizationKind};

/// Fallback colors for points that carry none, picked by point index
pub const PALETTE: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#FFE66D", "#6A0572", "#1A535C", "#FF9F1C", "#2EC4B6", "#E71D36",
    "#011627", "#FDFFFC",
];

/// Palette color for the point at `index`
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One chart, ready for any renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    pub kind: VisualizationKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
    /// Fixed upper bound for the value axis
    pub y_max: Option<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builder method: pin the value axis to `0..=max`
    pub fn with_y_max(mut self, max: f64) -> Self {
        self.y_max = Some(max);
        self
    }

    /// Largest value, or 0 for an empty series
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Map a series onto parallel chart vectors
pub fn adapt(series: &ClimateDataSeries) -> ChartSeries {
    let points = &series.data_points;

    ChartSeries {
        title: series.title.clone(),
        kind: series.kind(),
        labels: points.iter().map(|p| p.label.clone()).collect(),
        values: points.iter().map(|p| p.value).collect(),
        colors: points
            .iter()
            .enumerate()
            .map(|(i, p)| match p.color.as_deref() {
                Some(color) if !color.trim().is_empty() => color.to_string(),
                _ => palette_color(i).to_string(),
            })
            .collect(),
        y_max: None,
    }
}

/// Adapt every series in order
pub fn adapt_all<'a>(series: impl IntoIterator<Item = &'a ClimateDataSeries>) -> Vec<ChartSeries> {
    series.into_iter().map(adapt).collect()
}
