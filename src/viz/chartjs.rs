//! Chart.js configuration objects

use serde_json::{json, Value};

use super::ChartSeries;

impl ChartSeries {
    /// Chart.js `new Chart(ctx, config)` argument for this series
    pub fn chart_config(&self) -> Value {
        let mut options = json!({
            "responsive": true,
            "plugins": {
                "legend": { "position": "top" },
                "title": { "display": true, "text": self.title },
            },
        });

        if let Some(max) = self.y_max {
            options["scales"] = json!({ "y": { "beginAtZero": true, "max": max } });
        }

        json!({
            "type": self.kind.as_str(),
            "data": {
                "labels": self.labels,
                "datasets": [{
                    "label": self.title,
                    "data": self.values,
                    "backgroundColor": self.colors,
                    "borderColor": self.colors,
                    "borderWidth": 2,
                }],
            },
            "options": options,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{ClimateDataSeries, VisualizationKind};
    use crate::viz::adapt;

    #[test]
    fn test_chart_config_shape() {
        let series = ClimateDataSeries::new("Rainfall", "rainfall", VisualizationKind::Doughnut)
            .point("MAM", 120.0)
            .point("OND", 80.0);
        let config = adapt(&series).chart_config();

        assert_eq!(config["type"], "doughnut");
        assert_eq!(config["data"]["labels"][1], "OND");
        assert_eq!(config["data"]["datasets"][0]["label"], "Rainfall");
        assert_eq!(config["data"]["datasets"][0]["borderWidth"], 2);
        assert_eq!(config["options"]["plugins"]["legend"]["position"], "top");
        assert_eq!(config["options"]["plugins"]["title"]["text"], "Rainfall");
        assert!(config["options"].get("scales").is_none());
    }

    #[test]
    fn test_y_max_adds_scale() {
        let series = ClimateDataSeries::new("Vulnerability", "risk", VisualizationKind::Line)
            .point("Drought Risk", 8.2);
        let config = adapt(&series).with_y_max(10.0).chart_config();
        assert_eq!(config["options"]["scales"]["y"]["max"], 10.0);
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
    }
}
