//! Chart.js radar configuration for a list entry.
//!
//! Every entry gets an identical configuration apart from the data points.
//! The struct serialises directly to the object Chart.js expects.

use mga_api_models::Metric;
use serde::Serialize;

const FILL: &str = "rgba(54, 162, 235, 0.2)";
const STROKE: &str = "rgb(54, 162, 235)";
const POINT_BORDER: &str = "#fff";

/// Top-level chart configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarChartConfig {
    #[serde(rename = "type")]
    kind: &'static str,
    data: ChartData,
    options: ChartOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct ChartData {
    labels: Vec<&'static str>,
    datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dataset {
    label: &'static str,
    data: Vec<u8>,
    fill: bool,
    background_color: &'static str,
    border_color: &'static str,
    point_background_color: &'static str,
    point_border_color: &'static str,
    point_hover_background_color: &'static str,
    point_hover_border_color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartOptions {
    elements: Elements,
    scales: Scales,
    plugins: Plugins,
    maintain_aspect_ratio: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Elements {
    line: Line,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Line {
    border_width: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Scales {
    r: RadialScale,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct RadialScale {
    angle_lines: Toggle,
    suggested_min: u8,
    suggested_max: u8,
    ticks: Ticks,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Ticks {
    display: bool,
    step_size: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Toggle {
    display: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Plugins {
    legend: Toggle,
    tooltip: Enabled,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Enabled {
    enabled: bool,
}

impl RadarChartConfig {
    /// Radar of the five metric indices in axis order.
    #[must_use]
    pub fn for_metrics(metrics: [u8; 5]) -> Self {
        Self {
            kind: "radar",
            data: ChartData {
                labels: Metric::ALL.iter().map(|metric| metric.label()).collect(),
                datasets: vec![Dataset {
                    label: "Game Metrics",
                    data: metrics.to_vec(),
                    fill: true,
                    background_color: FILL,
                    border_color: STROKE,
                    point_background_color: STROKE,
                    point_border_color: POINT_BORDER,
                    point_hover_background_color: POINT_BORDER,
                    point_hover_border_color: STROKE,
                }],
            },
            options: ChartOptions {
                elements: Elements {
                    line: Line { border_width: 1 },
                },
                scales: Scales {
                    r: RadialScale {
                        angle_lines: Toggle { display: true },
                        suggested_min: 0,
                        suggested_max: 10,
                        ticks: Ticks {
                            display: false,
                            step_size: 2,
                        },
                    },
                },
                plugins: Plugins {
                    legend: Toggle { display: false },
                    tooltip: Enabled { enabled: true },
                },
                maintain_aspect_ratio: false,
            },
        }
    }

    /// Serialise to the JSON handed to the `Chart` constructor.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn config_uses_fixed_axes_and_scale() {
        let value: Value =
            serde_json::to_value(RadarChartConfig::for_metrics([4, 2, 9, 6, 8])).expect("json");
        assert_eq!(value["type"], "radar");
        assert_eq!(
            value["data"]["labels"],
            json!(["Difficulty", "Preparation", "Physical", "Duration", "Group Size"])
        );
        assert_eq!(value["data"]["datasets"][0]["data"], json!([4, 2, 9, 6, 8]));
        assert_eq!(
            value["data"]["datasets"][0]["backgroundColor"],
            "rgba(54, 162, 235, 0.2)"
        );
        let scale = &value["options"]["scales"]["r"];
        assert_eq!(scale["suggestedMin"], 0);
        assert_eq!(scale["suggestedMax"], 10);
        assert_eq!(scale["ticks"], json!({ "display": false, "stepSize": 2 }));
        assert_eq!(value["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(value["options"]["plugins"]["tooltip"]["enabled"], true);
        assert_eq!(value["options"]["maintainAspectRatio"], false);
    }

    #[test]
    fn configs_differ_only_in_data() {
        let mut first: Value =
            serde_json::to_value(RadarChartConfig::for_metrics([1, 1, 1, 1, 1])).expect("json");
        let mut second: Value =
            serde_json::to_value(RadarChartConfig::for_metrics([9, 8, 7, 6, 5])).expect("json");
        first["data"]["datasets"][0]["data"] = Value::Null;
        second["data"]["datasets"][0]["data"] = Value::Null;
        assert_eq!(first, second);
    }
}
