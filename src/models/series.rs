//! Chart-ready time series

use serde::{Deserialize, Serialize};

use super::Parameter;

/// Labelled series in the shape the dashboard charts consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub tension: f64,
}

impl Dataset {
    /// Styled dataset for a parameter
    pub fn for_parameter(parameter: Parameter, label: &str, data: Vec<f64>) -> Self {
        Self {
            label: label.to_string(),
            data,
            border_color: parameter.border_color().to_string(),
            background_color: parameter.background_color().to_string(),
            tension: 0.3,
        }
    }
}

/// Latest 24-hour series for every parameter, as pushed to live clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSnapshot {
    pub schumann: ChartSeries,
    pub tec: ChartSeries,
    pub elf: ChartSeries,
    pub gravity: ChartSeries,
}
