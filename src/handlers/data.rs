//! Parameter data handlers

use axum::{extract::Query, Json};
use chrono::Utc;
use serde::Deserialize;

use crate::mock::{self, TimeRange};
use crate::models::{ChartSeries, Parameter};

pub async fn schumann() -> Json<ChartSeries> {
    Json(mock::parameter_series(&mut rand::thread_rng(), Parameter::SchumannResonance))
}

pub async fn tec() -> Json<ChartSeries> {
    Json(mock::parameter_series(&mut rand::thread_rng(), Parameter::TotalElectronContent))
}

pub async fn elf() -> Json<ChartSeries> {
    Json(mock::parameter_series(&mut rand::thread_rng(), Parameter::ElfBurstActivity))
}

pub async fn gravity() -> Json<ChartSeries> {
    Json(mock::parameter_series(&mut rand::thread_rng(), Parameter::GravityField))
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalQuery {
    pub time_range: Option<String>,
    /// Comma-separated parameter keys, e.g. `tec,elf`
    pub parameters: Option<String>,
}

impl HistoricalQuery {
    /// Requested parameters; unknown names are ignored
    fn parameters(&self) -> Vec<Parameter> {
        self.parameters
            .as_deref()
            .map(|list| {
                list.split(',')
                    .filter_map(|name| name.parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Day-bucketed history for the selected window
pub async fn historical(Query(query): Query<HistoricalQuery>) -> Json<ChartSeries> {
    let range = TimeRange::from_query(query.time_range.as_deref());
    let parameters = query.parameters();
    let today = Utc::now().date_naive();

    Json(mock::historical_series(
        &mut rand::thread_rng(),
        range,
        &parameters,
        today,
    ))
}
