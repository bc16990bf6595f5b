//! Historical events handler

use axum::Json;

use crate::mock;
use crate::models::HistoricalEvent;

pub async fn list() -> Json<Vec<HistoricalEvent>> {
    Json(mock::historical_events())
}
