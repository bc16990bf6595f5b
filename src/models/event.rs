//! Historical seismic events

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A past earthquake and whether the tracker flagged it beforehand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub date: NaiveDate,
    pub magnitude: f64,
    pub location: String,
    pub prediction: bool,
    pub score: f64,
}
