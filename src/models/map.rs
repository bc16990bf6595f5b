//! Map overlays: risk zones and recent alerts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskZone {
    pub id: u32,
    pub lat: f64,
    pub lng: f64,
    /// 0.0 - 1.0
    pub risk: f64,
    /// Display radius in km
    pub radius: u32,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Verified,
    Active,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub region: String,
    pub score: f64,
    pub timestamp: DateTime<Utc>,
    pub status: AlertStatus,
}
