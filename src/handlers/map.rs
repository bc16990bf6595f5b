//! Map overlay handlers

use axum::Json;

use crate::mock;
use crate::models::{Alert, RiskZone};

pub async fn risk_zones() -> Json<Vec<RiskZone>> {
    Json(mock::risk_zones())
}

pub async fn recent_alerts() -> Json<Vec<Alert>> {
    Json(mock::recent_alerts())
}
