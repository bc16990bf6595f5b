//! Fixed demo tables: risk zones, alerts, past events

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Alert, AlertStatus, HistoricalEvent, RiskZone};

const RISK_ZONES: &[(u32, f64, f64, f64, u32, &str)] = &[
    (1, 37.7749, -122.4194, 0.8, 50, "San Francisco, CA"),
    (2, 34.0522, -118.2437, 0.6, 40, "Los Angeles, CA"),
    (3, 40.7128, -74.0060, 0.3, 30, "New York, NY"),
    (4, 38.9072, 23.7362, 0.9, 60, "Euboea, Greece"),
];

const RECENT_ALERTS: &[(&str, f64, &str, AlertStatus)] = &[
    ("Euboea, Greece", 0.92, "2025-05-18T08:30:00Z", AlertStatus::Verified),
    ("San Francisco, CA", 0.78, "2025-05-22T14:15:00Z", AlertStatus::Active),
    ("Los Angeles, CA", 0.65, "2025-05-22T16:45:00Z", AlertStatus::Active),
    ("Tokyo, Japan", 0.58, "2025-05-21T22:10:00Z", AlertStatus::Expired),
];

const HISTORICAL_EVENTS: &[(&str, f64, &str, bool, f64)] = &[
    ("2025-05-18", 4.5, "Euboea, Greece", true, 0.92),
    ("2025-04-10", 5.2, "Central California", true, 0.76),
    ("2025-03-22", 4.8, "Southern Greece", true, 0.82),
    ("2025-03-05", 6.1, "Northern Japan", true, 0.91),
    ("2025-02-18", 4.5, "Central Italy", false, 0.32),
    ("2025-02-03", 5.7, "Southern Mexico", true, 0.79),
    ("2025-01-15", 4.9, "Western Turkey", true, 0.85),
    ("2024-12-28", 4.7, "Northern California", false, 0.45),
    ("2024-12-12", 5.3, "Eastern Taiwan", true, 0.88),
    ("2024-11-30", 4.6, "Southern Italy", true, 0.71),
];

pub fn risk_zones() -> Vec<RiskZone> {
    RISK_ZONES
        .iter()
        .map(|&(id, lat, lng, risk, radius, location)| RiskZone {
            id,
            lat,
            lng,
            risk,
            radius,
            location: location.to_string(),
        })
        .collect()
}

pub fn recent_alerts() -> Vec<Alert> {
    RECENT_ALERTS
        .iter()
        .filter_map(|&(region, score, timestamp, status)| {
            let timestamp = timestamp.parse::<DateTime<Utc>>().ok()?;
            Some(Alert {
                region: region.to_string(),
                score,
                timestamp,
                status,
            })
        })
        .collect()
}

/// Past events, newest first
pub fn historical_events() -> Vec<HistoricalEvent> {
    HISTORICAL_EVENTS
        .iter()
        .filter_map(|&(date, magnitude, location, prediction, score)| {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
            Some(HistoricalEvent {
                date,
                magnitude,
                location: location.to_string(),
                prediction,
                score,
            })
        })
        .collect()
}
