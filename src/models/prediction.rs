//! Prediction record and per-parameter sub-scores

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Parameter;

/// Discrete risk category derived from the aggregated score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl AlertLevel {
    pub const LOW_THRESHOLD: f64 = 0.5;
    pub const MEDIUM_THRESHOLD: f64 = 0.65;
    pub const HIGH_THRESHOLD: f64 = 0.8;
    pub const CRITICAL_THRESHOLD: f64 = 0.9;

    /// Map a score to its level, checking the highest threshold first
    pub fn from_score(score: f64) -> Self {
        if score >= Self::CRITICAL_THRESHOLD {
            AlertLevel::Critical
        } else if score >= Self::HIGH_THRESHOLD {
            AlertLevel::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            AlertLevel::Medium
        } else if score >= Self::LOW_THRESHOLD {
            AlertLevel::Low
        } else {
            AlertLevel::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::None => "none",
            AlertLevel::Low => "low",
            AlertLevel::Medium => "medium",
            AlertLevel::High => "high",
            AlertLevel::Critical => "critical",
        }
    }
}

/// Common view over the four sub-score records
pub trait AnomalyScore {
    /// Deviation from baseline, 0.0 - 1.0
    fn anomaly_score(&self) -> f64;
    /// Detector confidence, 0.0 - 1.0
    fn confidence(&self) -> f64;
}

macro_rules! impl_anomaly_score {
    ($($ty:ty),+) => {
        $(impl AnomalyScore for $ty {
            fn anomaly_score(&self) -> f64 {
                self.anomaly_score
            }

            fn confidence(&self) -> f64 {
                self.confidence
            }
        })+
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct SchumannScore {
    #[validate(range(min = 0.0, max = 1.0))]
    pub anomaly_score: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: f64,
    /// Shift of the fundamental from baseline, Hz
    pub frequency_deviation: f64,
    pub amplitude_variation: f64,
    pub pattern_match: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct TecScore {
    #[validate(range(min = 0.0, max = 1.0))]
    pub anomaly_score: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: f64,
    pub regional_variation: f64,
    pub temporal_trend: f64,
    pub pattern_match: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ElfScore {
    #[validate(range(min = 0.0, max = 1.0))]
    pub anomaly_score: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: f64,
    pub signal_intensity: f64,
    pub frequency_distribution: f64,
    pub burst_duration: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct GravityScore {
    #[validate(range(min = 0.0, max = 1.0))]
    pub anomaly_score: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: f64,
    pub regional_variation: f64,
    pub temporal_trend: f64,
    pub crustal_movement: f64,
}

impl_anomaly_score!(SchumannScore, TecScore, ElfScore, GravityScore);

/// Sub-scores for whichever parameters had data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessedData {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub schumann_resonance: Option<SchumannScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub total_electron_content: Option<TecScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub elf_burst_activity: Option<ElfScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub gravity_field: Option<GravityScore>,
}

impl ProcessedData {
    /// Sub-score for a parameter, if present
    pub fn get(&self, parameter: Parameter) -> Option<&dyn AnomalyScore> {
        match parameter {
            Parameter::SchumannResonance => self.schumann_resonance.as_ref().map(|s| s as &dyn AnomalyScore),
            Parameter::TotalElectronContent => self.total_electron_content.as_ref().map(|s| s as &dyn AnomalyScore),
            Parameter::ElfBurstActivity => self.elf_burst_activity.as_ref().map(|s| s as &dyn AnomalyScore),
            Parameter::GravityField => self.gravity_field.as_ref().map(|s| s as &dyn AnomalyScore),
        }
    }

    pub fn present_count(&self) -> usize {
        Parameter::ALL.iter().filter(|p| self.get(**p).is_some()).count()
    }
}

/// Each parameter's share of the aggregated score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributingFactors {
    pub schumann_resonance: f64,
    pub total_electron_content: f64,
    pub elf_burst_activity: f64,
    pub gravity_field: f64,
}

impl ContributingFactors {
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::SchumannResonance => self.schumann_resonance,
            Parameter::TotalElectronContent => self.total_electron_content,
            Parameter::ElfBurstActivity => self.elf_burst_activity,
            Parameter::GravityField => self.gravity_field,
        }
    }

    pub fn set(&mut self, parameter: Parameter, value: f64) {
        match parameter {
            Parameter::SchumannResonance => self.schumann_resonance = value,
            Parameter::TotalElectronContent => self.total_electron_content = value,
            Parameter::ElfBurstActivity => self.elf_burst_activity = value,
            Parameter::GravityField => self.gravity_field = value,
        }
    }

    pub fn total(&self) -> f64 {
        Parameter::ALL.iter().map(|p| self.get(*p)).sum()
    }
}

/// Aggregated earthquake prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    pub score: f64,
    pub confidence: f64,
    pub alert_level: AlertLevel,
    pub timestamp: DateTime<Utc>,
    pub contributing_factors: ContributingFactors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_data: Option<ProcessedData>,
}
