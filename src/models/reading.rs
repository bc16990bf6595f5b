//! Raw sensor readings

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchumannReading {
    /// Fundamental frequency in Hz
    pub frequency: f64,
    pub amplitude: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TecReading {
    /// Total electron content in TECU
    pub tec_value: f64,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElfReading {
    pub burst_intensity: f64,
    pub frequency: Option<f64>,
    /// Burst duration in seconds
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GravityReading {
    /// Gravity variation in μGal
    pub gravity_value: f64,
    pub region: Option<String>,
}

/// One reading per parameter; any of them may be missing.
///
/// Used both for the current observation and for the baseline it is
/// compared against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterReadings {
    pub schumann_resonance: Option<SchumannReading>,
    pub total_electron_content: Option<TecReading>,
    pub elf_burst_activity: Option<ElfReading>,
    pub gravity_field: Option<GravityReading>,
}
