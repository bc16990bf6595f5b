//! Monitored geophysical parameters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four parameters the tracker monitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Parameter {
    SchumannResonance,
    TotalElectronContent,
    ElfBurstActivity,
    GravityField,
}

impl Parameter {
    /// All parameters, in display order
    pub const ALL: [Parameter; 4] = [
        Parameter::SchumannResonance,
        Parameter::TotalElectronContent,
        Parameter::ElfBurstActivity,
        Parameter::GravityField,
    ];

    /// Short key used in URLs and query strings
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::SchumannResonance => "schumann",
            Parameter::TotalElectronContent => "tec",
            Parameter::ElfBurstActivity => "elf",
            Parameter::GravityField => "gravity",
        }
    }

    /// camelCase field name used in prediction records
    pub fn field_name(&self) -> &'static str {
        match self {
            Parameter::SchumannResonance => "schumannResonance",
            Parameter::TotalElectronContent => "totalElectronContent",
            Parameter::ElfBurstActivity => "elfBurstActivity",
            Parameter::GravityField => "gravityField",
        }
    }

    /// Dataset label for the 24-hour chart
    pub fn hourly_label(&self) -> &'static str {
        match self {
            Parameter::SchumannResonance => "Schumann Resonance (7.83 Hz)",
            Parameter::TotalElectronContent => "Total Electron Content (TECU)",
            Parameter::ElfBurstActivity => "ELF Burst Activity (Relative Units)",
            Parameter::GravityField => "Gravity Field Variation (μGal)",
        }
    }

    /// Dataset label for the day-bucketed historical chart
    pub fn historical_label(&self) -> &'static str {
        match self {
            Parameter::SchumannResonance => "Schumann Resonance (Hz)",
            _ => self.hourly_label(),
        }
    }

    pub fn border_color(&self) -> &'static str {
        match self {
            Parameter::SchumannResonance => "rgb(75, 192, 192)",
            Parameter::TotalElectronContent => "rgb(53, 162, 235)",
            Parameter::ElfBurstActivity => "rgb(255, 99, 132)",
            Parameter::GravityField => "rgb(255, 159, 64)",
        }
    }

    pub fn background_color(&self) -> &'static str {
        match self {
            Parameter::SchumannResonance => "rgba(75, 192, 192, 0.5)",
            Parameter::TotalElectronContent => "rgba(53, 162, 235, 0.5)",
            Parameter::ElfBurstActivity => "rgba(255, 99, 132, 0.5)",
            Parameter::GravityField => "rgba(255, 159, 64, 0.5)",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for Parameter {
    type Err = String;

    /// Accepts both the short key (`tec`) and the record field name
    /// (`totalElectronContent`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Parameter::ALL
            .into_iter()
            .find(|p| p.key() == wanted || p.field_name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| format!("unknown parameter '{}'", s.trim()))
    }
}
