//! Per-parameter anomaly processors
//!
//! No detection model has been calibrated yet, so every processor reports
//! a zero anomaly with zero confidence. The signatures are fixed so the
//! aggregation pipeline and its callers do not change when real detectors
//! land.
// TODO: score Schumann frequency shift and TEC/ELF/gravity deviation
// against the baseline once detector thresholds are calibrated.

use crate::models::{
    ElfReading, ElfScore, GravityReading, GravityScore, SchumannReading, SchumannScore,
    TecReading, TecScore,
};

pub fn process_schumann_resonance(
    _reading: &SchumannReading,
    _baseline: Option<&SchumannReading>,
) -> SchumannScore {
    SchumannScore::default()
}

pub fn process_total_electron_content(
    _reading: &TecReading,
    _baseline: Option<&TecReading>,
) -> TecScore {
    TecScore::default()
}

pub fn process_elf_burst_activity(
    _reading: &ElfReading,
    _baseline: Option<&ElfReading>,
) -> ElfScore {
    ElfScore::default()
}

pub fn process_gravity_field(
    _reading: &GravityReading,
    _baseline: Option<&GravityReading>,
) -> GravityScore {
    GravityScore::default()
}
