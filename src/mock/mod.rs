//! Synthetic data served in place of live sensor feeds

pub mod series;
pub mod tables;

pub use series::*;
pub use tables::*;

use rand::Rng;

use crate::models::{ElfScore, GravityScore, PredictionRecord, ProcessedData, SchumannScore, TecScore};
use crate::prediction::{calculate_prediction_score, PredictionError, Weights};

/// Random sub-scores in the ranges the demo dashboard is tuned for:
/// ELF and TEC run hottest, gravity stays quiet.
pub fn mock_sub_scores<R: Rng + ?Sized>(rng: &mut R) -> ProcessedData {
    ProcessedData {
        schumann_resonance: Some(SchumannScore {
            anomaly_score: rng.gen_range(0.55..0.75),
            confidence: rng.gen_range(0.75..0.95),
            frequency_deviation: rng.gen_range(0.1..0.3),
            amplitude_variation: rng.gen_range(0.0..0.5),
            pattern_match: rng.gen_range(0.5..0.9),
        }),
        total_electron_content: Some(TecScore {
            anomaly_score: rng.gen_range(0.6..0.8),
            confidence: rng.gen_range(0.75..0.95),
            regional_variation: rng.gen_range(0.1..0.3),
            temporal_trend: rng.gen_range(-0.1..0.2),
            pattern_match: rng.gen_range(0.5..0.9),
        }),
        elf_burst_activity: Some(ElfScore {
            anomaly_score: rng.gen_range(0.7..0.9),
            confidence: rng.gen_range(0.75..0.95),
            signal_intensity: rng.gen_range(1.0..3.0),
            frequency_distribution: rng.gen_range(0.2..0.8),
            burst_duration: rng.gen_range(30.0..180.0),
        }),
        gravity_field: Some(GravityScore {
            anomaly_score: rng.gen_range(0.2..0.4),
            confidence: rng.gen_range(0.75..0.95),
            regional_variation: rng.gen_range(0.0..0.2),
            temporal_trend: rng.gen_range(-0.05..0.05),
            crustal_movement: rng.gen_range(0.0..0.1),
        }),
    }
}

/// Random prediction, scored by the real aggregator
pub fn mock_prediction<R: Rng + ?Sized>(
    rng: &mut R,
    weights: &Weights,
) -> Result<PredictionRecord, PredictionError> {
    calculate_prediction_score(&mock_sub_scores(rng), weights)
}
