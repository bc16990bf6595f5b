//! Prediction Engine
//!
//! Combines per-parameter anomaly sub-scores into a single weighted
//! earthquake prediction.
//!
//! ```text
//! raw readings ──► processors ──► ProcessedData ──► aggregator ──► PredictionRecord
//!                                                       ▲
//!                                          Weights ─────┘ (normalized)
//! ```

pub mod weights;
pub mod processors;
pub mod aggregator;

pub use weights::{WeightProfile, Weights};
pub use aggregator::{calculate_prediction_score, generate_prediction};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("weight for {parameter} must be a finite non-negative number, got {value}")]
    InvalidWeight { parameter: &'static str, value: f64 },

    #[error("weights sum to zero; at least one parameter must carry weight")]
    ZeroTotalWeight,
}
