//! Prediction handlers

use axum::{extract::State, Json};
use serde::Deserialize;
use validator::Validate;

use crate::{AppState, AppResult};
use crate::mock;
use crate::models::{ParameterReadings, PredictionRecord, ProcessedData};
use crate::prediction::{calculate_prediction_score, generate_prediction, Weights};

/// Current (generated) prediction
pub async fn current(State(state): State<AppState>) -> AppResult<Json<PredictionRecord>> {
    let prediction = mock::mock_prediction(&mut rand::thread_rng(), &state.weights)?;
    Ok(Json(prediction))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CalculateRequest {
    #[validate(nested)]
    pub scores: ProcessedData,
    /// Falls back to the server's configured weights
    pub weights: Option<Weights>,
}

/// Score caller-supplied sub-scores
pub async fn calculate(
    State(state): State<AppState>,
    Json(req): Json<CalculateRequest>,
) -> AppResult<Json<PredictionRecord>> {
    req.validate()?;

    let weights = req.weights.unwrap_or(state.weights);
    let prediction = calculate_prediction_score(&req.scores, &weights)?;

    tracing::info!(
        score = prediction.score,
        alert_level = prediction.alert_level.as_str(),
        "Calculated prediction from supplied scores"
    );

    Ok(Json(prediction))
}

#[derive(Debug, Deserialize)]
pub struct ReadingsRequest {
    pub readings: ParameterReadings,
    #[serde(default)]
    pub baseline: ParameterReadings,
    pub weights: Option<Weights>,
}

/// Run raw readings through the processors and aggregate them
pub async fn from_readings(
    State(state): State<AppState>,
    Json(req): Json<ReadingsRequest>,
) -> AppResult<Json<PredictionRecord>> {
    let weights = req.weights.unwrap_or(state.weights);
    let prediction = generate_prediction(&req.readings, &req.baseline, &weights)?;
    Ok(Json(prediction))
}
