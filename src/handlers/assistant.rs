//! Assistant handler

use axum::{extract::State, Json};
use validator::Validate;

use crate::{AppState, AppResult};
use crate::assistant;
use crate::models::{AskRequest, AskResponse};

/// Answer a question from the canned rule table
pub async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> AppResult<Json<AskResponse>> {
    req.validate()?;

    let response = assistant::respond(&req.question);

    let delay = state.config.ask_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    Ok(Json(AskResponse {
        response: response.to_string(),
    }))
}
