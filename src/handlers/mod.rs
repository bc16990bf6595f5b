//! HTTP handlers

pub mod health;
pub mod data;
pub mod prediction;
pub mod map;
pub mod events;
pub mod assistant;
pub mod ws;

use axum::http::Uri;

use crate::AppError;

/// Fallback for unmatched API routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
