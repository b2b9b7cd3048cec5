// src/handlers/stats.rs

use axum::{Json, response::IntoResponse};

use crate::models::stats::{Performance, Ranking};

/// Returns the caller's performance dashboard (sample data).
pub async fn get_performance() -> impl IntoResponse {
    Json(Performance::sample())
}

/// Returns the leaderboard (sample data).
pub async fn get_ranking() -> impl IntoResponse {
    Json(Ranking::sample())
}
