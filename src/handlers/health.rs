// src/handlers/health.rs

use axum::{Json, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service banner with a map of the public endpoints.
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Quiz Backend API",
        "version": VERSION,
        "status": "online",
        "endpoints": {
            "health": "/health",
            "auth": "/api/auth/*",
            "questions": "/api/questions/*",
            "exams": "/api/exams/*",
            "explanations": "/api/explanations",
            "options": "/api/options/*",
            "performance": "/api/performance",
            "ranking": "/api/ranking"
        }
    }))
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "message": "API is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub async fn api_health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": VERSION,
    }))
}

/// Public connectivity probe for the frontend. CORS headers come from the router layer.
pub async fn connectivity_test() -> impl IntoResponse {
    Json(json!({
        "status": "success",
        "message": "Test endpoint is working",
        "timestamp": Utc::now().to_rfc3339(),
        "cors_enabled": true,
    }))
}
