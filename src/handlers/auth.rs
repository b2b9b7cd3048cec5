// src/handlers/auth.rs

use axum::{Json, response::IntoResponse};

use crate::{
    error::AppError,
    models::auth::{DemoUser, LoginRequest, LoginResponse},
    utils::json::ValidJson,
};

const DEMO_TOKEN: &str = "demo_token_123";

/// Demo login stand-in.
///
/// Accepts any well-formed request and returns a fixed user profile named
/// after the submitted email. No credentials are verified.
pub async fn login(ValidJson(payload): ValidJson<LoginRequest>) -> Result<impl IntoResponse, AppError> {
    let name = payload.email.clone().unwrap_or_else(|| "User".to_string());

    Ok(Json(LoginResponse {
        success: true,
        user: DemoUser {
            id: "1".to_string(),
            name,
            email: payload.email,
            role: "Nurse".to_string(),
            block: "Health".to_string(),
        },
        token: DEMO_TOKEN.to_string(),
    }))
}
