// src/models/auth.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO for the demo login. No password is checked and the email is echoed as given.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DemoUser {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub role: String,
    pub block: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: DemoUser,
    pub token: String,
}
