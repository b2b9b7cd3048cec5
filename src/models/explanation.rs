// src/models/explanation.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO asking why an answer was right or wrong.
#[derive(Debug, Deserialize, Validate)]
pub struct ExplanationRequest {
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub question: String,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub correct_choice: String,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub chosen_choice: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct ExplanationResponse {
    pub success: bool,
    pub explanation: String,
    pub sources: Vec<String>,
}
