// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One answer option, e.g. `{"id": "A", "text": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub text: String,
}

impl Alternative {
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
        }
    }
}

/// A question shaped for the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: String,
    pub statement: String,
    pub alternatives: Vec<Alternative>,
    pub answer_key: String,
    pub explanation: String,
    pub difficulty: String,
    pub topic: String,
}

/// DTO for requesting a generated question.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateQuestionRequest {
    #[serde(default = "default_user_id")]
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,

    /// Position the candidate is preparing for.
    #[serde(default = "default_role")]
    #[validate(length(min = 1, max = 100))]
    pub role: String,

    /// Syllabus block within the role.
    #[serde(default = "default_block")]
    #[validate(length(min = 1, max = 100))]
    pub block: String,
}

fn default_user_id() -> String {
    "user-default".to_string()
}

fn default_role() -> String {
    "Nurse".to_string()
}

fn default_block() -> String {
    "Health".to_string()
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionResponse {
    pub question: Question,
}

/// DTO for answering a single question.
#[derive(Debug, Deserialize, Validate)]
pub struct AnswerQuestionRequest {
    #[serde(default)]
    pub answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnswerQuestionResponse {
    pub success: bool,
    pub question_id: String,
    pub correct: bool,
    pub answer_key: String,
    pub explanation: String,
}
