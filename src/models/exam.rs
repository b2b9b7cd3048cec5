// src/models/exam.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::scoring::{AnsweredQuestion, ScoreSummary};

/// DTO for submitting a finished exam.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitExamRequest {
    /// Strings and numbers are accepted; anything else counts as missing.
    #[serde(default, deserialize_with = "lenient_user_id")]
    #[validate(length(min = 1, max = 64, message = "user_id is required"))]
    pub user_id: String,

    /// Entries that are not JSON objects are kept as empty (never correct) records.
    #[serde(default, deserialize_with = "lenient_answers")]
    #[validate(length(min = 1, message = "answers must not be empty"))]
    pub answers: Vec<AnsweredQuestion>,
}

fn lenient_user_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_answers<'de, D>(deserializer: D) -> Result<Vec<AnsweredQuestion>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        _ => return Ok(Vec::new()),
    };

    Ok(entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).unwrap_or_default())
        .collect())
}

/// Outcome of one submitted exam. Never persisted.
#[derive(Debug, Serialize)]
pub struct ExamResult {
    pub exam_id: String,
    pub user_id: String,
    pub completed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub summary: ScoreSummary,
    pub tier_label: String,
    pub total_time: f64,
    /// 0..=1000 scale.
    pub points: u32,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitExamResponse {
    pub success: bool,
    pub result: ExamResult,
    pub message: String,
}
