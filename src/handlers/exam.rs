// src/handlers/exam.rs

use axum::{Json, response::IntoResponse};
use chrono::Utc;

use crate::{
    error::AppError,
    handlers::timestamped_id,
    models::exam::{ExamResult, SubmitExamRequest, SubmitExamResponse},
    scoring::{self, round2},
    utils::json::ValidJson,
};

/// Scores a submitted exam.
///
/// * Rejects a missing `user_id` or an empty answer list with 400.
/// * Computes the summary, the 0..=1000 points and the total time.
/// * Nothing is stored; the result is computed fresh for every request.
pub async fn submit_exam(
    ValidJson(req): ValidJson<SubmitExamRequest>,
) -> Result<impl IntoResponse, AppError> {
    let summary = scoring::score(&req.answers);
    let points = scoring::points(&summary);
    let total_time = round2(scoring::total_seconds(&req.answers));

    tracing::info!(
        user_id = %req.user_id,
        total = summary.total,
        correct = summary.correct,
        "Exam scored"
    );

    let message = format!(
        "Exam completed! You got {} of {} questions right ({:.1}%)",
        summary.correct, summary.total, summary.accuracy_percent
    );

    let result = ExamResult {
        exam_id: timestamped_id("exam", &req.user_id),
        user_id: req.user_id,
        completed_at: Utc::now(),
        tier_label: summary.tier.label().to_string(),
        summary,
        total_time,
        points,
        status: "completed".to_string(),
    };

    Ok(Json(SubmitExamResponse {
        success: true,
        result,
        message,
    }))
}
