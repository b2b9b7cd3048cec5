// src/handlers/question.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    handlers::timestamped_id,
    llm::{self, GeneratedQuestion},
    models::question::{
        Alternative, AnswerQuestionRequest, AnswerQuestionResponse, GenerateQuestionRequest,
        GenerateQuestionResponse, Question,
    },
    state::SharedLlm,
    syllabus,
    utils::{
        html::{clean_alternatives, clean_html},
        json::ValidJson,
    },
};

/// Answer key of the fallback question, also used by the mock answer check.
pub const FALLBACK_ANSWER_KEY: &str = "C";

/// Generates one practice question for a role and syllabus block.
///
/// * Unknown role/block pairs are rejected with 404.
/// * The language model is tried once; on any failure, or when no model is
///   configured, a fixed example question is served instead.
pub async fn generate_question(
    State(llm_client): State<SharedLlm>,
    ValidJson(req): ValidJson<GenerateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let topics = syllabus::topics(&req.role, &req.block)
        .ok_or_else(|| AppError::NotFound("Role or block not found".to_string()))?;

    let id = timestamped_id("q", &req.user_id);

    let question = match llm_client.as_deref() {
        Some(client) => match llm::generate_question(client, &req.role, topics).await {
            Ok(generated) => {
                tracing::info!(role = %req.role, block = %req.block, "Generated question with LLM");
                from_generated(id, generated, topics[0])
            }
            Err(e) => {
                tracing::warn!("Question generation failed, serving fallback: {}", e);
                fallback_question(id)
            }
        },
        None => {
            tracing::debug!("No LLM configured, serving fallback question");
            fallback_question(id)
        }
    };

    Ok(Json(GenerateQuestionResponse { question }))
}

fn from_generated(id: String, generated: GeneratedQuestion, default_topic: &str) -> Question {
    Question {
        id,
        statement: clean_html(&generated.question),
        alternatives: clean_alternatives(&generated.alternatives),
        answer_key: generated
            .answer_key
            .map(|key| clean_html(&key))
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| "A".to_string()),
        explanation: clean_html(&generated.explanation),
        difficulty: generated
            .difficulty
            .map(|d| clean_html(&d))
            .unwrap_or_else(|| "medium".to_string()),
        topic: clean_html(generated.topic.as_deref().unwrap_or(default_topic)),
    }
}

/// The example question served whenever generation is unavailable.
pub fn fallback_question(id: String) -> Question {
    Question {
        id,
        statement: "Example question about SUS".to_string(),
        alternatives: ["A", "B", "C", "D", "E"]
            .iter()
            .map(|letter| Alternative::new(letter, &format!("Alternative {}", letter)))
            .collect(),
        answer_key: FALLBACK_ANSWER_KEY.to_string(),
        explanation: "Explanation of the correct answer".to_string(),
        difficulty: "medium".to_string(),
        topic: "SUS".to_string(),
    }
}

/// Checks a single answer against the fixed mock key.
pub async fn answer_question(
    Path(question_id): Path<String>,
    ValidJson(req): ValidJson<AnswerQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let correct = req.answer.as_deref() == Some(FALLBACK_ANSWER_KEY);

    Ok(Json(AnswerQuestionResponse {
        success: true,
        question_id,
        correct,
        answer_key: FALLBACK_ANSWER_KEY.to_string(),
        explanation: "Detailed explanation of the answer".to_string(),
    }))
}
