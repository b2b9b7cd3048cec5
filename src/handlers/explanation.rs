// src/handlers/explanation.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    llm,
    models::explanation::{ExplanationRequest, ExplanationResponse},
    state::SharedLlm,
    utils::{html::clean_html, json::ValidJson},
};

const LEGAL_SOURCES: [&str; 3] = [
    "Federal Constitution of 1988",
    "Law 8.080/90 - Organic Health Law",
    "Law 8.142/90 - SUS Participation and Funding",
];

const GENERIC_SOURCES: [&str; 3] = [
    "Recommended study material",
    "Relevant legislation",
    "Specialized doctrine",
];

/// Explains why the correct alternative is right and the chosen one is wrong.
///
/// Always answers 200: a generic study hint replaces the model output when
/// the model is unavailable or fails.
pub async fn explain_answer(
    State(llm_client): State<SharedLlm>,
    ValidJson(req): ValidJson<ExplanationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let generated = match llm_client.as_deref() {
        Some(client) => match llm::explain(client, &explanation_prompt(&req)).await {
            Ok(text) => Some(clean_html(&text)),
            Err(e) => {
                tracing::warn!("Explanation request failed, serving fallback: {}", e);
                None
            }
        },
        None => None,
    };

    let response = match generated {
        Some(explanation) => ExplanationResponse {
            success: true,
            explanation,
            sources: LEGAL_SOURCES.iter().map(|s| s.to_string()).collect(),
        },
        None => ExplanationResponse {
            success: true,
            explanation: fallback_explanation(&req),
            sources: GENERIC_SOURCES.iter().map(|s| s.to_string()).collect(),
        },
    };

    Ok(Json(response))
}

fn explanation_prompt(req: &ExplanationRequest) -> String {
    format!(
        "Explain in detail why alternative {correct} is correct for this public exam question:\n\n\
         Question: {question}\n\n\
         The candidate chose alternative {chosen}, but the correct one is {correct}.\n\n\
         Provide:\n\
         1. A clear explanation of the concept\n\
         2. Why alternative {correct} is correct\n\
         3. Why alternative {chosen} is incorrect\n\
         4. Recommended study sources on {topic} in {subject}",
        correct = req.correct_choice,
        chosen = req.chosen_choice,
        question = req.question,
        topic = req.topic,
        subject = req.subject,
    )
}

fn fallback_explanation(req: &ExplanationRequest) -> String {
    clean_html(&format!(
        "Alternative {} is the correct answer for this question about {}.\n\n\
         To understand this concept better, review:\n\
         - Specific legislation on {}\n\
         - Fundamental concepts of {}\n\
         - Related case law\n\n\
         Keep studying and practice more questions on this topic!",
        req.correct_choice, req.topic, req.subject, req.topic
    ))
}
