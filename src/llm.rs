// src/llm.rs

use std::{fmt, sync::LazyLock, time::Duration};

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{config::Config, models::question::Alternative};

const QUESTION_SYSTEM_PROMPT: &str = "You write multiple-choice questions for public service \
entrance exams. Answer ONLY with a JSON object of the form \
{\"question\": string, \"alternatives\": [{\"id\": \"A\", \"text\": string}, ...], \
\"answer_key\": string, \"explanation\": string, \"difficulty\": \"easy\"|\"medium\"|\"hard\", \
\"topic\": string}. Use five alternatives labelled A to E.";

const EXPLANATION_SYSTEM_PROMPT: &str = "You are a patient tutor for public service entrance \
exams. Explain answers clearly and cite the relevant legislation when it applies.";

/// Matches the first JSON object in a completion, fenced or not.
static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("static regex is valid"));

/// Errors raised while talking to the language model.
#[derive(Debug)]
pub enum LlmError {
    Network(String),
    Timeout(u64),
    Api { status: u16, message: String },
    EmptyResponse,
    InvalidPayload(String),
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::Network(msg) => write!(f, "network error: {}", msg),
            LlmError::Timeout(secs) => write!(f, "request timed out after {}s", secs),
            LlmError::Api { status, message } => write!(f, "API error (HTTP {}): {}", status, message),
            LlmError::EmptyResponse => write!(f, "model returned an empty response"),
            LlmError::InvalidPayload(msg) => write!(f, "invalid model output: {}", msg),
        }
    }
}

impl std::error::Error for LlmError {}

/// A chat-completion backend.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one system + user exchange and returns the raw reply text.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

/// OpenAI-compatible chat completions client.
pub struct OpenAiClient {
    api_key: String,
    base_url: String,
    model: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(api_key: &str, base_url: &str, model: &str, timeout_secs: u64) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| LlmError::Network(e.to_string()))?;

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            timeout_secs,
            client,
        })
    }

    /// Returns `None` when no API key is configured.
    pub fn from_config(config: &Config) -> Result<Option<Self>, LlmError> {
        config
            .llm_api_key
            .as_deref()
            .map(|key| Self::new(key, &config.llm_base_url, &config.llm_model, config.llm_timeout_secs))
            .transpose()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.model,
            temperature: 0.7,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: prompt },
            ],
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout(self.timeout_secs)
                } else {
                    LlmError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidPayload(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(LlmError::EmptyResponse)
    }
}

/// A question as produced by the model, before it is shaped for the frontend.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuestion {
    pub question: String,
    pub alternatives: Vec<Alternative>,
    #[serde(default)]
    pub answer_key: Option<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

/// Asks the model for one question about `topics` for candidates to `role`.
///
/// Only the first three topics are sent. Exactly one request is made.
pub async fn generate_question(
    client: &dyn LlmClient,
    role: &str,
    topics: &[&str],
) -> Result<GeneratedQuestion, LlmError> {
    let topic_list = topics.iter().take(3).copied().collect::<Vec<_>>().join(", ");
    let prompt = format!(
        "Write one exam question for candidates to the position of {}. \
         Cover at least one of these syllabus topics: {}.",
        role, topic_list
    );

    let reply = client.complete(QUESTION_SYSTEM_PROMPT, &prompt).await?;
    parse_question(&reply)
}

/// Extracts and validates a question from raw model output.
pub fn parse_question(reply: &str) -> Result<GeneratedQuestion, LlmError> {
    let json = JSON_OBJECT
        .find(reply)
        .ok_or_else(|| LlmError::InvalidPayload("no JSON object in reply".to_string()))?;

    let question: GeneratedQuestion = serde_json::from_str(json.as_str())
        .map_err(|e| LlmError::InvalidPayload(e.to_string()))?;

    if question.question.trim().is_empty() {
        return Err(LlmError::InvalidPayload("empty question statement".to_string()));
    }
    if question.alternatives.len() < 2 {
        return Err(LlmError::InvalidPayload("fewer than two alternatives".to_string()));
    }

    Ok(question)
}

/// Asks the model for a free-text explanation.
pub async fn explain(client: &dyn LlmClient, prompt: &str) -> Result<String, LlmError> {
    client.complete(EXPLANATION_SYSTEM_PROMPT, prompt).await
}
