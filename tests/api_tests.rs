// tests/api_tests.rs

use std::sync::Arc;

use async_trait::async_trait;
use quiz_backend::{
    config::Config,
    llm::{LlmClient, LlmError},
    routes,
    state::AppState,
};

/// Model stub that always answers with the same text.
struct CannedLlm(String);

#[async_trait]
impl LlmClient for CannedLlm {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
        Ok(self.0.clone())
    }
}

/// Model stub that always fails.
struct BrokenLlm;

#[async_trait]
impl LlmClient for BrokenLlm {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 500,
            message: "boom".to_string(),
        })
    }
}

fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "RUST_LOG" => Some("error".to_string()),
        _ => None,
    })
    .expect("default test config is valid")
}

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app(llm: Option<Arc<dyn LlmClient>>) -> String {
    let state = AppState {
        config: test_config(),
        llm,
    };

    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

fn unique_user() -> String {
    format!("u_{}", &uuid::Uuid::new_v4().to_string()[..8])
}

#[tokio::test]
async fn unknown_path_is_404() {
    let address = spawn_app(None).await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn health_endpoints_report_healthy() {
    let address = spawn_app(None).await;
    let client = reqwest::Client::new();

    for path in ["/health", "/api/health"] {
        let body: serde_json::Value = client
            .get(&format!("{}{}", address, path))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .unwrap();

        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    let root: serde_json::Value = client
        .get(&format!("{}/", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(root["status"], "online");
    assert_eq!(root["endpoints"]["health"], "/health");
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let address = spawn_app(None).await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/api/test", address))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["cors_enabled"], true);
}

#[tokio::test]
async fn submit_exam_scores_answers() {
    let address = spawn_app(None).await;
    let client = reqwest::Client::new();
    let user = unique_user();

    let response = client
        .post(&format!("{}/api/exams/submit", address))
        .json(&serde_json::json!({
            "user_id": user,
            "answers": [
                { "user_choice": "A", "correct_choice": "A", "time_spent": 10 },
                { "user_choice": "B", "correct_choice": "A", "time_spent": 20 },
                { "user_choice": "A", "correct_choice": "A", "time_spent": 30 }
            ]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let result = &body["result"];
    assert_eq!(body["success"], true);
    assert_eq!(result["user_id"], user.as_str());
    assert_eq!(result["total"], 3);
    assert_eq!(result["correct"], 2);
    assert_eq!(result["incorrect"], 1);
    assert_eq!(result["accuracy_percent"], 66.67);
    assert_eq!(result["average_time"], 20.0);
    assert_eq!(result["total_time"], 60.0);
    assert_eq!(result["tier"], "Good");
    assert_eq!(result["points"], 666);
    assert_eq!(result["status"], "completed");
    assert!(
        result["exam_id"]
            .as_str()
            .unwrap()
            .starts_with(&format!("exam-{}-", user))
    );
}

#[tokio::test]
async fn submit_exam_accepts_numeric_user_id() {
    let address = spawn_app(None).await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/exams/submit", address))
        .json(&serde_json::json!({
            "user_id": 42,
            "answers": [{ "user_choice": "A", "correct_choice": "A", "time_spent": 5 }]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["result"]["user_id"], "42");
    assert!(
        body["result"]["exam_id"]
            .as_str()
            .unwrap()
            .starts_with("exam-42-")
    );
}

#[tokio::test]
async fn submit_exam_keeps_huge_times_finite() {
    let address = spawn_app(None).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(&format!("{}/api/exams/submit", address))
        .json(&serde_json::json!({
            "user_id": "u1",
            "answers": [
                { "user_choice": "A", "correct_choice": "A", "time_spent": f64::MAX },
                { "user_choice": "A", "correct_choice": "A", "time_spent": f64::MAX }
            ]
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(body["result"]["average_time"].as_f64().unwrap().is_finite());
    assert!(body["result"]["total_time"].as_f64().unwrap().is_finite());
}

#[tokio::test]
async fn submit_exam_tolerates_malformed_entries() {
    let address = spawn_app(None).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(&format!("{}/api/exams/submit", address))
        .json(&serde_json::json!({
            "user_id": unique_user(),
            "answers": [
                { "user_choice": "A", "correct_choice": "A" },
                "not an object",
                {}
            ]
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["result"]["total"], 3);
    assert_eq!(body["result"]["correct"], 1);
    assert_eq!(body["result"]["tier"], "NeedsImprovement");
}

#[tokio::test]
async fn submit_exam_rejects_bad_requests() {
    let address = spawn_app(None).await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/exams/submit", address);

    let empty_answers = client
        .post(&url)
        .json(&serde_json::json!({ "user_id": "u1", "answers": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(empty_answers.status().as_u16(), 400);

    let missing_user = client
        .post(&url)
        .json(&serde_json::json!({
            "answers": [{ "user_choice": "A", "correct_choice": "A" }]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_user.status().as_u16(), 400);

    let broken_json = client
        .post(&url)
        .header("Content-Type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(broken_json.status().as_u16(), 400);

    let body: serde_json::Value = broken_json.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn generate_question_uses_model_output() {
    let reply = r#"```json
{"question": "Which law regulates SUS?<script>alert(1)</script>",
 "alternatives": [{"id": "A", "text": "Law 8.080/90"}, {"id": "B", "text": "Law 8.112/90"}],
 "answer_key": "A", "explanation": "It is the Organic Health Law.", "difficulty": "easy"}
```"#;
    let address = spawn_app(Some(Arc::new(CannedLlm(reply.to_string())))).await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/questions/generate", address))
        .json(&serde_json::json!({ "user_id": "u7", "role": "Nurse", "block": "Health" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let question = &body["question"];
    assert_eq!(question["statement"], "Which law regulates SUS?");
    assert_eq!(question["answer_key"], "A");
    assert_eq!(question["difficulty"], "easy");
    assert_eq!(question["topic"], "SUS principles and guidelines");
    assert_eq!(question["alternatives"].as_array().unwrap().len(), 2);
    assert!(question["id"].as_str().unwrap().starts_with("q-u7-"));
}

#[tokio::test]
async fn generate_question_falls_back_when_model_fails() {
    let address = spawn_app(Some(Arc::new(BrokenLlm))).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(&format!("{}/api/questions/generate", address))
        .json(&serde_json::json!({ "user_id": "u8", "role": "Nurse", "block": "Health" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let question = &body["question"];
    assert_eq!(question["answer_key"], "C");
    assert_eq!(question["topic"], "SUS");
    assert_eq!(question["alternatives"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn generate_question_falls_back_without_model() {
    let address = spawn_app(None).await;
    let client = reqwest::Client::new();

    // Defaults to Nurse / Health
    let body: serde_json::Value = client
        .post(&format!("{}/api/questions/generate", address))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["question"]["answer_key"], "C");
    assert!(
        body["question"]["id"]
            .as_str()
            .unwrap()
            .starts_with("q-user-default-")
    );
}

#[tokio::test]
async fn generate_question_unknown_role_is_404() {
    let address = spawn_app(Some(Arc::new(BrokenLlm))).await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/questions/generate", address))
        .json(&serde_json::json!({ "role": "Astronaut", "block": "Health" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Role or block not found");
}

#[tokio::test]
async fn answer_question_checks_mock_key() {
    let address = spawn_app(None).await;
    let client = reqwest::Client::new();

    let right: serde_json::Value = client
        .post(&format!("{}/api/questions/q-1/answer", address))
        .json(&serde_json::json!({ "answer": "C" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(right["correct"], true);
    assert_eq!(right["question_id"], "q-1");

    let wrong: serde_json::Value = client
        .post(&format!("{}/api/questions/q-1/answer", address))
        .json(&serde_json::json!({ "answer": "A" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(wrong["correct"], false);
    assert_eq!(wrong["answer_key"], "C");
}

#[tokio::test]
async fn explanation_uses_model_or_falls_back() {
    let request = serde_json::json!({
        "question": "Which law regulates SUS?",
        "correct_choice": "A",
        "chosen_choice": "B",
        "subject": "Health",
        "topic": "SUS"
    });
    let client = reqwest::Client::new();

    let address = spawn_app(Some(Arc::new(CannedLlm("Because of Law 8.080/90.".to_string())))).await;
    let generated: serde_json::Value = client
        .post(&format!("{}/api/explanations", address))
        .json(&request)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(generated["success"], true);
    assert_eq!(generated["explanation"], "Because of Law 8.080/90.");
    assert_eq!(generated["sources"][0], "Federal Constitution of 1988");

    let address = spawn_app(Some(Arc::new(BrokenLlm))).await;
    let fallback: serde_json::Value = client
        .post(&format!("{}/api/explanations", address))
        .json(&request)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fallback["success"], true);
    assert!(
        fallback["explanation"]
            .as_str()
            .unwrap()
            .contains("Alternative A is the correct answer")
    );
    assert_eq!(fallback["sources"][0], "Recommended study material");
}

#[tokio::test]
async fn demo_login_echoes_email() {
    let address = spawn_app(None).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(&format!("{}/api/auth/login", address))
        .json(&serde_json::json!({ "email": "ana@example.com" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["name"], "ana@example.com");
    assert_eq!(body["token"], "demo_token_123");

    let free_form: serde_json::Value = client
        .post(&format!("{}/api/auth/login", address))
        .json(&serde_json::json!({ "email": "not-an-email" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(free_form["success"], true);
    assert_eq!(free_form["user"]["name"], "not-an-email");
}

#[tokio::test]
async fn mock_dashboards_are_served() {
    let address = spawn_app(None).await;
    let client = reqwest::Client::new();

    let performance: serde_json::Value = client
        .get(&format!("{}/api/performance", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(performance["total_questions"], 150);
    assert_eq!(performance["weekly_progress"].as_array().unwrap().len(), 5);

    let ranking: serde_json::Value = client
        .get(&format!("{}/api/ranking", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ranking["your_position"], 4);
    assert_eq!(ranking["ranking"][3]["highlight"], true);
    assert!(ranking["ranking"][0].get("highlight").is_none());

    let roles: serde_json::Value = client
        .get(&format!("{}/api/options/roles", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(roles["roles"][0]["role"], "Nurse");

    let options: serde_json::Value = client
        .get(&format!("{}/api/options/test", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(options["content_loaded"], true);
}
