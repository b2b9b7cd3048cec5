// src/routes.rs

use std::any::Any;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::AppError,
    handlers::{auth, exam, explanation, health, options, question, stats},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, questions, exams, options).
/// * Applies global middleware (Trace, CORS, panic recovery).
/// * Injects global state (config and LLM client).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let auth_routes = Router::new().route("/login", post(auth::login));

    let question_routes = Router::new()
        .route("/generate", post(question::generate_question))
        .route("/{id}/answer", post(question::answer_question));

    let exam_routes = Router::new().route("/submit", post(exam::submit_exam));

    let option_routes = Router::new()
        .route("/test", get(options::options_test))
        .route("/roles", get(options::list_roles));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/api/health", get(health::api_health))
        .route("/api/test", get(health::connectivity_test))
        .route("/api/explanations", post(explanation::explain_answer))
        .route("/api/performance", get(stats::get_performance))
        .route("/api/ranking", get(stats::get_ranking))
        .nest("/api/auth", auth_routes)
        .nest("/api/questions", question_routes)
        .nest("/api/exams", exam_routes)
        .nest("/api/options", option_routes)
        // Outermost first: trace, then CORS, then panic recovery around the handlers.
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::from(AnyOrigin)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
}

/// Turns a handler panic into the standard 500 JSON error.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::InternalServerError(format!("handler panicked: {}", detail)).into_response()
}
