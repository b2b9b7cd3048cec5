// src/handlers/options.rs

use axum::{Json, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

use crate::syllabus;

/// Reports whether the syllabus content is loaded.
pub async fn options_test() -> impl IntoResponse {
    let total_roles = syllabus::role_count();

    Json(json!({
        "status": "success",
        "message": "Options endpoint is working",
        "total_roles": total_roles,
        "content_loaded": total_roles > 0,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Lists every role with its syllabus blocks.
pub async fn list_roles() -> impl IntoResponse {
    let roles: Vec<_> = syllabus::roles()
        .iter()
        .map(|r| {
            json!({
                "role": r.role,
                "blocks": r.blocks.iter().map(|b| b.name).collect::<Vec<_>>(),
            })
        })
        .collect();

    Json(json!({ "roles": roles }))
}
