// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod state;
pub mod syllabus;
pub mod utils;

// Re-export specific items for convenience if needed
pub use routes::create_router;
pub use scoring::{AnsweredQuestion, ScoreSummary, Tier, score};
