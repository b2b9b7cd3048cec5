// src/handlers/mod.rs

use chrono::Utc;

pub mod auth;
pub mod exam;
pub mod explanation;
pub mod health;
pub mod options;
pub mod question;
pub mod stats;

/// Builds ids such as `q-user42-20250101093000` (UTC, second precision).
pub(crate) fn timestamped_id(prefix: &str, user_id: &str) -> String {
    format!("{}-{}-{}", prefix, user_id, Utc::now().format("%Y%m%d%H%M%S"))
}
