// src/models/mod.rs

pub mod auth;
pub mod exam;
pub mod explanation;
pub mod question;
pub mod stats;
