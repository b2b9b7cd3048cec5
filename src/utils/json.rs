// src/utils/json.rs

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that reports every failure as `400 Bad Request`.
///
/// Unlike `axum::Json` it does not insist on a `Content-Type` header, and it
/// runs `validator` rules before the handler sees the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if bytes.is_empty() {
            return Err(AppError::BadRequest("Request body is empty".to_string()));
        }

        let payload: T = serde_json::from_slice(&bytes)?;
        payload.validate()?;

        Ok(ValidJson(payload))
    }
}
