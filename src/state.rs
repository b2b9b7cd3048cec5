use std::sync::Arc;

use axum::extract::FromRef;

use crate::{config::Config, llm::LlmClient};

/// Handle to the language model, if one is configured.
pub type SharedLlm = Option<Arc<dyn LlmClient>>;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm: SharedLlm,
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for SharedLlm {
    fn from_ref(state: &AppState) -> Self {
        state.llm.clone()
    }
}
