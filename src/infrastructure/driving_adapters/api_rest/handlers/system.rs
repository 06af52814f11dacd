//! Public System Handlers
//!
//! Liveness text and a configuration probe. Neither requires authentication.

use axum::{extract::State, Json};

use crate::infrastructure::driving_adapters::api_rest::dto::system::EnvCheckDto;
use crate::infrastructure::driving_adapters::api_rest::AppState;

/// GET / - Liveness text naming the configured audience
pub async fn root(State(state): State<AppState>) -> String {
    format!("Todo API is running {}", state.config.auth.audience)
}

/// GET /env-check - Non-secret configuration values
pub async fn env_check(State(state): State<AppState>) -> Json<EnvCheckDto> {
    Json(EnvCheckDto::from(state.config.as_ref()))
}
