//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::todos::{
    CreateTodoUseCase, DeleteTodoUseCase, ListTodosUseCase, UpdateTodoUseCase,
};
use crate::domain::gateways::IdentityVerifier;
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub identity_verifier: Arc<dyn IdentityVerifier>,
    pub list_todos_use_case: Arc<ListTodosUseCase>,
    pub create_todo_use_case: Arc<CreateTodoUseCase>,
    pub update_todo_use_case: Arc<UpdateTodoUseCase>,
    pub delete_todo_use_case: Arc<DeleteTodoUseCase>,
}

/// Build the full application router
///
/// Public routes (`/`, `/env-check`) sit beside the authenticated
/// `/api/todos` routes; every response gets an `x-request-id` header.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::system::root))
        .route("/env-check", get(handlers::system::env_check))
        .nest("/api/todos", handlers::todos::router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::add_identity_extension,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
