//! Todo Handlers
//!
//! HTTP handlers for todo CRUD operations.
//! All endpoints require a verified bearer token.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::todo::TodoId;
use crate::infrastructure::driving_adapters::api_rest::dto::todo::{
    CreateTodoDto, CreatedTodoDto, TodoResponseDto, UpdateTodoDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract::{ApiJson, ApiPath};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for todo endpoints
///
/// All routes require authentication via the `JwtAuth` extractor.
/// The `add_identity_extension` middleware injects the verifier into request extensions.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/{id}", put(update_todo).delete(delete_todo))
}

/// GET /api/todos - List todos
///
/// # Responses
///
/// * 200 OK - Array of todos
/// * 401 Unauthorized - Missing or invalid bearer token
/// * 500 Internal Server Error - Data store failure
#[axum::debug_handler]
async fn list_todos(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoResponseDto>>, ApiError> {
    let todos = state.list_todos_use_case.execute(&user.subject).await?;

    let response: Vec<TodoResponseDto> = todos.into_iter().map(TodoResponseDto::from).collect();
    Ok(Json(response))
}

/// POST /api/todos - Create a todo owned by the caller
///
/// # Responses
///
/// * 201 Created - `{id, title, completed}`
/// * 400 Bad Request - Missing or empty title
/// * 401 Unauthorized - Missing or invalid bearer token
/// * 500 Internal Server Error - Data store failure
#[axum::debug_handler]
async fn create_todo(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateTodoDto>,
) -> Result<(StatusCode, Json<CreatedTodoDto>), ApiError> {
    dto.validate()?;

    let todo = state
        .create_todo_use_case
        .execute(dto.into_new_todo(user.subject))
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedTodoDto::from(todo))))
}

/// PUT /api/todos/:id - Replace title and completion state
///
/// # Responses
///
/// * 204 No Content - Todo updated
/// * 400 Bad Request - Malformed id or body
/// * 401 Unauthorized - Missing or invalid bearer token
/// * 404 Not Found - No todo with this id owned by the caller
/// * 500 Internal Server Error - Data store failure
#[axum::debug_handler]
async fn update_todo(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(dto): ApiJson<UpdateTodoDto>,
) -> Result<StatusCode, ApiError> {
    dto.validate()?;

    let todo_id = TodoId::try_from(id.as_str())?;

    state
        .update_todo_use_case
        .execute(todo_id, &user.subject, dto.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/todos/:id - Delete a todo
///
/// # Responses
///
/// * 204 No Content - Todo deleted
/// * 400 Bad Request - Malformed id
/// * 401 Unauthorized - Missing or invalid bearer token
/// * 404 Not Found - No todo with this id owned by the caller
/// * 500 Internal Server Error - Data store failure
#[axum::debug_handler]
async fn delete_todo(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<StatusCode, ApiError> {
    let todo_id = TodoId::try_from(id.as_str())?;

    state.delete_todo_use_case.execute(todo_id, &user.subject).await?;

    Ok(StatusCode::NO_CONTENT)
}
