//! Todo DTOs
//!
//! Data transfer objects for todo API endpoints. Request bodies never carry
//! an owner; any `user_id` sent by a client is ignored during decoding.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::todo::{NewTodo, SubjectId, Todo, TodoChanges};

/// DTO for creating a new todo
///
/// `title` is optional at the serde level so that a missing or `null` title
/// is reported as a validation error rather than a decoding error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTodoDto {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,
}

impl CreateTodoDto {
    /// Convert into domain creation data owned by `owner`
    #[must_use]
    pub fn into_new_todo(self, owner: SubjectId) -> NewTodo {
        NewTodo {
            title: self.title.unwrap_or_default(),
            owner,
        }
    }
}

/// DTO for replacing title and completion state (PUT)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTodoDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub completed: bool,
}

impl From<UpdateTodoDto> for TodoChanges {
    fn from(dto: UpdateTodoDto) -> Self {
        Self {
            title: dto.title,
            completed: dto.completed,
        }
    }
}

/// Body returned after a successful create
#[derive(Debug, Clone, Serialize)]
pub struct CreatedTodoDto {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl From<Todo> for CreatedTodoDto {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id().as_i64(),
            title: todo.title().to_string(),
            completed: todo.completed(),
        }
    }
}

/// Todo response DTO used by list
#[derive(Debug, Clone, Serialize)]
pub struct TodoResponseDto {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub user_id: String,
}

impl From<Todo> for TodoResponseDto {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id().as_i64(),
            title: todo.title().to_string(),
            completed: todo.completed(),
            user_id: todo.user_id().to_string(),
        }
    }
}
