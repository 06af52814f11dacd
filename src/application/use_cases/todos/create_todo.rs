//! Create Todo Use Case
//!
//! Inserts a new, not yet completed todo owned by the requester.

use std::sync::Arc;

use crate::domain::gateways::TodoRepository;
use crate::domain::models::todo::{NewTodo, Todo};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new todo
pub struct CreateTodoUseCase {
    todo_repository: Arc<dyn TodoRepository>,
}

impl CreateTodoUseCase {
    /// Create a new CreateTodoUseCase
    #[must_use]
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the title is empty.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: NewTodo) -> Result<Todo, UseCaseError> {
        if data.title.is_empty() {
            return Err(UseCaseError::Validation(vec!["title: Title is required".to_string()]));
        }

        tracing::info!(user_id = %data.owner, "Creating todo");

        let created = self.todo_repository.create(&data).await?;

        tracing::info!(todo_id = %created.id(), user_id = %created.user_id(), "Todo created");
        Ok(created)
    }
}
