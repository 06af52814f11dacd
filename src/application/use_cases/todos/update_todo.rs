//! Update Todo Use Case
//!
//! Replaces title and completion state of a todo owned by the requester.

use std::sync::Arc;

use crate::domain::gateways::TodoRepository;
use crate::domain::models::todo::{SubjectId, TodoChanges, TodoId};
use crate::shared::errors::UseCaseError;

/// Use case for updating a todo
pub struct UpdateTodoUseCase {
    todo_repository: Arc<dyn TodoRepository>,
}

impl UpdateTodoUseCase {
    /// Create a new UpdateTodoUseCase
    #[must_use]
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    /// Execute the use case
    ///
    /// A todo owned by someone else is reported exactly like a missing one.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the new title is empty.
    /// Returns `UseCaseError::NotFound` if no todo matches both id and owner.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        id: TodoId,
        requester: &SubjectId,
        changes: TodoChanges,
    ) -> Result<(), UseCaseError> {
        if changes.title.is_empty() {
            return Err(UseCaseError::Validation(vec!["title: Title is required".to_string()]));
        }

        tracing::info!(todo_id = %id, user_id = %requester, "Updating todo");

        let updated = self
            .todo_repository
            .update_owned(id, requester, &changes)
            .await?;

        if !updated {
            tracing::warn!(todo_id = %id, user_id = %requester, "Todo not found for update");
            return Err(UseCaseError::NotFound {
                resource: "Todo".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(todo_id = %id, "Todo updated");
        Ok(())
    }
}
