//! Delete Todo Use Case
//!
//! Hard deletes a todo owned by the requester.

use std::sync::Arc;

use crate::domain::gateways::TodoRepository;
use crate::domain::models::todo::{SubjectId, TodoId};
use crate::shared::errors::UseCaseError;

/// Use case for deleting a todo
pub struct DeleteTodoUseCase {
    todo_repository: Arc<dyn TodoRepository>,
}

impl DeleteTodoUseCase {
    /// Create a new DeleteTodoUseCase
    #[must_use]
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no todo matches both id and owner.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: TodoId, requester: &SubjectId) -> Result<(), UseCaseError> {
        tracing::info!(todo_id = %id, user_id = %requester, "Deleting todo");

        let deleted = self.todo_repository.delete_owned(id, requester).await?;

        if !deleted {
            tracing::warn!(todo_id = %id, user_id = %requester, "Todo not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Todo".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(todo_id = %id, "Todo deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::todo::{NewTodo, Todo, TodoChanges};
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockTodoRepository {
        delete_result: Mutex<Option<Result<bool, RepositoryError>>>,
    }

    impl MockTodoRepository {
        fn new() -> Self {
            Self {
                delete_result: Mutex::new(None),
            }
        }

        fn with_delete(self, result: Result<bool, RepositoryError>) -> Self {
            *self.delete_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl TodoRepository for MockTodoRepository {
        async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_owner(&self, _owner: &SubjectId) -> Result<Vec<Todo>, RepositoryError> {
            Ok(vec![])
        }

        async fn create(&self, _todo: &NewTodo) -> Result<Todo, RepositoryError> {
            unreachable!("delete never inserts")
        }

        async fn update_owned(
            &self,
            _id: TodoId,
            _owner: &SubjectId,
            _changes: &TodoChanges,
        ) -> Result<bool, RepositoryError> {
            Ok(false)
        }

        async fn delete_owned(&self, _id: TodoId, _owner: &SubjectId) -> Result<bool, RepositoryError> {
            self.delete_result.lock().unwrap().take().unwrap_or(Ok(false))
        }
    }

    #[tokio::test]
    async fn should_delete_todo_when_owned() {
        let repo = Arc::new(MockTodoRepository::new().with_delete(Ok(true)));

        let use_case = DeleteTodoUseCase::new(repo);
        let result = use_case.execute(TodoId::from(5), &SubjectId::new("alice")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_todo_does_not_match() {
        let repo = Arc::new(MockTodoRepository::new().with_delete(Ok(false)));

        let use_case = DeleteTodoUseCase::new(repo);
        let result = use_case.execute(TodoId::from(5), &SubjectId::new("alice")).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_surface_repository_failure() {
        let repo = Arc::new(
            MockTodoRepository::new().with_delete(Err(RepositoryError::Database(sqlx::Error::RowNotFound))),
        );

        let use_case = DeleteTodoUseCase::new(repo);
        let result = use_case.execute(TodoId::from(5), &SubjectId::new("alice")).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
