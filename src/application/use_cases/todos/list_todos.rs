//! List Todos Use Case
//!
//! Returns todos either for every owner or only for the requester, depending
//! on the configured [`ListScope`].

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::gateways::TodoRepository;
use crate::domain::models::todo::{SubjectId, Todo};
use crate::shared::errors::UseCaseError;

/// Which rows the list operation may return
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListScope {
    /// Every row in the table, whoever owns it
    #[default]
    All,
    /// Only rows owned by the requester
    Owner,
}

/// Use case for listing todos
pub struct ListTodosUseCase {
    todo_repository: Arc<dyn TodoRepository>,
    scope: ListScope,
}

impl ListTodosUseCase {
    /// Create a new ListTodosUseCase
    #[must_use]
    pub fn new(todo_repository: Arc<dyn TodoRepository>, scope: ListScope) -> Self {
        Self { todo_repository, scope }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, requester: &SubjectId) -> Result<Vec<Todo>, UseCaseError> {
        tracing::debug!(user_id = %requester, scope = ?self.scope, "Listing todos");

        let todos = match self.scope {
            ListScope::All => self.todo_repository.find_all().await?,
            ListScope::Owner => self.todo_repository.find_by_owner(requester).await?,
        };

        tracing::debug!(count = todos.len(), "Found todos");
        Ok(todos)
    }
}
