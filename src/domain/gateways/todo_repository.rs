//! Todo Repository Gateway
//!
//! Abstract trait defining the contract for todo persistence operations.
//! Every method maps to exactly one statement against the store.

use async_trait::async_trait;

use crate::domain::models::todo::{NewTodo, SubjectId, Todo, TodoChanges, TodoId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Todo persistence operations
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Find every todo regardless of owner, ordered by id
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError>;

    /// Find the todos owned by `owner`, ordered by id
    async fn find_by_owner(&self, owner: &SubjectId) -> Result<Vec<Todo>, RepositoryError>;

    /// Insert a new todo with `completed = false`, returning the stored row
    async fn create(&self, todo: &NewTodo) -> Result<Todo, RepositoryError>;

    /// Update title/completed of a todo matching both `id` and `owner`.
    /// Returns whether a row was affected.
    async fn update_owned(
        &self,
        id: TodoId,
        owner: &SubjectId,
        changes: &TodoChanges,
    ) -> Result<bool, RepositoryError>;

    /// Delete a todo matching both `id` and `owner`.
    /// Returns whether a row was affected.
    async fn delete_owned(&self, id: TodoId, owner: &SubjectId) -> Result<bool, RepositoryError>;
}
